//! Constants used throughout the engine

/// Edge length of a transform block
pub const BLOCK_SIZE: usize = 8;

/// Number of coefficients in a block
pub const BLOCK_AREA: usize = BLOCK_SIZE * BLOCK_SIZE;

/// Largest 8-bit sample value
pub const MAX_SAMPLE: f32 = 255.0;

/// Scale factor used when none is given
pub const DEFAULT_SCALE_FACTOR: f32 = 1.0;

/// Minimum and maximum coefficient counts for truncation
pub const MIN_COEFFICIENTS: usize = 1;
pub const MAX_COEFFICIENTS: usize = BLOCK_AREA;
