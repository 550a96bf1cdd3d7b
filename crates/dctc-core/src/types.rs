//! Core types for the compression engine

use crate::consts::{DEFAULT_SCALE_FACTOR, MAX_COEFFICIENTS, MIN_COEFFICIENTS};
use crate::{DctError, DctResult};

/// Number of interleaved channels in an 8-bit image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorChannels {
    /// Grayscale
    Gray = 1,
    /// Grayscale + Alpha
    GrayAlpha = 2,
    /// RGB
    RGB = 3,
    /// RGBA
    RGBA = 4,
}

impl ColorChannels {
    pub fn count(&self) -> usize {
        *self as usize
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, ColorChannels::GrayAlpha | ColorChannels::RGBA)
    }

    pub fn is_gray(&self) -> bool {
        matches!(self, ColorChannels::Gray)
    }
}

/// Image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// How transform coefficients are discarded
///
/// The two strategies are mutually exclusive. `Truncate` keeps the first
/// `coefficients` positions of the zig-zag order in every block, `Quantize`
/// rounds every coefficient to a multiple of the luminance table scaled by
/// `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReductionMode {
    Truncate { coefficients: usize },
    Quantize { scale: f32 },
}

impl Default for ReductionMode {
    fn default() -> Self {
        ReductionMode::Quantize {
            scale: DEFAULT_SCALE_FACTOR,
        }
    }
}

impl ReductionMode {
    pub fn truncate(coefficients: usize) -> Self {
        ReductionMode::Truncate { coefficients }
    }

    pub fn quantize(scale: f32) -> Self {
        ReductionMode::Quantize { scale }
    }

    /// Check the carried parameter against its valid range.
    pub fn validate(&self) -> DctResult<()> {
        match *self {
            ReductionMode::Truncate { coefficients } => {
                if !(MIN_COEFFICIENTS..=MAX_COEFFICIENTS).contains(&coefficients) {
                    return Err(DctError::InvalidParameter(format!(
                        "coefficient count {} outside {}..={}",
                        coefficients, MIN_COEFFICIENTS, MAX_COEFFICIENTS
                    )));
                }
            }
            ReductionMode::Quantize { scale } => {
                if !scale.is_finite() || scale <= 0.0 {
                    return Err(DctError::InvalidParameter(format!(
                        "scale factor must be positive and finite, got {}",
                        scale
                    )));
                }
            }
        }
        Ok(())
    }

    /// The numeric parameter carried by this mode.
    pub fn parameter(&self) -> f32 {
        match *self {
            ReductionMode::Truncate { coefficients } => coefficients as f32,
            ReductionMode::Quantize { scale } => scale,
        }
    }
}
