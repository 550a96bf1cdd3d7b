//! Block transform operations
//!
//! This crate implements the block grid (padding, splitting and merging of
//! 8×8 tiles), the 8×8 DCT, zig-zag coefficient ordering, the JPEG luminance
//! quantization table, and the coefficient reducer built on top of them.

pub mod dct;
pub mod grid;
pub mod quantization;
pub mod reducer;
pub mod zigzag;

pub use dct::*;
pub use grid::*;
pub use quantization::*;
pub use reducer::*;
pub use zigzag::*;

/// An 8×8 tile of samples or coefficients in row-major order
pub type Block = [f32; dctc_core::consts::BLOCK_AREA];
