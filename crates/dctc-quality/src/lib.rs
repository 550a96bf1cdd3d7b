//! Distortion metrics and parameter sweeps
//!
//! Measures how far a reconstruction is from its source (MSE, PSNR and a
//! pluggable structural similarity index) and evaluates the compressor over
//! a range of reduction parameters.

pub mod metrics;
pub mod ssim;
pub mod sweep;

pub use metrics::*;
pub use ssim::*;
pub use sweep::*;
