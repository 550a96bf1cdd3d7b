//! # dctc - block-DCT image approximation
//!
//! This crate provides a high-level API for approximating grayscale images
//! the way JPEG discards information, and for measuring what was lost.
//!
//! ## Quick Start
//!
//! ### Compressing
//!
//! ```
//! use dctc::{compress, Image, ReductionMode};
//!
//! let image = Image::gray(16, 16, vec![128; 256]).unwrap();
//!
//! // Keep only the DC coefficient of every 8x8 block
//! let approx = compress(&image, ReductionMode::truncate(1)).unwrap();
//! assert_eq!(approx.dimensions(), image.dimensions());
//!
//! // Or quantize with the JPEG luminance table scaled by 2
//! let approx = compress(&image, ReductionMode::quantize(2.0)).unwrap();
//! ```
//!
//! ### Sweeping
//!
//! ```
//! use dctc::{default_sweep_params, sweep, Image, SweepMode};
//!
//! let data = (0..32 * 32).map(|i| (i % 251) as u8).collect();
//! let image = Image::gray(32, 32, data).unwrap();
//!
//! for point in sweep(&image, SweepMode::ScaleFactor, &default_sweep_params()).unwrap() {
//!     println!("{} {:.2} {:.2} dB {:.4}", point.parameter, point.mse, point.psnr, point.ssim);
//! }
//! ```
//!
//! ## Pipeline
//!
//! pad to whole blocks → split → forward DCT → reduce → inverse DCT → merge
//! → crop → clip and round to 8 bits. Blocks are processed in parallel.

// Re-export core types
pub use dctc_core::{
    consts, ColorChannels, DctError, DctResult, Dimensions, Image, Plane, ReductionMode,
};

// Re-export block-level building blocks
pub use dctc_transform::{
    crop, forward_dct_8x8, inverse_dct_8x8, merge, pad, select_first_k, split, zigzag_order,
    Block, CoefficientReducer, JPEG_LUMINANCE_QUANT,
};

// Re-export compressor
pub use dctc_compressor::{compress, Compressor};

// Re-export quality evaluation
pub use dctc_quality::{
    default_sweep_params, evaluate, mse, psnr, sweep, sweep_with, SimilarityMetric, SweepMode,
    SweepPoint, WindowedSsim,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
