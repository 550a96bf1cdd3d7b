//! Block-DCT approximation pipeline
//!
//! Pads the image to whole 8×8 blocks, transforms every block, discards
//! coefficient information according to a [`ReductionMode`], transforms
//! back and reassembles the 8-bit result at the original size.

use dctc_core::*;
use dctc_transform::{
    crop, forward_dct_8x8, inverse_dct_8x8, merge, pad, split, Block, CoefficientReducer,
};
use log::{debug, trace};
use rayon::prelude::*;

/// Approximates grayscale images with a fixed reduction mode
#[derive(Debug, Clone, Copy, Default)]
pub struct Compressor {
    mode: ReductionMode,
}

impl Compressor {
    pub fn new(mode: ReductionMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ReductionMode {
        self.mode
    }

    /// Compress and reconstruct a single-channel image
    ///
    /// Fails with `InvalidShape` for multi-channel input and with
    /// `InvalidParameter` if the mode's parameter is out of range. The
    /// result has the input's dimensions and is clipped to [0, 255].
    pub fn compress(&self, image: &Image) -> DctResult<Image> {
        let reconstructed = self.reconstruct(image)?;
        let output = reconstructed.to_image()?;
        trace!("clipped reconstruction to 8-bit samples");
        Ok(output)
    }

    /// Compress a single-channel image but stop before clipping, returning
    /// the raw floating point reconstruction at the original size.
    pub fn reconstruct(&self, image: &Image) -> DctResult<Plane> {
        image.ensure_gray()?;
        let reducer = CoefficientReducer::new(self.mode)?;

        let padded = pad(image)?;
        let blocks = split(&padded)?;
        debug!(
            "compressing {}x{} image as {} blocks ({}x{} padded), mode {:?}",
            image.width(),
            image.height(),
            blocks.len(),
            padded.width(),
            padded.height(),
            self.mode
        );

        let reduced: Vec<Block> = blocks
            .par_iter()
            .map(|block| process_block(block, &reducer))
            .collect();

        let merged = merge(&reduced, padded.width())?;
        crop(&merged, image.height() as usize, image.width() as usize)
    }
}

/// Forward transform, reduce and inverse transform one block
fn process_block(block: &Block, reducer: &CoefficientReducer) -> Block {
    let mut coeffs = [0.0f32; consts::BLOCK_AREA];
    forward_dct_8x8(block, &mut coeffs);

    let reduced = reducer.reduce(&coeffs);

    let mut samples = [0.0f32; consts::BLOCK_AREA];
    inverse_dct_8x8(&reduced, &mut samples);
    samples
}

/// Compress a single-channel image with the given mode
pub fn compress(image: &Image, mode: ReductionMode) -> DctResult<Image> {
    Compressor::new(mode).compress(image)
}
