//! Block grid processing
//!
//! Images are padded with zeros up to a multiple of the block size and cut
//! into 8×8 blocks. Blocks are always listed in row-major order of their
//! position: every block of a block-row comes before the next block-row.

use crate::Block;
use dctc_core::consts::{BLOCK_AREA, BLOCK_SIZE};
use dctc_core::{DctError, DctResult, Dimensions, Image, Plane};

/// Round a length up to the next multiple of the block size
pub fn padded_len(len: usize) -> usize {
    len.div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}

/// Dimensions of the zero-padded grid covering `dims`
pub fn padded_dimensions(dims: Dimensions) -> Dimensions {
    Dimensions::new(
        padded_len(dims.width as usize) as u32,
        padded_len(dims.height as usize) as u32,
    )
}

/// Number of blocks along each axis (x, y) of a plane
pub fn block_count(width: usize, height: usize) -> (usize, usize) {
    (width.div_ceil(BLOCK_SIZE), height.div_ceil(BLOCK_SIZE))
}

/// Copy a single-channel image into the top-left corner of a zero-filled
/// plane whose sides are multiples of the block size.
pub fn pad(image: &Image) -> DctResult<Plane> {
    image.ensure_gray()?;

    let width = image.width() as usize;
    let height = image.height() as usize;
    let mut padded = Plane::new(padded_len(width), padded_len(height));

    for (y, src) in image.data().chunks_exact(width).enumerate() {
        let dst = &mut padded.row_mut(y)[..width];
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = s as f32;
        }
    }

    Ok(padded)
}

fn check_aligned(width: usize, height: usize) -> DctResult<()> {
    if width % BLOCK_SIZE != 0 || height % BLOCK_SIZE != 0 {
        return Err(DctError::InvalidShape(format!(
            "{}x{} is not a multiple of the {}x{} block size",
            width, height, BLOCK_SIZE, BLOCK_SIZE
        )));
    }
    Ok(())
}

/// Cut a padded plane into blocks
pub fn split(plane: &Plane) -> DctResult<Vec<Block>> {
    check_aligned(plane.width(), plane.height())?;

    let (blocks_x, blocks_y) = block_count(plane.width(), plane.height());
    let mut blocks = Vec::with_capacity(blocks_x * blocks_y);

    for by in 0..blocks_y {
        for bx in 0..blocks_x {
            let mut block = [0.0f32; BLOCK_AREA];
            for (y, dst) in block.chunks_exact_mut(BLOCK_SIZE).enumerate() {
                let row = plane.row(by * BLOCK_SIZE + y);
                dst.copy_from_slice(&row[bx * BLOCK_SIZE..(bx + 1) * BLOCK_SIZE]);
            }
            blocks.push(block);
        }
    }

    Ok(blocks)
}

/// Reassemble blocks produced by [`split`] into a plane `width` samples wide
pub fn merge(blocks: &[Block], width: usize) -> DctResult<Plane> {
    if width == 0 || width % BLOCK_SIZE != 0 {
        return Err(DctError::InvalidShape(format!(
            "merge width {} is not a positive multiple of {}",
            width, BLOCK_SIZE
        )));
    }

    let blocks_x = width / BLOCK_SIZE;
    if blocks.len() % blocks_x != 0 {
        return Err(DctError::InvalidShape(format!(
            "{} blocks do not fill whole rows of {} blocks",
            blocks.len(),
            blocks_x
        )));
    }

    let height = blocks.len() / blocks_x * BLOCK_SIZE;
    let mut plane = Plane::new(width, height);

    for (i, block) in blocks.iter().enumerate() {
        let (bx, by) = (i % blocks_x, i / blocks_x);
        for (y, src) in block.chunks_exact(BLOCK_SIZE).enumerate() {
            let row = plane.row_mut(by * BLOCK_SIZE + y);
            row[bx * BLOCK_SIZE..(bx + 1) * BLOCK_SIZE].copy_from_slice(src);
        }
    }

    Ok(plane)
}

/// Top-left `height`×`width` region of a plane
pub fn crop(plane: &Plane, height: usize, width: usize) -> DctResult<Plane> {
    if width > plane.width() || height > plane.height() {
        return Err(DctError::InvalidShape(format!(
            "cannot crop {}x{} out of {}x{}",
            width,
            height,
            plane.width(),
            plane.height()
        )));
    }

    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        data.extend_from_slice(&plane.row(y)[..width]);
    }
    Plane::from_data(width, height, data)
}
