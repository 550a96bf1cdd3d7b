//! Zig-zag ordering of DCT coefficients
//!
//! The order visits the 64 positions of an 8×8 block by anti-diagonals,
//! alternating direction, so that coefficients come out from the lowest
//! combined frequency to the highest. It is derived once on first use.

use crate::Block;
use dctc_core::consts::{BLOCK_AREA, BLOCK_SIZE, MAX_COEFFICIENTS, MIN_COEFFICIENTS};
use dctc_core::{DctError, DctResult};

lazy_static::lazy_static! {
    static ref ZIGZAG: [usize; BLOCK_AREA] = build_zigzag(BLOCK_SIZE);
}

/// Walk the anti-diagonals of an `n`×`n` grid, going up-right on even
/// diagonals and down-left on odd ones.
fn build_zigzag(n: usize) -> [usize; BLOCK_AREA] {
    let mut order = [0usize; BLOCK_AREA];
    let mut i = 0;

    for diagonal in 0..(2 * n - 1) {
        let first = diagonal.saturating_sub(n - 1);
        let last = diagonal.min(n - 1);
        if diagonal % 2 == 0 {
            for row in (first..=last).rev() {
                order[i] = row * n + (diagonal - row);
                i += 1;
            }
        } else {
            for row in first..=last {
                order[i] = row * n + (diagonal - row);
                i += 1;
            }
        }
    }

    order
}

/// Row-major block positions in zig-zag order
pub fn zigzag_order() -> &'static [usize; BLOCK_AREA] {
    &ZIGZAG
}

/// Keep the first `k` coefficients in zig-zag order and zero the rest.
///
/// Fails with `InvalidParameter` unless `1 <= k <= 64`.
pub fn select_first_k(coeffs: &Block, k: usize) -> DctResult<Block> {
    if !(MIN_COEFFICIENTS..=MAX_COEFFICIENTS).contains(&k) {
        return Err(DctError::InvalidParameter(format!(
            "coefficient count {} outside {}..={}",
            k, MIN_COEFFICIENTS, MAX_COEFFICIENTS
        )));
    }

    Ok(keep_first_k(coeffs, k))
}

/// Unchecked body of [`select_first_k`]; `k` must already be in range.
pub(crate) fn keep_first_k(coeffs: &Block, k: usize) -> Block {
    let mut reduced = [0.0f32; BLOCK_AREA];
    for &pos in &zigzag_order()[..k] {
        reduced[pos] = coeffs[pos];
    }
    reduced
}
