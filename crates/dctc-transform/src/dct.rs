//! 8×8 DCT using separable 1D transforms
//!
//! The 2D transform is computed as a 1D pass over every row followed by a 1D
//! pass over every column, with the cosine basis precomputed once. Both
//! directions use orthonormal scaling, so the forward transform of a
//! constant block of value `v` has DC coefficient `8 * v` and the inverse
//! transform is the exact transpose of the forward one.

use crate::Block;
use dctc_core::consts::BLOCK_SIZE;
use std::f32::consts::PI;

const N: usize = BLOCK_SIZE;

lazy_static::lazy_static! {
    /// `BASIS[u][x] = c(u) * cos((2x + 1) u π / 16)` with orthonormal `c(u)`
    static ref BASIS: [[f32; N]; N] = {
        let mut table = [[0.0f32; N]; N];
        for (u, row) in table.iter_mut().enumerate() {
            let scale = if u == 0 {
                (1.0 / N as f32).sqrt()
            } else {
                (2.0 / N as f32).sqrt()
            };
            for (x, value) in row.iter_mut().enumerate() {
                let angle = ((2 * x + 1) as f32 * u as f32 * PI) / (2 * N) as f32;
                *value = scale * angle.cos();
            }
        }
        table
    };
}

#[inline]
fn dct_1d_forward(input: &[f32; N], output: &mut [f32; N]) {
    for (u, out) in output.iter_mut().enumerate() {
        let basis = &BASIS[u];
        *out = input.iter().zip(basis.iter()).map(|(a, b)| a * b).sum();
    }
}

#[inline]
fn dct_1d_inverse(input: &[f32; N], output: &mut [f32; N]) {
    for (x, out) in output.iter_mut().enumerate() {
        *out = (0..N).map(|u| input[u] * BASIS[u][x]).sum();
    }
}

fn separable(input: &Block, output: &mut Block, pass: fn(&[f32; N], &mut [f32; N])) {
    let mut temp = [0.0f32; N * N];
    let mut line = [0.0f32; N];
    let mut transformed = [0.0f32; N];

    // Rows
    for y in 0..N {
        line.copy_from_slice(&input[y * N..(y + 1) * N]);
        pass(&line, &mut transformed);
        temp[y * N..(y + 1) * N].copy_from_slice(&transformed);
    }

    // Columns
    for x in 0..N {
        for y in 0..N {
            line[y] = temp[y * N + x];
        }
        pass(&line, &mut transformed);
        for y in 0..N {
            output[y * N + x] = transformed[y];
        }
    }
}

/// 8×8 DCT-II (forward transform)
///
/// `output[0]` is the DC term; row index grows with vertical frequency and
/// column index with horizontal frequency.
pub fn forward_dct_8x8(input: &Block, output: &mut Block) {
    separable(input, output, dct_1d_forward);
}

/// 8×8 DCT-III (inverse transform)
pub fn inverse_dct_8x8(input: &Block, output: &mut Block) {
    separable(input, output, dct_1d_inverse);
}
