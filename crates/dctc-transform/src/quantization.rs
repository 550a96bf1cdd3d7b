//! Quantization for lossy compression

use crate::Block;
use dctc_core::consts::BLOCK_AREA;
use dctc_core::{DctError, DctResult};

/// Quantization table for 8x8 blocks
pub type QuantTable = [u16; BLOCK_AREA];

/// Step sizes as floating point, already multiplied by a scale factor
pub type ScaledQuantTable = [f32; BLOCK_AREA];

/// Whole-numbered quantization levels, kept in floating point so that tiny
/// step sizes do not overflow an integer level
pub type QuantLevels = [f32; BLOCK_AREA];

/// Standard JPEG luminance quantization table (ITU-T T.81 Annex K)
pub const JPEG_LUMINANCE_QUANT: QuantTable = [
    16, 11, 10, 16, 24, 40, 51, 61, 12, 12, 14, 19, 26, 58, 60, 55, 14, 13, 16, 24, 40, 57, 69,
    56, 14, 17, 22, 29, 51, 87, 80, 62, 18, 22, 37, 56, 68, 109, 103, 77, 24, 35, 55, 64, 81,
    104, 113, 92, 49, 64, 78, 87, 103, 121, 120, 101, 72, 92, 95, 98, 112, 100, 103, 99,
];

/// Multiply the luminance table by `scale`
///
/// A zero, negative or non-finite scale would divide by zero (or flip the
/// rounding grid) and is reported as `InvalidParameter`.
pub fn scaled_quant_table(scale: f32) -> DctResult<ScaledQuantTable> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(DctError::InvalidParameter(format!(
            "scale factor must be positive and finite, got {}",
            scale
        )));
    }

    Ok(core::array::from_fn(|i| {
        JPEG_LUMINANCE_QUANT[i] as f32 * scale
    }))
}

/// Quantize DCT coefficients
///
/// Rounds half away from zero. A step small enough that the level is not
/// representable yields a non-finite level.
pub fn quantize(coeffs: &Block, table: &ScaledQuantTable, output: &mut QuantLevels) {
    for i in 0..BLOCK_AREA {
        output[i] = (coeffs[i] / table[i]).round();
    }
}

/// Dequantize DCT coefficients
pub fn dequantize(levels: &QuantLevels, table: &ScaledQuantTable, output: &mut Block) {
    for i in 0..BLOCK_AREA {
        output[i] = levels[i] * table[i];
    }
}

/// Snap every coefficient to the nearest multiple of its step
///
/// Where the step is below what `f32` can resolve for that coefficient the
/// coefficient is kept as is.
pub fn requantize(coeffs: &Block, table: &ScaledQuantTable) -> Block {
    let mut levels = [0.0f32; BLOCK_AREA];
    let mut snapped = [0.0f32; BLOCK_AREA];
    quantize(coeffs, table, &mut levels);
    dequantize(&levels, table, &mut snapped);

    for (value, &coeff) in snapped.iter_mut().zip(coeffs) {
        if !value.is_finite() {
            *value = coeff;
        }
    }
    snapped
}
