//! Pixel-difference metrics

use dctc_core::consts::MAX_SAMPLE;
use dctc_core::{DctError, DctResult, Image};

/// Fail with `InvalidShape` unless both images have the same dimensions and
/// channel layout.
pub(crate) fn check_same_shape(original: &Image, reconstructed: &Image) -> DctResult<()> {
    if original.dimensions() != reconstructed.dimensions()
        || original.channels() != reconstructed.channels()
    {
        return Err(DctError::InvalidShape(format!(
            "cannot compare {}x{}x{} with {}x{}x{}",
            original.width(),
            original.height(),
            original.channel_count(),
            reconstructed.width(),
            reconstructed.height(),
            reconstructed.channel_count()
        )));
    }
    Ok(())
}

/// Mean squared error between two equally shaped images
///
/// Differences are taken in floating point, so no wrap-around occurs.
pub fn mse(original: &Image, reconstructed: &Image) -> DctResult<f64> {
    check_same_shape(original, reconstructed)?;

    let sum: f64 = original
        .data()
        .iter()
        .zip(reconstructed.data())
        .map(|(&o, &r)| {
            let diff = o as f64 - r as f64;
            diff * diff
        })
        .sum();

    Ok(sum / original.data().len() as f64)
}

/// Peak signal-to-noise ratio in dB for an 8-bit peak
///
/// A perfect reconstruction (`mse == 0`) yields `f64::INFINITY`.
pub fn psnr(mse: f64) -> f64 {
    if mse == 0.0 {
        f64::INFINITY
    } else {
        let peak = MAX_SAMPLE as f64;
        10.0 * (peak * peak / mse).log10()
    }
}
