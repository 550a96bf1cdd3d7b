//! Quality sweeps over a reduction parameter

use crate::metrics::{mse, psnr};
use crate::ssim::{SimilarityMetric, WindowedSsim};
use dctc_compressor::Compressor;
use dctc_core::{DctError, DctResult, Image, ReductionMode};
use log::debug;
use rayon::prelude::*;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Which parameter a sweep varies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SweepMode {
    /// Quantization with the luminance table scaled by the parameter
    ScaleFactor,
    /// Truncation to the parameter's number of zig-zag coefficients
    CoefficientCount,
}

impl SweepMode {
    /// The reduction mode evaluated for one sweep parameter
    ///
    /// Coefficient counts must be whole numbers.
    pub fn reduction(&self, parameter: f32) -> DctResult<ReductionMode> {
        let mode = match self {
            SweepMode::ScaleFactor => ReductionMode::quantize(parameter),
            SweepMode::CoefficientCount => {
                if !parameter.is_finite() || parameter.fract() != 0.0 || parameter < 0.0 {
                    return Err(DctError::InvalidParameter(format!(
                        "coefficient count must be a whole number, got {}",
                        parameter
                    )));
                }
                ReductionMode::truncate(parameter as usize)
            }
        };
        mode.validate()?;
        Ok(mode)
    }
}

impl FromStr for SweepMode {
    type Err = DctError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scale_factor" | "scale" => Ok(SweepMode::ScaleFactor),
            "coeff" | "coefficients" => Ok(SweepMode::CoefficientCount),
            other => Err(DctError::InvalidParameter(format!(
                "unknown sweep mode '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for SweepMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepMode::ScaleFactor => write!(f, "scale_factor"),
            SweepMode::CoefficientCount => write!(f, "coeff"),
        }
    }
}

/// Distortion of one reconstruction
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepPoint {
    pub parameter: f32,
    pub mse: f64,
    /// `f64::INFINITY` for a perfect reconstruction
    pub psnr: f64,
    pub ssim: f64,
}

/// Parameters swept when the caller has no preference
pub fn default_sweep_params() -> Vec<f32> {
    (1..=5).map(|p| p as f32).collect()
}

/// Compress a single-channel image with `mode` and measure the result
pub fn evaluate<M: SimilarityMetric + ?Sized>(
    image: &Image,
    mode: ReductionMode,
    metric: &M,
) -> DctResult<SweepPoint> {
    let reconstructed = Compressor::new(mode).compress(image)?;
    let mse = mse(image, &reconstructed)?;
    let point = SweepPoint {
        parameter: mode.parameter(),
        mse,
        psnr: psnr(mse),
        ssim: metric.similarity(image, &reconstructed)?,
    };
    debug!(
        "{:?}: mse {:.3}, psnr {:.3} dB, ssim {:.4}",
        mode, point.mse, point.psnr, point.ssim
    );
    Ok(point)
}

/// Evaluate every parameter with the built-in windowed SSIM
pub fn sweep(image: &Image, mode: SweepMode, params: &[f32]) -> DctResult<Vec<SweepPoint>> {
    sweep_with(image, mode, params, &WindowedSsim::default())
}

/// Evaluate every parameter with a caller-supplied similarity metric
///
/// Multi-channel images are converted to grayscale first. All parameters are
/// validated before any compression runs. Points are returned in the order
/// of `params`, without sorting or deduplication.
pub fn sweep_with<M: SimilarityMetric + ?Sized>(
    image: &Image,
    mode: SweepMode,
    params: &[f32],
    metric: &M,
) -> DctResult<Vec<SweepPoint>> {
    let gray = if image.channels().is_gray() {
        Cow::Borrowed(image)
    } else {
        debug!("converting {}-channel image to grayscale", image.channel_count());
        Cow::Owned(image.to_gray())
    };

    let modes = params
        .iter()
        .map(|&p| mode.reduction(p))
        .collect::<DctResult<Vec<_>>>()?;
    debug!("sweeping {} over {} parameters", mode, modes.len());

    modes
        .par_iter()
        .map(|&m| evaluate(&gray, m, metric))
        .collect()
}
