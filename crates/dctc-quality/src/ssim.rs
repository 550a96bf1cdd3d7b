//! Structural similarity
//!
//! SSIM is exposed through the [`SimilarityMetric`] trait so the sweep can
//! run with any implementation. [`WindowedSsim`] is the built-in one: a
//! uniform square window slid over every fully contained position, with the
//! usual `K1 = 0.01`, `K2 = 0.03` stabilizers for an 8-bit dynamic range.
//! Window statistics come from summed-area tables, so the cost does not
//! depend on the window size.

use crate::metrics::check_same_shape;
use dctc_core::consts::MAX_SAMPLE;
use dctc_core::{DctError, DctResult, Image};

/// Similarity between two equally shaped single-channel images
pub trait SimilarityMetric: Sync {
    /// Score in [-1, 1], exactly 1 for identical images
    fn similarity(&self, original: &Image, reconstructed: &Image) -> DctResult<f64>;
}

/// Mean SSIM over a sliding uniform window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowedSsim {
    window: usize,
    k1: f64,
    k2: f64,
}

impl Default for WindowedSsim {
    fn default() -> Self {
        Self {
            window: 7,
            k1: 0.01,
            k2: 0.03,
        }
    }
}

impl WindowedSsim {
    pub fn new() -> Self {
        Self::default()
    }

    /// Side length of the square window. Images narrower or shorter than the
    /// window are compared with a single window covering the whole image.
    pub fn window(mut self, window: usize) -> Self {
        self.window = window.max(1);
        self
    }

    /// Stabilizing constants `K1` and `K2`
    ///
    /// Both must be positive and finite; with a zero constant a flat image
    /// would score 0/0.
    pub fn constants(mut self, k1: f64, k2: f64) -> DctResult<Self> {
        for (name, k) in [("K1", k1), ("K2", k2)] {
            if !k.is_finite() || k <= 0.0 {
                return Err(DctError::InvalidParameter(format!(
                    "SSIM constant {} must be positive and finite, got {}",
                    name, k
                )));
            }
        }
        self.k1 = k1;
        self.k2 = k2;
        Ok(self)
    }
}

/// Summed-area table with a zero row and column in front
struct Integral {
    stride: usize,
    sums: Vec<f64>,
}

impl Integral {
    fn new(width: usize, height: usize, value: impl Fn(usize) -> f64) -> Self {
        let stride = width + 1;
        let mut sums = vec![0.0; stride * (height + 1)];
        for y in 0..height {
            let mut row_sum = 0.0;
            for x in 0..width {
                row_sum += value(y * width + x);
                sums[(y + 1) * stride + x + 1] = sums[y * stride + x + 1] + row_sum;
            }
        }
        Self { stride, sums }
    }

    /// Sum over `[x, x + w) × [y, y + h)`
    fn window(&self, x: usize, y: usize, w: usize, h: usize) -> f64 {
        let s = self.stride;
        self.sums[(y + h) * s + x + w] - self.sums[y * s + x + w] - self.sums[(y + h) * s + x]
            + self.sums[y * s + x]
    }
}

impl SimilarityMetric for WindowedSsim {
    fn similarity(&self, original: &Image, reconstructed: &Image) -> DctResult<f64> {
        check_same_shape(original, reconstructed)?;
        original.ensure_gray()?;

        let width = original.width() as usize;
        let height = original.height() as usize;
        let a = original.data();
        let b = reconstructed.data();

        let sum_a = Integral::new(width, height, |i| a[i] as f64);
        let sum_b = Integral::new(width, height, |i| b[i] as f64);
        let sum_aa = Integral::new(width, height, |i| (a[i] as f64) * (a[i] as f64));
        let sum_bb = Integral::new(width, height, |i| (b[i] as f64) * (b[i] as f64));
        let sum_ab = Integral::new(width, height, |i| (a[i] as f64) * (b[i] as f64));

        let (win_w, win_h) = if width < self.window || height < self.window {
            (width, height)
        } else {
            (self.window, self.window)
        };
        let n = (win_w * win_h) as f64;
        // Sample (unbiased) covariance; a single sample has none to correct.
        let cov_norm = if n > 1.0 { n / (n - 1.0) } else { 1.0 };

        let range = MAX_SAMPLE as f64;
        let c1 = (self.k1 * range).powi(2);
        let c2 = (self.k2 * range).powi(2);

        let mut total = 0.0;
        let mut count = 0usize;
        for y in 0..=(height - win_h) {
            for x in 0..=(width - win_w) {
                let mu_a = sum_a.window(x, y, win_w, win_h) / n;
                let mu_b = sum_b.window(x, y, win_w, win_h) / n;
                let var_a = cov_norm * (sum_aa.window(x, y, win_w, win_h) / n - mu_a * mu_a);
                let var_b = cov_norm * (sum_bb.window(x, y, win_w, win_h) / n - mu_b * mu_b);
                let cov = cov_norm * (sum_ab.window(x, y, win_w, win_h) / n - mu_a * mu_b);

                let numerator = (2.0 * mu_a * mu_b + c1) * (2.0 * cov + c2);
                let denominator = (mu_a * mu_a + mu_b * mu_b + c1) * (var_a + var_b + c2);
                total += numerator / denominator;
                count += 1;
            }
        }

        Ok((total / count as f64).clamp(-1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dctc_core::{ColorChannels, DctError, Dimensions};

    fn mix(mut x: u32) -> u32 {
        x ^= x >> 16;
        x = x.wrapping_mul(0x7feb_352d);
        x ^= x >> 15;
        x = x.wrapping_mul(0x846c_a68b);
        x ^ (x >> 16)
    }

    /// Uniform pseudo-random noise, uncorrelated across seeds
    fn textured(width: u32, height: u32, seed: u32) -> Image {
        let data = (0..width * height)
            .map(|i| (mix(i ^ seed.wrapping_mul(0x9e37_79b9)) & 0xff) as u8)
            .collect();
        Image::gray(width, height, data).unwrap()
    }

    #[test]
    fn test_identity_is_one() {
        let ssim = WindowedSsim::default();
        for (w, h) in [(1, 1), (3, 5), (16, 16), (40, 23)] {
            let image = textured(w, h, 7);
            assert_eq!(ssim.similarity(&image, &image).unwrap(), 1.0, "{}x{}", w, h);
        }
    }

    #[test]
    fn test_range_and_ordering() {
        let ssim = WindowedSsim::default();
        let original = textured(32, 32, 1);

        let slightly_off = Image::gray(
            32,
            32,
            original.data().iter().map(|&v| v.saturating_add(3)).collect(),
        )
        .unwrap();
        let unrelated = textured(32, 32, 2);

        let close = ssim.similarity(&original, &slightly_off).unwrap();
        let far = ssim.similarity(&original, &unrelated).unwrap();
        assert!((-1.0..=1.0).contains(&close));
        assert!((-1.0..=1.0).contains(&far));
        assert!(close > far, "close={} far={}", close, far);
        assert!(close > 0.9);
    }

    #[test]
    fn test_inverted_image_is_negative() {
        let ssim = WindowedSsim::default();
        let original = textured(24, 24, 3);
        let inverted = Image::gray(24, 24, original.data().iter().map(|&v| 255 - v).collect())
            .unwrap();
        assert!(ssim.similarity(&original, &inverted).unwrap() < 0.0);
    }

    #[test]
    fn test_integral_window_sum() {
        let values: Vec<f64> = (0..12).map(|v| v as f64).collect();
        let table = Integral::new(4, 3, |i| values[i]);
        // rows 1..3, columns 1..3 of [[0,1,2,3],[4,5,6,7],[8,9,10,11]]
        assert_eq!(table.window(1, 1, 2, 2), 5.0 + 6.0 + 9.0 + 10.0);
        assert_eq!(table.window(0, 0, 4, 3), 66.0);
    }

    #[test]
    fn test_rejects_mismatched_or_color() {
        let ssim = WindowedSsim::default();
        let a = textured(8, 8, 0);
        let b = textured(8, 4, 0);
        assert!(matches!(
            ssim.similarity(&a, &b),
            Err(DctError::InvalidShape(_))
        ));

        let rgb = Image::new(Dimensions::new(8, 8), ColorChannels::RGB).unwrap();
        assert!(ssim.similarity(&rgb, &rgb).is_err());
    }

    #[test]
    fn test_window_builder() {
        let ssim = WindowedSsim::new().window(0).constants(0.02, 0.04).unwrap();
        assert_eq!(ssim.window, 1);
        assert_eq!(ssim.k1, 0.02);
        assert_eq!(ssim.k2, 0.04);
    }

    #[test]
    fn test_constants_must_be_positive() {
        for (k1, k2) in [(0.0, 0.03), (0.01, 0.0), (-0.01, 0.03), (0.01, f64::NAN)] {
            assert!(matches!(
                WindowedSsim::new().constants(k1, k2),
                Err(DctError::InvalidParameter(_))
            ));
        }

        // Flat images stay at exactly 1 with small positive constants.
        let ssim = WindowedSsim::new().constants(1e-9, 1e-9).unwrap();
        let flat = Image::gray(16, 16, vec![0; 256]).unwrap();
        assert_eq!(ssim.similarity(&flat, &flat).unwrap(), 1.0);
    }

    /// SSIM from whole-image statistics with sample covariance
    fn global_ssim(a: &Image, b: &Image) -> f64 {
        let n = a.data().len() as f64;
        let mean = |img: &Image| img.data().iter().map(|&v| v as f64).sum::<f64>() / n;
        let (mu_a, mu_b) = (mean(a), mean(b));
        let cov = |x: &Image, mx: f64, y: &Image, my: f64| {
            x.data()
                .iter()
                .zip(y.data())
                .map(|(&p, &q)| (p as f64 - mx) * (q as f64 - my))
                .sum::<f64>()
                / (n - 1.0)
        };
        let c1 = (0.01 * 255.0f64).powi(2);
        let c2 = (0.03 * 255.0f64).powi(2);
        ((2.0 * mu_a * mu_b + c1) * (2.0 * cov(a, mu_a, b, mu_b) + c2))
            / ((mu_a * mu_a + mu_b * mu_b + c1)
                * (cov(a, mu_a, a, mu_a) + cov(b, mu_b, b, mu_b) + c2))
    }

    #[test]
    fn test_narrow_image_uses_one_global_window() {
        let ssim = WindowedSsim::default();
        for (w, h) in [(3, 20), (20, 3), (5, 5)] {
            let a = textured(w, h, 4);
            let b = textured(w, h, 5);
            let expected = global_ssim(&a, &b);
            let actual = ssim.similarity(&a, &b).unwrap();
            assert!(
                (actual - expected).abs() < 1e-9,
                "{}x{}: {} vs {}",
                w,
                h,
                actual,
                expected
            );
        }
    }
}
