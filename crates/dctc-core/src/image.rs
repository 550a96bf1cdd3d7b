//! Image data structures

use crate::consts::MAX_SAMPLE;
use crate::{ColorChannels, DctError, DctResult, Dimensions};

/// BT.601 luma weights applied by [`Image::to_gray`]
const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// An 8-bit image with interleaved channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    dimensions: Dimensions,
    channels: ColorChannels,
    data: Vec<u8>,
}

impl Image {
    /// Create a zero-filled image
    pub fn new(dimensions: Dimensions, channels: ColorChannels) -> DctResult<Self> {
        check_dimensions(dimensions)?;
        let size = dimensions.pixel_count() * channels.count();
        Ok(Self {
            dimensions,
            channels,
            data: vec![0; size],
        })
    }

    /// Wrap an existing interleaved buffer
    pub fn from_raw(
        dimensions: Dimensions,
        channels: ColorChannels,
        data: Vec<u8>,
    ) -> DctResult<Self> {
        check_dimensions(dimensions)?;
        let expected = dimensions.pixel_count() * channels.count();
        if data.len() != expected {
            return Err(DctError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            dimensions,
            channels,
            data,
        })
    }

    /// Wrap a single-channel buffer
    pub fn gray(width: u32, height: u32, data: Vec<u8>) -> DctResult<Self> {
        Self::from_raw(Dimensions::new(width, height), ColorChannels::Gray, data)
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn channels(&self) -> ColorChannels {
        self.channels
    }

    pub fn pixel_count(&self) -> usize {
        self.dimensions.pixel_count()
    }

    pub fn channel_count(&self) -> usize {
        self.channels.count()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Sample of channel 0 at (x, y)
    ///
    /// # Panics
    ///
    /// Panics if (x, y) lies outside the image.
    pub fn sample(&self, x: u32, y: u32) -> u8 {
        let idx = (y as usize * self.width() as usize + x as usize) * self.channel_count();
        self.data[idx]
    }

    /// Fail with `InvalidShape` unless this is a single-channel image
    pub fn ensure_gray(&self) -> DctResult<()> {
        if self.channels.is_gray() {
            Ok(())
        } else {
            Err(DctError::InvalidShape(format!(
                "expected a single channel image, got {} channels",
                self.channel_count()
            )))
        }
    }

    /// Convert to a single-channel image using BT.601 luma weights.
    ///
    /// Alpha is dropped. A grayscale image is returned as a copy.
    pub fn to_gray(&self) -> Image {
        let data = match self.channels {
            ColorChannels::Gray => self.data.clone(),
            ColorChannels::GrayAlpha => self.data.chunks_exact(2).map(|px| px[0]).collect(),
            ColorChannels::RGB | ColorChannels::RGBA => self
                .data
                .chunks_exact(self.channel_count())
                .map(|px| {
                    let luma = LUMA_WEIGHTS[0] * px[0] as f32
                        + LUMA_WEIGHTS[1] * px[1] as f32
                        + LUMA_WEIGHTS[2] * px[2] as f32;
                    luma.round().clamp(0.0, MAX_SAMPLE) as u8
                })
                .collect(),
        };

        Image {
            dimensions: self.dimensions,
            channels: ColorChannels::Gray,
            data,
        }
    }

    /// Floating point copy of a single-channel image
    pub fn to_plane(&self) -> DctResult<Plane> {
        self.ensure_gray()?;
        Plane::from_data(
            self.width() as usize,
            self.height() as usize,
            self.data.iter().map(|&v| v as f32).collect(),
        )
    }
}

fn check_dimensions(dimensions: Dimensions) -> DctResult<()> {
    if dimensions.width == 0 || dimensions.height == 0 {
        return Err(DctError::InvalidDimensions {
            width: dimensions.width,
            height: dimensions.height,
        });
    }
    Ok(())
}

/// A row-major grid of floating point samples
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl Plane {
    /// Create a zero-filled plane
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    pub fn from_data(width: usize, height: usize, data: Vec<f32>) -> DctResult<Self> {
        if data.len() != width * height {
            return Err(DctError::BufferSizeMismatch {
                expected: width * height,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Sample at (x, y)
    ///
    /// # Panics
    ///
    /// Panics if (x, y) lies outside the plane. The same holds for
    /// [`set`](Self::set), and for [`row`](Self::row) and
    /// [`row_mut`](Self::row_mut) with `y >= height`.
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        self.data[y * self.width + x] = value;
    }

    pub fn row(&self, y: usize) -> &[f32] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        &mut self.data[y * self.width..(y + 1) * self.width]
    }

    /// Clip to [0, 255], round half away from zero and narrow to 8 bits.
    pub fn to_image(&self) -> DctResult<Image> {
        let data = self
            .data
            .iter()
            .map(|&v| v.clamp(0.0, MAX_SAMPLE).round() as u8)
            .collect();
        Image::gray(self.width as u32, self.height as u32, data)
    }
}
