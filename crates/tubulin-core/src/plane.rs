use image::DynamicImage;
use ndarray::Array2;

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{Result, TubulinError};

/// A single fluorescence channel as a 2D intensity grid.
/// Pixel values are f32 in [0.0, 1.0], row-major, shape = (height, width).
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelPlane {
    pub data: Array2<f32>,
}

impl ChannelPlane {
    pub fn new(data: Array2<f32>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}

/// A single-cell color image split into its fluorescence channels.
/// Green carries the microtubule signal, blue the nuclear stain.
#[derive(Clone, Debug)]
pub struct CellImage {
    pub red: ChannelPlane,
    pub green: ChannelPlane,
    pub blue: ChannelPlane,
}

impl CellImage {
    pub fn new(red: ChannelPlane, green: ChannelPlane, blue: ChannelPlane) -> Self {
        Self { red, green, blue }
    }

    /// Split a decoded image into channel planes.
    ///
    /// Grayscale input is rejected, not coerced: the pipeline needs separate
    /// green and blue stains. Alpha, if present, is dropped.
    pub fn from_dynamic(img: &DynamicImage) -> Result<Self> {
        let channels = img.color().channel_count();
        if channels < COLOR_CHANNEL_COUNT {
            return Err(TubulinError::InvalidImageKind { channels });
        }

        let rgb = img.to_rgb32f();
        let (w, h) = rgb.dimensions();

        let mut red = Array2::<f32>::zeros((h as usize, w as usize));
        let mut green = Array2::<f32>::zeros((h as usize, w as usize));
        let mut blue = Array2::<f32>::zeros((h as usize, w as usize));

        for (col, row, pixel) in rgb.enumerate_pixels() {
            let idx = [row as usize, col as usize];
            red[idx] = pixel.0[0];
            green[idx] = pixel.0[1];
            blue[idx] = pixel.0[2];
        }

        Ok(Self::new(
            ChannelPlane::new(red),
            ChannelPlane::new(green),
            ChannelPlane::new(blue),
        ))
    }

    pub fn width(&self) -> usize {
        self.green.width()
    }

    pub fn height(&self) -> usize {
        self.green.height()
    }
}
