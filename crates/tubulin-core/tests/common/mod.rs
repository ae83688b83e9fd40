#![allow(dead_code)]

use ndarray::Array2;

use tubulin_core::plane::{CellImage, ChannelPlane};
use tubulin_core::quantify::{QuantifyConfig, ThresholdMethod};

/// Build a plane of the given shape filled with one value.
pub fn uniform_plane(h: usize, w: usize, value: f32) -> Array2<f32> {
    Array2::from_elem((h, w), value)
}

/// Assemble a cell image from raw channel planes.
pub fn cell_image(red: Array2<f32>, green: Array2<f32>, blue: Array2<f32>) -> CellImage {
    CellImage::new(
        ChannelPlane::new(red),
        ChannelPlane::new(green),
        ChannelPlane::new(blue),
    )
}

/// Paint a solid rectangle of `value`: rows `top..top+height`,
/// cols `left..left+width`.
pub fn paint_block(
    plane: &mut Array2<f32>,
    top: usize,
    left: usize,
    height: usize,
    width: usize,
    value: f32,
) {
    for row in top..top + height {
        for col in left..left + width {
            plane[[row, col]] = value;
        }
    }
}

/// 10x10 fixture: a 4x4 bright-green block with a 2x2 bright-blue block
/// fully inside it, rest black.
pub fn block_fixture() -> CellImage {
    let mut green = uniform_plane(10, 10, 0.0);
    let mut blue = uniform_plane(10, 10, 0.0);
    paint_block(&mut green, 2, 2, 4, 4, 1.0);
    paint_block(&mut blue, 3, 3, 2, 2, 1.0);
    cell_image(uniform_plane(10, 10, 0.0), green, blue)
}

/// Size-1 kernels keep block edges intact for deterministic pixel counts.
pub fn trivial_config() -> QuantifyConfig {
    QuantifyConfig {
        gaussian_blur_size: 1,
        morphology_kernel_size: 1,
        threshold_method: ThresholdMethod::Otsu,
    }
}
