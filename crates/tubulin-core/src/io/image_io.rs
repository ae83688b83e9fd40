use std::path::Path;

use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use ndarray::Array2;

use crate::error::Result;
use crate::plane::CellImage;

/// Load a color image file (PNG/JPG/TIFF) into channel planes.
///
/// Grayscale sources fail with `InvalidImageKind`.
pub fn load_cell_image(path: &Path) -> Result<CellImage> {
    let img = image::open(path)?;
    CellImage::from_dynamic(&img)
}

/// Render a binary mask as an 8-bit grayscale image (255 = true).
pub fn mask_to_gray(mask: &Array2<bool>) -> GrayImage {
    let (h, w) = mask.dim();
    let mut img = GrayImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let val = if mask[[row, col]] { 255 } else { 0 };
            img.put_pixel(col as u32, row as u32, Luma([val]));
        }
    }
    img
}

/// Save a binary mask as an 8-bit grayscale PNG.
pub fn save_mask_png(mask: &Array2<bool>, path: &Path) -> Result<()> {
    mask_to_gray(mask).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Render the original image with counted pixels highlighted in pure green.
pub fn render_overlay(image: &CellImage, mask: &Array2<bool>) -> RgbImage {
    let h = image.height();
    let w = image.width();
    let mut img = RgbImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let pixel = if mask[[row, col]] {
                Rgb([0, 255, 0])
            } else {
                Rgb([
                    (image.red.data[[row, col]].clamp(0.0, 1.0) * 255.0) as u8,
                    (image.green.data[[row, col]].clamp(0.0, 1.0) * 255.0) as u8,
                    (image.blue.data[[row, col]].clamp(0.0, 1.0) * 255.0) as u8,
                ])
            };
            img.put_pixel(col as u32, row as u32, pixel);
        }
    }
    img
}

/// Save the green-highlight overlay as an 8-bit RGB PNG.
pub fn save_overlay_png(image: &CellImage, mask: &Array2<bool>, path: &Path) -> Result<()> {
    render_overlay(image, mask).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
