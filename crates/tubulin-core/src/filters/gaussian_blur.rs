use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Apply Gaussian smoothing with an odd kernel size using separable 1D
/// convolution. Size 1 is the identity.
///
/// Sigma is derived from the kernel size: `0.3 * ((size - 1) * 0.5 - 1) + 0.8`.
pub fn gaussian_blur_plane(data: &Array2<f32>, kernel_size: usize) -> Array2<f32> {
    if kernel_size <= 1 {
        return data.clone();
    }
    let kernel = gaussian_kernel(kernel_size);
    let horizontal = convolve_rows(data, &kernel);
    let transposed = horizontal.reversed_axes();
    convolve_rows(&transposed, &kernel).reversed_axes()
}

fn gaussian_kernel(size: usize) -> Vec<f32> {
    let sigma = 0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8;
    let center = (size - 1) as f32 / 2.0;
    let s2 = 2.0 * sigma * sigma;

    let mut kernel: Vec<f32> = (0..size)
        .map(|i| {
            let x = i as f32 - center;
            (-x * x / s2).exp()
        })
        .collect();

    let sum: f32 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

/// Convolve each row with the kernel, clamping samples at the edges.
fn convolve_rows(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = (kernel.len() / 2) as isize;

    let convolve_row = |row: usize| -> Vec<f32> {
        (0..w)
            .map(|col| {
                kernel
                    .iter()
                    .enumerate()
                    .map(|(k, &kv)| {
                        let src = (col as isize + k as isize - radius).clamp(0, w as isize - 1);
                        data[[row, src as usize]] * kv
                    })
                    .sum()
            })
            .collect()
    };

    let rows: Vec<Vec<f32>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h).into_par_iter().map(convolve_row).collect()
    } else {
        (0..h).map(convolve_row).collect()
    };

    let flat: Vec<f32> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((h, w), flat).expect("row-major dimensions")
}
