use ndarray::Array2;

use crate::filters::histogram::intensity_histogram;

/// A scalar cutoff plus the binary mask it produces on the source plane.
#[derive(Clone, Debug)]
pub struct ThresholdResult {
    /// Cutoff in [0.0, 1.0].
    pub value: f32,
    /// Pixels strictly above the cutoff.
    pub mask: Array2<bool>,
}

/// Binarize a plane against a scalar cutoff.
pub fn apply_threshold(data: &Array2<f32>, value: f32) -> Array2<bool> {
    data.mapv(|v| v > value)
}

/// Otsu's method applied to a plane: histogram, level, mask.
pub fn otsu_threshold(data: &Array2<f32>) -> ThresholdResult {
    let histogram = intensity_histogram(data);
    let value = otsu_level(&histogram);
    ThresholdResult {
        value,
        mask: apply_threshold(data, value),
    }
}

/// Triangle method applied to a plane: histogram, level, mask.
pub fn triangle_threshold(data: &Array2<f32>) -> ThresholdResult {
    let histogram = intensity_histogram(data);
    let value = triangle_level(&histogram);
    ThresholdResult {
        value,
        mask: apply_threshold(data, value),
    }
}

/// Otsu's level: the histogram bin that maximizes between-class variance.
///
/// Returns the bin center normalized to [0.0, 1.0].
pub fn otsu_level(histogram: &[u64]) -> f32 {
    let bins = histogram.len();
    let total: f64 = histogram.iter().map(|&c| c as f64).sum();
    if total == 0.0 {
        return 0.0;
    }

    let sum_all: f64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut weight_bg = 0.0_f64;
    let mut sum_bg = 0.0_f64;
    let mut best_variance = 0.0_f64;
    let mut best_bin = 0usize;

    for (i, &count) in histogram.iter().enumerate() {
        weight_bg += count as f64;
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0.0 {
            break;
        }
        sum_bg += i as f64 * count as f64;
        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (sum_all - sum_bg) / weight_fg;
        let between_variance = weight_bg * weight_fg * (mean_bg - mean_fg).powi(2);

        if between_variance > best_variance {
            best_variance = between_variance;
            best_bin = i;
        }
    }

    (best_bin as f32 + 0.5) / bins as f32
}

/// Triangle level: the bin with the greatest perpendicular distance from the
/// line joining the histogram peak to the farthest non-empty tail bin.
///
/// Robust when the foreground is a small pixel fraction over a long unimodal
/// background tail. Returns the bin center normalized to [0.0, 1.0].
pub fn triangle_level(histogram: &[u64]) -> f32 {
    let bins = histogram.len();

    let (Some(first), Some(last)) = (
        histogram.iter().position(|&c| c > 0),
        histogram.iter().rposition(|&c| c > 0),
    ) else {
        return 0.0;
    };
    if first == last {
        return (first as f32 + 0.5) / bins as f32;
    }

    let peak = histogram
        .iter()
        .enumerate()
        .max_by_key(|&(_, &c)| c)
        .map(|(i, _)| i)
        .unwrap_or(first);

    // The tail is the non-empty extreme farther from the peak.
    let tail = if peak - first > last - peak { first } else { last };

    let (x0, y0) = (peak as f64, histogram[peak] as f64);
    let (x1, y1) = (tail as f64, histogram[tail] as f64);

    let (lo, hi) = if peak < tail { (peak, tail) } else { (tail, peak) };
    let mut best_dist = -1.0_f64;
    let mut best_bin = lo;
    for i in lo..=hi {
        let dist =
            ((y1 - y0) * i as f64 - (x1 - x0) * histogram[i] as f64 + x1 * y0 - y1 * x0).abs();
        if dist > best_dist {
            best_dist = dist;
            best_bin = i;
        }
    }

    (best_bin as f32 + 0.5) / bins as f32
}
