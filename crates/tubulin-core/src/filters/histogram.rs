use ndarray::Array2;

use crate::consts::HISTOGRAM_BINS;

/// Build a 256-bin intensity histogram of a plane with values in [0.0, 1.0].
/// Out-of-range values are clamped into the first/last bin.
pub fn intensity_histogram(data: &Array2<f32>) -> Vec<u64> {
    let mut histogram = vec![0u64; HISTOGRAM_BINS];
    for &v in data.iter() {
        let bin = ((v.clamp(0.0, 1.0) * (HISTOGRAM_BINS - 1) as f32) as usize)
            .min(HISTOGRAM_BINS - 1);
        histogram[bin] += 1;
    }
    histogram
}
