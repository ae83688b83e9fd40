use approx::assert_abs_diff_eq;
use ndarray::Array2;

use tubulin_core::segment::threshold::{
    apply_threshold, otsu_level, otsu_threshold, triangle_level, triangle_threshold,
};

#[test]
fn otsu_separates_bimodal_plane() {
    let mut data = Array2::from_elem((10, 10), 0.2_f32);
    for row in 0..5 {
        for col in 0..5 {
            data[[row, col]] = 0.8;
        }
    }

    let result = otsu_threshold(&data);
    assert!(result.value > 0.2 && result.value < 0.8);
    assert_eq!(result.mask.iter().filter(|&&v| v).count(), 25);
}

#[test]
fn otsu_level_is_pure_on_histogram() {
    let mut histogram = vec![0u64; 256];
    histogram[10] = 100;
    histogram[200] = 50;
    assert_abs_diff_eq!(otsu_level(&histogram), (10.0 + 0.5) / 256.0, epsilon = 1e-6);
}

#[test]
fn all_zero_plane_yields_empty_mask() {
    let data = Array2::from_elem((8, 8), 0.0_f32);
    let result = otsu_threshold(&data);
    assert!(result.mask.iter().all(|&v| !v));
}

#[test]
fn empty_histogram_levels_are_zero() {
    let histogram = vec![0u64; 256];
    assert_eq!(otsu_level(&histogram), 0.0);
    assert_eq!(triangle_level(&histogram), 0.0);
}

#[test]
fn single_occupied_bin_maps_to_its_center() {
    let mut histogram = vec![0u64; 256];
    histogram[42] = 17;
    assert_abs_diff_eq!(triangle_level(&histogram), (42.0 + 0.5) / 256.0, epsilon = 1e-6);
}

#[test]
fn triangle_level_picks_max_distance_from_peak_tail_line() {
    // Peak at bin 0, tail ending at bin 5: the gap below the line is widest
    // right next to the peak.
    let mut histogram = vec![0u64; 256];
    histogram[0] = 10;
    histogram[5] = 2;
    assert_abs_diff_eq!(triangle_level(&histogram), (1.0 + 0.5) / 256.0, epsilon = 1e-6);
}

#[test]
fn triangle_uses_left_tail_when_peak_sits_right() {
    let mut histogram = vec![0u64; 256];
    histogram[250] = 10;
    histogram[200] = 2;
    assert_abs_diff_eq!(
        triangle_level(&histogram),
        (249.0 + 0.5) / 256.0,
        epsilon = 1e-6
    );
}

#[test]
fn triangle_threshold_isolates_small_bright_fraction() {
    // 96 background pixels at 0.1, 4 bright pixels at 0.9: a skewed
    // distribution the triangle method is meant for.
    let mut data = Array2::from_elem((10, 10), 0.1_f32);
    data[[0, 0]] = 0.9;
    data[[0, 1]] = 0.9;
    data[[1, 0]] = 0.9;
    data[[1, 1]] = 0.9;

    let result = triangle_threshold(&data);
    assert!(result.value > 0.1 && result.value < 0.9);
    assert_eq!(result.mask.iter().filter(|&&v| v).count(), 4);
}

#[test]
fn apply_threshold_is_strictly_greater() {
    let data = Array2::from_elem((2, 2), 0.5_f32);
    let at_cutoff = apply_threshold(&data, 0.5);
    assert!(at_cutoff.iter().all(|&v| !v));
    let below_cutoff = apply_threshold(&data, 0.49);
    assert!(below_cutoff.iter().all(|&v| v));
}
