use ndarray::Array2;

use tubulin_core::segment::morphology::{
    dilate, erode, morphological_closing, morphological_opening,
};

fn block_mask(h: usize, w: usize, top: usize, left: usize, size: usize) -> Array2<bool> {
    let mut mask = Array2::from_elem((h, w), false);
    for row in top..top + size {
        for col in left..left + size {
            mask[[row, col]] = true;
        }
    }
    mask
}

fn count(mask: &Array2<bool>) -> usize {
    mask.iter().filter(|&&v| v).count()
}

#[test]
fn erode_strips_block_boundary() {
    let mask = block_mask(10, 10, 2, 2, 4);
    let eroded = erode(&mask, 3);

    assert_eq!(count(&eroded), 4);
    for row in 3..5 {
        for col in 3..5 {
            assert!(eroded[[row, col]]);
        }
    }
}

#[test]
fn erode_removes_foreground_touching_the_edge() {
    let mask = Array2::from_elem((4, 4), true);
    let eroded = erode(&mask, 3);
    // Only pixels whose full neighborhood is in bounds survive.
    assert_eq!(count(&eroded), 4);
    assert!(eroded[[1, 1]] && eroded[[1, 2]] && eroded[[2, 1]] && eroded[[2, 2]]);
}

#[test]
fn dilate_grows_single_pixel_to_element() {
    let mut mask = Array2::from_elem((9, 9), false);
    mask[[4, 4]] = true;
    let dilated = dilate(&mask, 3);

    assert_eq!(count(&dilated), 9);
    for row in 3..6 {
        for col in 3..6 {
            assert!(dilated[[row, col]]);
        }
    }
}

#[test]
fn opening_removes_isolated_pixels_and_keeps_blocks() {
    let mut mask = block_mask(12, 12, 2, 2, 5);
    mask[[10, 10]] = true;

    let opened = morphological_opening(&mask, 3);

    assert!(!opened[[10, 10]]);
    assert_eq!(opened, block_mask(12, 12, 2, 2, 5));
}

#[test]
fn closing_fills_single_pixel_hole() {
    let mut mask = block_mask(10, 10, 2, 2, 5);
    mask[[4, 4]] = false;

    let closed = morphological_closing(&mask, 3);

    assert!(closed[[4, 4]]);
    assert_eq!(closed, block_mask(10, 10, 2, 2, 5));
}

#[test]
fn kernel_size_one_is_identity() {
    let mut mask = block_mask(8, 8, 1, 1, 3);
    mask[[6, 6]] = true;

    assert_eq!(erode(&mask, 1), mask);
    assert_eq!(dilate(&mask, 1), mask);
    assert_eq!(morphological_opening(&mask, 1), mask);
    assert_eq!(morphological_closing(&mask, 1), mask);
}

#[test]
fn opening_is_anti_extensive() {
    let mut mask = block_mask(12, 12, 3, 3, 4);
    mask[[0, 0]] = true;
    mask[[11, 5]] = true;

    let opened = morphological_opening(&mask, 3);
    for (after, before) in opened.iter().zip(mask.iter()) {
        assert!(!after || *before);
    }
}
