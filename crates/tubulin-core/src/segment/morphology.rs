use ndarray::Array2;

/// Morphological opening (erosion then dilation) with a square element.
///
/// Removes foreground specks smaller than the element while preserving
/// larger regions. Size 1 is the identity.
pub fn morphological_opening(mask: &Array2<bool>, kernel_size: usize) -> Array2<bool> {
    dilate(&erode(mask, kernel_size), kernel_size)
}

/// Morphological closing (dilation then erosion) with a square element.
///
/// Fills gaps and holes smaller than the element. Size 1 is the identity.
pub fn morphological_closing(mask: &Array2<bool>, kernel_size: usize) -> Array2<bool> {
    erode(&dilate(mask, kernel_size), kernel_size)
}

/// Binary erosion: a pixel stays true only if every pixel under the element
/// is true. Out-of-bounds counts as false, so foreground touching the image
/// edge erodes.
pub fn erode(mask: &Array2<bool>, kernel_size: usize) -> Array2<bool> {
    if kernel_size <= 1 {
        return mask.clone();
    }
    let (h, w) = mask.dim();
    let offsets = element_offsets(kernel_size);

    Array2::from_shape_fn((h, w), |(row, col)| {
        mask[[row, col]]
            && offsets.iter().all(|&dr| {
                offsets.iter().all(|&dc| {
                    let nr = row as isize + dr;
                    let nc = col as isize + dc;
                    nr >= 0
                        && nr < h as isize
                        && nc >= 0
                        && nc < w as isize
                        && mask[[nr as usize, nc as usize]]
                })
            })
    })
}

/// Binary dilation: a pixel becomes true if any pixel under the element is
/// true.
pub fn dilate(mask: &Array2<bool>, kernel_size: usize) -> Array2<bool> {
    if kernel_size <= 1 {
        return mask.clone();
    }
    let (h, w) = mask.dim();
    let offsets = element_offsets(kernel_size);

    Array2::from_shape_fn((h, w), |(row, col)| {
        offsets.iter().any(|&dr| {
            offsets.iter().any(|&dc| {
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                nr >= 0
                    && nr < h as isize
                    && nc >= 0
                    && nc < w as isize
                    && mask[[nr as usize, nc as usize]]
            })
        })
    })
}

/// 1D offsets of a k-wide element with the anchor at k/2.
fn element_offsets(kernel_size: usize) -> Vec<isize> {
    let anchor = (kernel_size / 2) as isize;
    (0..kernel_size).map(|i| i as isize - anchor).collect()
}
