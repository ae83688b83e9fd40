use ndarray::{Array2, Zip};
use tracing::{debug, info, warn};

use crate::error::{Result, TubulinError};
use crate::filters::gaussian_blur::gaussian_blur_plane;
use crate::plane::{CellImage, ChannelPlane};
use crate::segment::morphology::{morphological_closing, morphological_opening};
use crate::segment::threshold::{otsu_threshold, triangle_threshold, ThresholdResult};

use super::config::{QuantifyConfig, ThresholdMethod};
use super::record::{Quantification, QuantificationRecord};

/// Both foreground threshold candidates computed for one plane.
#[derive(Clone, Debug)]
pub struct ThresholdCandidates {
    pub otsu: ThresholdResult,
    pub triangle: ThresholdResult,
}

impl ThresholdCandidates {
    /// The authoritative candidate for the configured method.
    pub fn select(&self, method: ThresholdMethod) -> &ThresholdResult {
        match method {
            ThresholdMethod::Otsu => &self.otsu,
            ThresholdMethod::Triangle => &self.triangle,
        }
    }
}

/// Quantify microtubule coverage in a single cell image.
///
/// Pipeline: channel planes -> {nucleus mask, foreground mask} ->
/// foreground AND NOT nucleus -> opening -> closing -> percentage.
/// Strictly linear, no retries; a failure aborts only this image.
pub fn quantify(
    image: &CellImage,
    image_name: &str,
    config: &QuantifyConfig,
) -> Result<Quantification> {
    config.validate()?;

    let (h, w) = image.green.data.dim();
    let total_pixels = h * w;
    if total_pixels == 0 {
        return Err(TubulinError::DivisionUndefined);
    }

    let nucleus = nucleus_mask(&image.blue, config);
    let candidates = foreground_candidates(&image.green, config);
    let selected = candidates.select(config.threshold_method);
    debug!(
        otsu = candidates.otsu.value,
        triangle = candidates.triangle.value,
        method = ?config.threshold_method,
        "Foreground threshold candidates"
    );

    let final_mask = combine_and_clean(&selected.mask, &nucleus, config.morphology_kernel_size);

    let counted_pixels = final_mask.iter().filter(|&&v| v).count();
    if counted_pixels == 0 {
        warn!(image = image_name, "Final mask is empty; reporting 0%");
    }
    let percentage = 100.0 * counted_pixels as f64 / total_pixels as f64;

    info!(
        image = image_name,
        percentage,
        threshold = selected.value,
        counted = counted_pixels,
        total = total_pixels,
        "Quantification complete"
    );

    Ok(Quantification {
        record: QuantificationRecord {
            image_name: image_name.to_string(),
            percentage,
            threshold_value: selected.value,
            total_pixels,
            counted_pixels,
        },
        nucleus_mask: nucleus,
        foreground_mask: selected.mask.clone(),
        final_mask,
    })
}

/// Derive the nucleus mask from the blue plane: smooth, Otsu, close.
///
/// A uniformly dark plane yields an empty mask; downstream exclusion is then
/// a no-op.
pub fn nucleus_mask(blue: &ChannelPlane, config: &QuantifyConfig) -> Array2<bool> {
    let blurred = gaussian_blur_plane(&blue.data, config.gaussian_blur_size);
    let thresholded = otsu_threshold(&blurred);
    morphological_closing(&thresholded.mask, config.morphology_kernel_size)
}

/// Compute both foreground candidates on the independently smoothed green
/// plane.
pub fn foreground_candidates(green: &ChannelPlane, config: &QuantifyConfig) -> ThresholdCandidates {
    let blurred = gaussian_blur_plane(&green.data, config.gaussian_blur_size);
    ThresholdCandidates {
        otsu: otsu_threshold(&blurred),
        triangle: triangle_threshold(&blurred),
    }
}

/// Exclude the nucleus, then clean: opening removes isolated speckle,
/// closing fills small holes. Exclusion runs before cleanup so cleanup
/// operates on plausible microtubule shapes, not the solid nuclear blob.
pub fn combine_and_clean(
    foreground: &Array2<bool>,
    nucleus: &Array2<bool>,
    kernel_size: usize,
) -> Array2<bool> {
    let combined = Zip::from(foreground)
        .and(nucleus)
        .map_collect(|&fg, &nu| fg && !nu);
    let opened = morphological_opening(&combined, kernel_size);
    morphological_closing(&opened, kernel_size)
}
