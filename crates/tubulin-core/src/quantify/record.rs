use ndarray::Array2;
use serde::Serialize;

/// Measurement produced by processing one image.
#[derive(Clone, Debug, Serialize)]
pub struct QuantificationRecord {
    /// Identifier of the source image (file stem).
    pub image_name: String,
    /// Counted pixels as a fraction of the whole image, in [0, 100].
    pub percentage: f64,
    /// Selected foreground cutoff in [0.0, 1.0].
    pub threshold_value: f32,
    /// Image width * height.
    pub total_pixels: usize,
    /// True pixels in the final mask.
    pub counted_pixels: usize,
}

/// Record plus the intermediate masks kept for diagnostic rendering.
///
/// Nothing here is retained across images; the pipeline is stateless.
#[derive(Clone, Debug)]
pub struct Quantification {
    pub record: QuantificationRecord,
    /// Nuclear pixels excluded from the count.
    pub nucleus_mask: Array2<bool>,
    /// Selected foreground mask before nucleus exclusion and cleanup.
    pub foreground_mask: Array2<bool>,
    /// The mask the count is taken from.
    pub final_mask: Array2<bool>,
}
