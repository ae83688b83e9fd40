pub mod morphology;
pub mod threshold;

pub use morphology::{morphological_closing, morphological_opening};
pub use threshold::{otsu_threshold, triangle_threshold, ThresholdResult};
