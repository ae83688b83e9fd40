pub mod config;
pub mod pipeline;
pub mod record;

pub use config::{QuantifyConfig, ThresholdMethod};
pub use pipeline::{foreground_candidates, nucleus_mask, quantify, ThresholdCandidates};
pub use record::{Quantification, QuantificationRecord};
