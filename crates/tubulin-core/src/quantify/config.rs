use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_GAUSSIAN_BLUR_SIZE, DEFAULT_MORPHOLOGY_KERNEL_SIZE};
use crate::error::{Result, TubulinError};

/// Global automatic threshold method for the microtubule foreground.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdMethod {
    /// Otsu's method: maximizes between-class variance on the histogram.
    #[default]
    Otsu,
    /// Triangle method, for strongly skewed single-peak histograms.
    /// Operator-selected; never an automatic fallback.
    Triangle,
}

/// Configuration for quantifying a single cell image.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuantifyConfig {
    /// Gaussian smoothing kernel size applied before both thresholding
    /// steps. Odd; 1 disables smoothing.
    #[serde(default = "default_gaussian_blur_size")]
    pub gaussian_blur_size: usize,
    /// Square structuring element size for closing/opening. 1 disables
    /// cleanup.
    #[serde(default = "default_morphology_kernel_size")]
    pub morphology_kernel_size: usize,
    /// Which foreground threshold candidate is authoritative.
    #[serde(default)]
    pub threshold_method: ThresholdMethod,
}

fn default_gaussian_blur_size() -> usize {
    DEFAULT_GAUSSIAN_BLUR_SIZE
}
fn default_morphology_kernel_size() -> usize {
    DEFAULT_MORPHOLOGY_KERNEL_SIZE
}

impl Default for QuantifyConfig {
    fn default() -> Self {
        Self {
            gaussian_blur_size: DEFAULT_GAUSSIAN_BLUR_SIZE,
            morphology_kernel_size: DEFAULT_MORPHOLOGY_KERNEL_SIZE,
            threshold_method: ThresholdMethod::default(),
        }
    }
}

impl QuantifyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.gaussian_blur_size == 0 || self.gaussian_blur_size % 2 == 0 {
            return Err(TubulinError::InvalidConfig(format!(
                "gaussian_blur_size must be an odd positive integer, got {}",
                self.gaussian_blur_size
            )));
        }
        if self.morphology_kernel_size == 0 {
            return Err(TubulinError::InvalidConfig(
                "morphology_kernel_size must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}
