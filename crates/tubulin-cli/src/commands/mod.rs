pub mod analyze;
pub mod batch;
pub mod dose;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use tubulin_core::quantify::{QuantifyConfig, ThresholdMethod};

#[derive(Clone, Copy, ValueEnum)]
pub enum MethodArg {
    Otsu,
    Triangle,
}

impl From<MethodArg> for ThresholdMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Otsu => ThresholdMethod::Otsu,
            MethodArg::Triangle => ThresholdMethod::Triangle,
        }
    }
}

/// Quantification settings shared by `analyze` and `batch`.
#[derive(Args)]
pub struct QuantifyOpts {
    /// TOML file with quantification settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Gaussian blur kernel size (odd; 1 disables)
    #[arg(long)]
    pub blur_size: Option<usize>,

    /// Morphology structuring element size (1 disables)
    #[arg(long)]
    pub morphology_size: Option<usize>,

    /// Foreground threshold method
    #[arg(long, value_enum)]
    pub method: Option<MethodArg>,
}

impl QuantifyOpts {
    /// File settings first, then flag overrides, then validation.
    pub fn resolve(&self) -> Result<QuantifyConfig> {
        let mut config = match &self.config {
            Some(path) => toml::from_str(&std::fs::read_to_string(path)?)?,
            None => QuantifyConfig::default(),
        };
        if let Some(size) = self.blur_size {
            config.gaussian_blur_size = size;
        }
        if let Some(size) = self.morphology_size {
            config.morphology_kernel_size = size;
        }
        if let Some(method) = self.method {
            config.threshold_method = method.into();
        }
        config.validate()?;
        Ok(config)
    }
}
