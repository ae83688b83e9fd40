/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Number of histogram bins for global thresholding (Otsu, triangle).
pub const HISTOGRAM_BINS: usize = 256;

/// Number of channels required of an input image (R, G, B).
pub const COLOR_CHANNEL_COUNT: u8 = 3;

/// Default Gaussian smoothing kernel size applied before thresholding.
/// Must be odd.
pub const DEFAULT_GAUSSIAN_BLUR_SIZE: usize = 5;

/// Default square structuring element size for morphological cleanup.
pub const DEFAULT_MORPHOLOGY_KERNEL_SIZE: usize = 3;
