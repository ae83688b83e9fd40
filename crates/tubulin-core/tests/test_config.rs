use tubulin_core::consts::{DEFAULT_GAUSSIAN_BLUR_SIZE, DEFAULT_MORPHOLOGY_KERNEL_SIZE};
use tubulin_core::quantify::{QuantifyConfig, ThresholdMethod};

#[test]
fn empty_document_takes_defaults() {
    let config: QuantifyConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.gaussian_blur_size, DEFAULT_GAUSSIAN_BLUR_SIZE);
    assert_eq!(config.morphology_kernel_size, DEFAULT_MORPHOLOGY_KERNEL_SIZE);
    assert_eq!(config.threshold_method, ThresholdMethod::Otsu);
}

#[test]
fn threshold_method_deserializes_lowercase() {
    let config: QuantifyConfig =
        serde_json::from_str(r#"{"threshold_method": "triangle"}"#).unwrap();
    assert_eq!(config.threshold_method, ThresholdMethod::Triangle);
}

#[test]
fn config_round_trips_through_serde() {
    let config = QuantifyConfig {
        gaussian_blur_size: 7,
        morphology_kernel_size: 5,
        threshold_method: ThresholdMethod::Triangle,
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: QuantifyConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.gaussian_blur_size, 7);
    assert_eq!(back.morphology_kernel_size, 5);
    assert_eq!(back.threshold_method, ThresholdMethod::Triangle);
}

#[test]
fn validate_accepts_defaults_and_trivial_kernels() {
    assert!(QuantifyConfig::default().validate().is_ok());
    let trivial = QuantifyConfig {
        gaussian_blur_size: 1,
        morphology_kernel_size: 1,
        threshold_method: ThresholdMethod::Otsu,
    };
    assert!(trivial.validate().is_ok());
}

#[test]
fn validate_rejects_bad_kernel_sizes() {
    let even_blur = QuantifyConfig {
        gaussian_blur_size: 6,
        ..QuantifyConfig::default()
    };
    assert!(even_blur.validate().is_err());

    let zero_blur = QuantifyConfig {
        gaussian_blur_size: 0,
        ..QuantifyConfig::default()
    };
    assert!(zero_blur.validate().is_err());

    let zero_morphology = QuantifyConfig {
        morphology_kernel_size: 0,
        ..QuantifyConfig::default()
    };
    assert!(zero_morphology.validate().is_err());
}
