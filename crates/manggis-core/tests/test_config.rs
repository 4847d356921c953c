use manggis_core::contour::ContourConfig;
use manggis_core::lobes::LobeConfig;
use manggis_core::pipeline::{AnalysisConfig, PipelineStage};
use manggis_core::segment::{SegmentConfig, ThresholdParams};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_default_analysis_config() {
    let config = AnalysisConfig::default();
    assert_eq!(config.canonical_size, 400);
    assert_eq!(config.threshold, ThresholdParams::new(30, 50));
    assert_eq!(config.segment.hue_min, 0);
    assert_eq!(config.segment.hue_max, 40);
    assert_eq!(config.segment.kernel_size, 5);
    assert!(config.contour.simplify);
    assert_eq!(config.lobes.min_area, 1000.0);
    assert_eq!(config.lobes.min_defect_depth, 2000);
    assert_eq!(config.lobes.min_plausible_lobes, 4);
    assert!(config.validate().is_ok());
}

#[test]
fn test_with_threshold_keeps_other_defaults() {
    let config = AnalysisConfig::with_threshold(ThresholdParams::new(10, 200));
    assert_eq!(config.threshold.saturation_floor, 10);
    assert_eq!(config.threshold.brightness_floor, 200);
    assert_eq!(config.segment, SegmentConfig::default());
    assert_eq!(config.lobes, LobeConfig::default());
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn test_config_json_roundtrip() {
    let mut config = AnalysisConfig::default();
    config.threshold = ThresholdParams::new(12, 34);
    config.contour = ContourConfig { simplify: false };
    let json = serde_json::to_string(&config).unwrap();
    let back: AnalysisConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_partial_config_fills_defaults() {
    let json = r#"{ "threshold": { "saturation_floor": 80, "brightness_floor": 90 } }"#;
    let config: AnalysisConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.threshold, ThresholdParams::new(80, 90));
    assert_eq!(config.canonical_size, 400);
    assert_eq!(config.segment, SegmentConfig::default());
    assert_eq!(config.lobes, LobeConfig::default());
}

#[test]
fn test_partial_section_fills_defaults() {
    let json = r#"{ "lobes": { "min_defect_depth": 1500 } }"#;
    let config: AnalysisConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.lobes.min_defect_depth, 1500);
    assert_eq!(config.lobes.min_area, 1000.0);
    assert_eq!(config.lobes.min_plausible_lobes, 4);
}

#[test]
fn test_out_of_range_floor_is_rejected() {
    let json = r#"{ "threshold": { "saturation_floor": 300, "brightness_floor": 0 } }"#;
    assert!(serde_json::from_str::<AnalysisConfig>(json).is_err());
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_validate_rejects_zero_canonical_size() {
    let config = AnalysisConfig {
        canonical_size: 0,
        ..AnalysisConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_inverted_hue() {
    let mut config = AnalysisConfig::default();
    config.segment.hue_min = 90;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_nan_area() {
    let mut config = AnalysisConfig::default();
    config.lobes.min_area = f64::NAN;
    assert!(config.validate().is_err());
}

// ---------------------------------------------------------------------------
// PipelineStage Display
// ---------------------------------------------------------------------------

#[test]
fn test_pipeline_stage_display() {
    assert_eq!(format!("{}", PipelineStage::Preprocessing), "Preprocessing");
    assert_eq!(
        format!("{}", PipelineStage::ExtractingContour),
        "Extracting contour"
    );
    assert_eq!(
        format!("{}", PipelineStage::CountingLobes),
        "Counting lobes"
    );
}
