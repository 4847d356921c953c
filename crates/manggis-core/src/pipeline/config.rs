use serde::{Deserialize, Serialize};

use crate::consts::CANONICAL_SIZE;
use crate::contour::ContourConfig;
use crate::error::{ManggisError, Result};
use crate::lobes::LobeConfig;
use crate::segment::{SegmentConfig, ThresholdParams};

/// Everything one analysis run needs besides the image itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Side length of the square canonical resolution.
    #[serde(default = "default_canonical_size")]
    pub canonical_size: u32,
    /// Saturation and brightness floors.
    #[serde(default)]
    pub threshold: ThresholdParams,
    #[serde(default)]
    pub segment: SegmentConfig,
    #[serde(default)]
    pub contour: ContourConfig,
    #[serde(default)]
    pub lobes: LobeConfig,
}

fn default_canonical_size() -> u32 {
    CANONICAL_SIZE
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            canonical_size: CANONICAL_SIZE,
            threshold: ThresholdParams::default(),
            segment: SegmentConfig::default(),
            contour: ContourConfig::default(),
            lobes: LobeConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Default configuration with the given floors.
    pub fn with_threshold(threshold: ThresholdParams) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.canonical_size == 0 {
            return Err(ManggisError::InvalidConfig(
                "canonical_size must be at least 1".into(),
            ));
        }
        if !self.lobes.min_area.is_finite() {
            return Err(ManggisError::InvalidConfig(
                "lobes.min_area must be finite".into(),
            ));
        }
        self.segment.validate()
    }
}
