use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_MIN_CONTOUR_AREA, DEFAULT_MIN_DEFECT_DEPTH, DEFAULT_MIN_PLAUSIBLE_LOBES,
};

/// Thresholds for turning a contour into a lobe count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LobeConfig {
    /// Contours with area at or below this are too small to analyse.
    #[serde(default = "default_min_area")]
    pub min_area: f64,
    /// Defects must be strictly deeper than this (1/256 pixel units).
    #[serde(default = "default_min_defect_depth")]
    pub min_defect_depth: u32,
    /// Counts below this are reported as implausibly low.
    #[serde(default = "default_min_plausible_lobes")]
    pub min_plausible_lobes: usize,
}

fn default_min_area() -> f64 {
    DEFAULT_MIN_CONTOUR_AREA
}
fn default_min_defect_depth() -> u32 {
    DEFAULT_MIN_DEFECT_DEPTH
}
fn default_min_plausible_lobes() -> usize {
    DEFAULT_MIN_PLAUSIBLE_LOBES
}

impl Default for LobeConfig {
    fn default() -> Self {
        Self {
            min_area: DEFAULT_MIN_CONTOUR_AREA,
            min_defect_depth: DEFAULT_MIN_DEFECT_DEPTH,
            min_plausible_lobes: DEFAULT_MIN_PLAUSIBLE_LOBES,
        }
    }
}
