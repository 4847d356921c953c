use serde::{Deserialize, Serialize};

use crate::consts::{
    CHANNEL_MAX, DEFAULT_BRIGHTNESS_FLOOR, DEFAULT_HUE_MAX, DEFAULT_HUE_MIN, DEFAULT_KERNEL_SIZE,
    DEFAULT_SATURATION_FLOOR,
};
use crate::error::{ManggisError, Result};

/// The two user-tunable thresholds.
///
/// They become the saturation and value components of the lower color bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdParams {
    pub saturation_floor: u8,
    pub brightness_floor: u8,
}

impl ThresholdParams {
    pub fn new(saturation_floor: u8, brightness_floor: u8) -> Self {
        Self {
            saturation_floor,
            brightness_floor,
        }
    }
}

impl Default for ThresholdParams {
    fn default() -> Self {
        Self::new(DEFAULT_SATURATION_FLOOR, DEFAULT_BRIGHTNESS_FLOOR)
    }
}

/// Inclusive (hue, saturation, value) bounds. `lower[i] <= upper[i]` on every axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorRange {
    lower: [u8; 3],
    upper: [u8; 3],
}

impl ColorRange {
    pub fn new(lower: [u8; 3], upper: [u8; 3]) -> Result<Self> {
        if let Some(axis) = (0..3).find(|&i| lower[i] > upper[i]) {
            return Err(ManggisError::InvalidConfig(format!(
                "color range axis {axis}: lower {} exceeds upper {}",
                lower[axis], upper[axis]
            )));
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> [u8; 3] {
        self.lower
    }

    pub fn upper(&self) -> [u8; 3] {
        self.upper
    }

    pub fn contains(&self, px: [u8; 3]) -> bool {
        (0..3).all(|i| px[i] >= self.lower[i] && px[i] <= self.upper[i])
    }
}

/// Configuration for the segmentation stage.
///
/// Only the hue band and the element size live here; the saturation and
/// brightness floors arrive per run as [`ThresholdParams`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentConfig {
    /// Lowest accepted hue (8-bit units, degrees / 2).
    #[serde(default = "default_hue_min")]
    pub hue_min: u8,
    /// Highest accepted hue (8-bit units, degrees / 2).
    #[serde(default = "default_hue_max")]
    pub hue_max: u8,
    /// Side length of the square structuring element.
    #[serde(default = "default_kernel_size")]
    pub kernel_size: usize,
}

fn default_hue_min() -> u8 {
    DEFAULT_HUE_MIN
}
fn default_hue_max() -> u8 {
    DEFAULT_HUE_MAX
}
fn default_kernel_size() -> usize {
    DEFAULT_KERNEL_SIZE
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            hue_min: DEFAULT_HUE_MIN,
            hue_max: DEFAULT_HUE_MAX,
            kernel_size: DEFAULT_KERNEL_SIZE,
        }
    }
}

impl SegmentConfig {
    /// Build the full color range for one run.
    pub fn color_range(&self, params: ThresholdParams) -> Result<ColorRange> {
        ColorRange::new(
            [
                self.hue_min,
                params.saturation_floor,
                params.brightness_floor,
            ],
            [self.hue_max, CHANNEL_MAX, CHANNEL_MAX],
        )
    }

    pub fn validate(&self) -> Result<()> {
        if self.hue_min > self.hue_max {
            return Err(ManggisError::InvalidConfig(format!(
                "hue_min {} exceeds hue_max {}",
                self.hue_min, self.hue_max
            )));
        }
        if self.kernel_size == 0 {
            return Err(ManggisError::InvalidConfig(
                "kernel_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
