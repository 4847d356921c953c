pub mod config;
pub mod mask;
pub mod morphology;
pub mod threshold;

pub use config::{ColorRange, SegmentConfig, ThresholdParams};
pub use mask::Mask;

use crate::error::Result;
use crate::frame::HsvFrame;

/// Threshold an HSV frame and clean the result.
///
/// Pipeline: in-range threshold -> opening -> closing, all with the same
/// square structuring element.
pub fn segment(hsv: &HsvFrame, config: &SegmentConfig, params: ThresholdParams) -> Result<Mask> {
    let range = config.color_range(params)?;
    let raw = threshold::in_range(hsv, &range);
    Ok(morphology::clean(&raw, config.kernel_size))
}
