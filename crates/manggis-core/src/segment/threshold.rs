use ndarray::Array2;

use crate::frame::HsvFrame;

use super::config::ColorRange;
use super::mask::Mask;

/// Mark every pixel whose (hue, saturation, value) lies inside `range`, bounds inclusive.
pub fn in_range(hsv: &HsvFrame, range: &ColorRange) -> Mask {
    let data = Array2::from_shape_fn((hsv.height(), hsv.width()), |(row, col)| {
        range.contains(hsv.pixel(row, col))
    });
    Mask::new(data)
}
