/// Width and height (pixels) every input is resized to before analysis.
pub const CANONICAL_SIZE: u32 = 400;

/// Inclusive hue band of the calyx, in 8-bit hue units (degrees / 2).
pub const DEFAULT_HUE_MIN: u8 = 0;
pub const DEFAULT_HUE_MAX: u8 = 40;

/// Default saturation floor for the lower bound of the color range.
pub const DEFAULT_SATURATION_FLOOR: u8 = 30;

/// Default brightness (value) floor for the lower bound of the color range.
pub const DEFAULT_BRIGHTNESS_FLOOR: u8 = 50;

/// Saturation and brightness ceiling of the color range.
pub const CHANNEL_MAX: u8 = 255;

/// Number of distinct 8-bit hue values (hue wraps at 180).
pub const HUE_RANGE: u16 = 180;

/// Side length of the square structuring element used for opening/closing.
pub const DEFAULT_KERNEL_SIZE: usize = 5;

/// Contours with enclosed area at or below this value are rejected as too small.
pub const DEFAULT_MIN_CONTOUR_AREA: f64 = 1000.0;

/// Convexity defects must be strictly deeper than this (fixed-point, x256).
pub const DEFAULT_MIN_DEFECT_DEPTH: u32 = 2000;

/// Fixed-point scale applied to defect depths.
pub const DEPTH_FIXED_POINT_SCALE: f64 = 256.0;

/// A calyx is expected to show at least this many lobes.
pub const DEFAULT_MIN_PLAUSIBLE_LOBES: usize = 4;

/// Color of the drawn contour outline (RGB).
pub const CONTOUR_COLOR: [u8; 3] = [0, 255, 0];

/// Thickness of the drawn contour outline, in pixels.
pub const CONTOUR_THICKNESS: i32 = 2;

/// Color of defect far-point markers (RGB).
pub const DEFECT_MARKER_COLOR: [u8; 3] = [255, 0, 0];

/// Radius of defect far-point markers, in pixels.
pub const DEFECT_MARKER_RADIUS: i32 = 5;

/// Pixel value of foreground in exported masks.
pub const MASK_FOREGROUND: u8 = 255;
