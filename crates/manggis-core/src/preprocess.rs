use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};
use ndarray::Array2;
use palette::{FromColor, Hsv, Srgb};

use crate::consts::HUE_RANGE;
use crate::error::{ManggisError, Result};
use crate::frame::HsvFrame;

/// Output of the preprocessing stage.
#[derive(Clone, Debug)]
pub struct Preprocessed {
    /// The input resized to the canonical resolution.
    pub rgb: RgbImage,
    /// `rgb` converted to HSV.
    pub hsv: HsvFrame,
}

/// Resize `raw` to `size`x`size` and convert the copy to HSV.
///
/// The input is never modified. Fails with [`ManggisError::EmptyImage`] if
/// either dimension is zero.
pub fn preprocess(raw: &DynamicImage, size: u32) -> Result<Preprocessed> {
    let rgb = resize_canonical(raw, size)?;
    let hsv = rgb_to_hsv(&rgb);
    Ok(Preprocessed { rgb, hsv })
}

/// Convert to 8-bit RGB and resize with bilinear interpolation.
pub fn resize_canonical(raw: &DynamicImage, size: u32) -> Result<RgbImage> {
    let (width, height) = (raw.width(), raw.height());
    if width == 0 || height == 0 {
        return Err(ManggisError::EmptyImage { width, height });
    }

    let rgb = raw.to_rgb8();
    if width == size && height == size {
        return Ok(rgb);
    }
    Ok(imageops::resize(&rgb, size, size, FilterType::Triangle))
}

/// Convert an RGB image to HSV planes.
pub fn rgb_to_hsv(rgb: &RgbImage) -> HsvFrame {
    let (w, h) = rgb.dimensions();
    let shape = (h as usize, w as usize);
    let mut hue = Array2::<u8>::zeros(shape);
    let mut saturation = Array2::<u8>::zeros(shape);
    let mut value = Array2::<u8>::zeros(shape);

    for (col, row, px) in rgb.enumerate_pixels() {
        let [hh, ss, vv] = hsv_pixel(px.0);
        let idx = [row as usize, col as usize];
        hue[idx] = hh;
        saturation[idx] = ss;
        value[idx] = vv;
    }

    HsvFrame {
        hue,
        saturation,
        value,
    }
}

/// Convert one RGB pixel to 8-bit HSV.
///
/// Hue is halved so a full turn fits in a byte; achromatic pixels get hue 0.
pub fn hsv_pixel(rgb: [u8; 3]) -> [u8; 3] {
    let srgb: Srgb<f32> = Srgb::new(rgb[0], rgb[1], rgb[2]).into_format();
    let hsv: Hsv = Hsv::from_color(srgb);

    let degrees = hsv.hue.into_positive_degrees();
    let mut hue = (degrees / 2.0).round() as u16;
    if hue >= HUE_RANGE {
        hue -= HUE_RANGE;
    }
    let saturation = (hsv.saturation * 255.0).round().clamp(0.0, 255.0) as u8;
    let value = (hsv.value * 255.0).round().clamp(0.0, 255.0) as u8;

    [hue as u8, saturation, value]
}
