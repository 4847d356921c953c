use std::path::Path;

use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};

use crate::error::Result;

/// Load an image file, guessing the format from its contents.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let bytes = std::fs::read(path)?;
    decode_image(&bytes)
}

/// Decode an in-memory encoded image.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}

/// Save a mask as 8-bit grayscale, format chosen from the extension (PNG by default).
pub fn save_mask(mask: &GrayImage, path: &Path) -> Result<()> {
    mask.save_with_format(path, format_for(path))?;
    Ok(())
}

/// Save an annotated image as 8-bit RGB, format chosen from the extension (PNG by default).
pub fn save_annotated(img: &RgbImage, path: &Path) -> Result<()> {
    img.save_with_format(path, format_for(path))?;
    Ok(())
}

fn format_for(path: &Path) -> ImageFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some("jpg" | "jpeg") => ImageFormat::Jpeg,
        Some("bmp") => ImageFormat::Bmp,
        Some("tiff" | "tif") => ImageFormat::Tiff,
        _ => ImageFormat::Png,
    }
}
