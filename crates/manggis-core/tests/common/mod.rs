#![allow(dead_code)]

use std::f64::consts::PI;
use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point;

/// Calyx brown: hue 15 (30 degrees), saturation 204, value 200.
pub const CALYX: [u8; 3] = [200, 120, 40];

/// Mangosteen rind purple: hue well outside the calyx band.
pub const RIND: [u8; 3] = [80, 20, 90];

/// Vertices of a star with `tips` points, first tip straight up.
pub fn star_polygon(cx: f64, cy: f64, outer: f64, inner: f64, tips: usize) -> Vec<Point<i32>> {
    (0..tips * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = -PI / 2.0 + i as f64 * PI / tips as f64;
            Point::new(
                (cx + radius * angle.cos()).round() as i32,
                (cy + radius * angle.sin()).round() as i32,
            )
        })
        .collect()
}

/// Axis-aligned rectangle as a polygon, `w` x `h` pixels when filled.
pub fn rect_polygon(left: i32, top: i32, w: i32, h: i32) -> Vec<Point<i32>> {
    vec![
        Point::new(left, top),
        Point::new(left + w - 1, top),
        Point::new(left + w - 1, top + h - 1),
        Point::new(left, top + h - 1),
    ]
}

/// A `size`x`size` rind-colored photo with each polygon painted in calyx brown.
pub fn calyx_image(size: u32, polygons: &[Vec<Point<i32>>]) -> RgbImage {
    let mut img = RgbImage::from_pixel(size, size, Rgb(RIND));
    for poly in polygons {
        draw_polygon_mut(&mut img, poly, Rgb(CALYX));
    }
    img
}

/// The canonical 400x400 six-pointed star scene.
pub fn star_scene() -> DynamicImage {
    let star = star_polygon(200.0, 200.0, 150.0, 70.0, 6);
    DynamicImage::ImageRgb8(calyx_image(400, &[star]))
}

/// A binary mask (0 / 255) with each polygon filled.
pub fn polygon_mask(width: u32, height: u32, polygons: &[Vec<Point<i32>>]) -> GrayImage {
    let mut img = GrayImage::new(width, height);
    for poly in polygons {
        draw_polygon_mut(&mut img, poly, Luma([255]));
    }
    img
}

/// Deterministic pseudo-random bytes (64-bit LCG).
pub fn noise_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (state >> 56) as u8
        })
        .collect()
}

/// Encode an image as PNG bytes.
pub fn encode_png(img: &DynamicImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .expect("encode PNG");
    buf.into_inner()
}
