use image::{GrayImage, Luma};
use imageproc::contours::{find_contours, BorderType};
use imageproc::point::Point;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::MASK_FOREGROUND;
use crate::segment::Mask;

/// Configuration for boundary extraction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContourConfig {
    /// Drop intermediate points along straight horizontal, vertical and diagonal runs.
    #[serde(default = "default_simplify")]
    pub simplify: bool,
}

fn default_simplify() -> bool {
    true
}

impl Default for ContourConfig {
    fn default() -> Self {
        Self { simplify: true }
    }
}

/// A closed boundary traced around one foreground region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contour {
    pub points: Vec<Point<i32>>,
}

impl Contour {
    pub fn new(points: Vec<Point<i32>>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Enclosed area by the shoelace formula.
    pub fn area(&self) -> f64 {
        polygon_area(&self.points)
    }
}

/// The contour kept for lobe counting, with its area.
#[derive(Clone, Debug)]
pub struct LargestContour {
    pub contour: Contour,
    pub area: f64,
}

/// Outermost boundaries of the 8-connected foreground regions of `mask`.
///
/// Hole borders and regions nested inside holes are skipped. Contours are
/// returned in raster order of their first pixel. Regions touching the image
/// edge are traced along the edge pixels.
pub fn find_external_contours(mask: &Mask, simplify: bool) -> Vec<Contour> {
    let contours = find_contours::<i32>(&padded_gray(mask));
    contours
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .map(|c| {
            let points: Vec<Point<i32>> = c
                .points
                .into_iter()
                .map(|p| Point::new(p.x - 1, p.y - 1))
                .collect();
            let points = if simplify {
                compress_straight_runs(&points)
            } else {
                points
            };
            Contour::new(points)
        })
        .collect()
}

/// The mask as an 8-bit image inside a one-pixel background frame.
///
/// Border following needs background on every side of a region; points
/// traced on this image are offset by (1, 1).
fn padded_gray(mask: &Mask) -> GrayImage {
    let mut img = GrayImage::new(mask.width() as u32 + 2, mask.height() as u32 + 2);
    for ((row, col), &fg) in mask.data().indexed_iter() {
        if fg {
            img.put_pixel(col as u32 + 1, row as u32 + 1, Luma([MASK_FOREGROUND]));
        }
    }
    img
}

/// Find the largest external contour of `mask`.
///
/// Returns `None` when the mask has no foreground.
pub fn extract_largest(mask: &Mask, config: &ContourConfig) -> Option<LargestContour> {
    let contours = find_external_contours(mask, config.simplify);
    debug!(count = contours.len(), "External contours found");
    select_largest(contours)
}

/// Pick the contour with the greatest area. Ties keep the earliest contour.
pub fn select_largest(contours: Vec<Contour>) -> Option<LargestContour> {
    let mut best: Option<LargestContour> = None;
    for contour in contours {
        let area = contour.area();
        if best.as_ref().is_none_or(|b| area > b.area) {
            best = Some(LargestContour { contour, area });
        }
    }
    best
}

/// Absolute polygon area of a closed point sequence.
pub fn polygon_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let twice: i64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64)
        .sum();
    (twice as f64 / 2.0).abs()
}

/// Keep only the points where the step direction changes.
fn compress_straight_runs(points: &[Point<i32>]) -> Vec<Point<i32>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let step = |a: Point<i32>, b: Point<i32>| ((b.x - a.x).signum(), (b.y - a.y).signum());

    let kept: Vec<Point<i32>> = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            step(prev, points[i]) != step(points[i], next)
        })
        .map(|i| points[i])
        .collect();

    if kept.is_empty() {
        points.to_vec()
    } else {
        kept
    }
}
