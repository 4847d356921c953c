use imageproc::point::Point;
use serde::Serialize;

use crate::consts::DEPTH_FIXED_POINT_SCALE;

/// One place where the contour dips inward from its convex hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Defect {
    /// Contour index of the hull vertex where the dip begins.
    pub start: usize,
    /// Contour index of the hull vertex where the dip ends.
    pub end: usize,
    /// Contour index of the point farthest from the hull edge.
    pub far: usize,
    /// Distance from the hull edge to `far`, in 1/256 pixel.
    pub depth: u32,
}

impl Defect {
    /// Depth in pixels.
    pub fn depth_px(&self) -> f64 {
        self.depth as f64 / DEPTH_FIXED_POINT_SCALE
    }
}

/// Convexity defects of a closed contour.
///
/// `hull` must be ascending contour indices of at least two vertices. Every
/// pair of neighbouring hull vertices (last wrapping to first) whose contour
/// run contains a point off the hull edge yields one defect. The first point
/// at maximum distance is the far point.
pub fn convexity_defects(points: &[Point<i32>], hull: &[usize]) -> Vec<Defect> {
    let n = points.len();
    let mut defects = Vec::new();
    if hull.len() < 2 {
        return defects;
    }

    for (k, &start) in hull.iter().enumerate() {
        let end = hull[(k + 1) % hull.len()];
        let a = points[start];
        let b = points[end];
        let (dx0, dy0) = ((b.x - a.x) as f64, (b.y - a.y) as f64);
        let len = dx0.hypot(dy0);
        let scale = if len == 0.0 { 0.0 } else { 1.0 / len };

        let mut deepest: Option<(usize, f64)> = None;
        let mut j = (start + 1) % n;
        while j != end {
            let (dx, dy) = ((points[j].x - a.x) as f64, (points[j].y - a.y) as f64);
            let dist = (dx0 * dy - dy0 * dx).abs() * scale;
            if dist > deepest.map_or(0.0, |(_, d)| d) {
                deepest = Some((j, dist));
            }
            j = (j + 1) % n;
        }

        if let Some((far, dist)) = deepest {
            defects.push(Defect {
                start,
                end,
                far,
                depth: (dist * DEPTH_FIXED_POINT_SCALE).round() as u32,
            });
        }
    }

    defects
}
