use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

use crate::consts::{CONTOUR_COLOR, CONTOUR_THICKNESS, DEFECT_MARKER_COLOR, DEFECT_MARKER_RADIUS};
use crate::contour::Contour;
use crate::lobes::Defect;

/// Trace `contour` as a closed green outline.
///
/// Thickness comes from stamping the one-pixel line at each offset of a
/// `CONTOUR_THICKNESS`-sided square.
pub fn draw_contour(canvas: &mut RgbImage, contour: &Contour) {
    let color = Rgb(CONTOUR_COLOR);
    let points = &contour.points;
    for (a, b) in points.iter().zip(points.iter().cycle().skip(1)) {
        for oy in 0..CONTOUR_THICKNESS {
            for ox in 0..CONTOUR_THICKNESS {
                draw_line_segment_mut(
                    canvas,
                    ((a.x + ox) as f32, (a.y + oy) as f32),
                    ((b.x + ox) as f32, (b.y + oy) as f32),
                    color,
                );
            }
        }
    }
}

/// Mark the far point of each defect with a filled red disc.
pub fn draw_defects(canvas: &mut RgbImage, contour: &Contour, defects: &[Defect]) {
    let color = Rgb(DEFECT_MARKER_COLOR);
    for defect in defects {
        let far = contour.points[defect.far];
        draw_filled_circle_mut(canvas, (far.x, far.y), DEFECT_MARKER_RADIUS, color);
    }
}
