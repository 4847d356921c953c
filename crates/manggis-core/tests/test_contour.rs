mod common;

use image::{GrayImage, Luma};
use imageproc::point::Point;

use manggis_core::contour::{
    extract_largest, find_external_contours, polygon_area, select_largest, Contour, ContourConfig,
};
use manggis_core::segment::Mask;

use common::{polygon_mask, rect_polygon};

fn mask_of(polygons: &[Vec<Point<i32>>]) -> Mask {
    Mask::from_gray(&polygon_mask(200, 200, polygons))
}

// ---------------------------------------------------------------------------
// find_external_contours
// ---------------------------------------------------------------------------

#[test]
fn test_empty_mask_has_no_contours() {
    let mask = Mask::new(ndarray::Array2::from_elem((50, 50), false));
    assert!(find_external_contours(&mask, true).is_empty());
    assert!(extract_largest(&mask, &ContourConfig::default()).is_none());
}

#[test]
fn test_one_contour_per_region() {
    let mask = mask_of(&[
        rect_polygon(10, 10, 30, 30),
        rect_polygon(100, 10, 20, 20),
        rect_polygon(50, 120, 40, 10),
    ]);
    assert_eq!(find_external_contours(&mask, true).len(), 3);
}

#[test]
fn test_diagonal_touch_is_one_region() {
    let mut img = GrayImage::new(20, 20);
    for (x, y) in [(5, 5), (6, 6), (7, 7)] {
        img.put_pixel(x, y, Luma([255]));
    }
    let mask = Mask::from_gray(&img);
    assert_eq!(find_external_contours(&mask, false).len(), 1);
}

#[test]
fn test_holes_and_islands_are_not_external() {
    let mut img = polygon_mask(200, 200, &[rect_polygon(20, 20, 120, 120)]);
    // Punch a hole, then put an island back inside it.
    for y in 50..110 {
        for x in 50..110 {
            img.put_pixel(x, y, Luma([0]));
        }
    }
    for y in 70..90 {
        for x in 70..90 {
            img.put_pixel(x, y, Luma([255]));
        }
    }
    let contours = find_external_contours(&Mask::from_gray(&img), true);
    assert_eq!(contours.len(), 1);
    assert_eq!(contours[0].area(), 119.0 * 119.0);
}

#[test]
fn test_rectangle_area_and_simplification() {
    let mask = mask_of(&[rect_polygon(50, 50, 40, 30)]);

    let simple = find_external_contours(&mask, true);
    assert_eq!(simple.len(), 1);
    assert_eq!(simple[0].len(), 4);
    assert_eq!(simple[0].area(), 39.0 * 29.0);

    let full = find_external_contours(&mask, false);
    assert_eq!(full[0].len(), 2 * (39 + 29));
    assert_eq!(full[0].area(), 39.0 * 29.0);
}

#[test]
fn test_contour_points_lie_on_foreground() {
    let star = common::star_polygon(100.0, 100.0, 80.0, 35.0, 5);
    let mask = mask_of(&[star]);
    let contours = find_external_contours(&mask, false);
    for p in &contours[0].points {
        assert!(mask.get(p.y as usize, p.x as usize), "({}, {})", p.x, p.y);
    }
}

#[test]
fn test_region_flush_with_left_edge_is_external() {
    let mask = mask_of(&[rect_polygon(0, 100, 60, 40)]);
    let contours = find_external_contours(&mask, true);
    assert_eq!(contours.len(), 1);
    assert_eq!(contours[0].area(), 59.0 * 39.0);
    assert!(contours[0].points.iter().any(|p| p.x == 0));
}

#[test]
fn test_region_in_top_left_corner_is_external() {
    let mask = mask_of(&[rect_polygon(0, 0, 30, 20)]);
    let contours = find_external_contours(&mask, false);
    assert_eq!(contours.len(), 1);
    assert_eq!(contours[0].area(), 29.0 * 19.0);
    assert!(contours[0].points.contains(&Point::new(0, 0)));
}

#[test]
fn test_full_foreground_mask_traces_the_frame() {
    let mask = Mask::new(ndarray::Array2::from_elem((120, 80), true));
    let contours = find_external_contours(&mask, true);
    assert_eq!(contours.len(), 1);
    assert_eq!(contours[0].area(), 79.0 * 119.0);
    for p in &contours[0].points {
        assert!(p.x >= 0 && p.x < 80 && p.y >= 0 && p.y < 120);
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[test]
fn test_extract_largest_picks_max_area() {
    let mask = mask_of(&[
        rect_polygon(10, 10, 20, 20),
        rect_polygon(60, 60, 50, 50),
        rect_polygon(150, 150, 30, 30),
    ]);
    let largest = extract_largest(&mask, &ContourConfig::default()).unwrap();
    assert_eq!(largest.area, 49.0 * 49.0);
    assert!(largest.contour.points.iter().all(|p| p.x >= 60 && p.y >= 60));
}

#[test]
fn test_equal_areas_keep_first_in_scan_order() {
    // Same size; the upper square is reached first by a row-major scan.
    let mask = mask_of(&[
        rect_polygon(10, 100, 30, 30),
        rect_polygon(150, 10, 30, 30),
    ]);
    let largest = extract_largest(&mask, &ContourConfig::default()).unwrap();
    let min_y = largest.contour.points.iter().map(|p| p.y).min().unwrap();
    assert_eq!(min_y, 10);
}

#[test]
fn test_select_largest_tie_uses_first() {
    let a = Contour::new(rect_polygon(0, 0, 11, 11));
    let b = Contour::new(rect_polygon(50, 50, 11, 11));
    let largest = select_largest(vec![a.clone(), b]).unwrap();
    assert_eq!(largest.contour, a);
    assert_eq!(largest.area, 100.0);
}

#[test]
fn test_polygon_area_matches_contour_area() {
    let poly = rect_polygon(0, 0, 21, 11);
    assert_eq!(polygon_area(&poly), Contour::new(poly.clone()).area());
    assert_eq!(polygon_area(&poly), 200.0);
}
