use imageproc::point::Point;
use thiserror::Error;

/// Why a contour has no usable convex hull.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("contour has only {0} point(s)")]
    TooFewPoints(usize),

    #[error("convex hull has only {0} vertex(es); points are collinear")]
    DegenerateHull(usize),
}

/// Convex hull of `points` as indices into `points`, sorted ascending.
///
/// Ascending order walks the hull in the same direction as the contour, so
/// consecutive hull indices bracket the contour run between them. Collinear
/// and repeated points are not hull vertices.
pub fn convex_hull_indices(points: &[Point<i32>]) -> Result<Vec<usize>, ShapeError> {
    let n = points.len();
    if n < 3 {
        return Err(ShapeError::TooFewPoints(n));
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_unstable_by_key(|&i| (points[i].x, points[i].y, i));

    // Andrew's monotone chain: lower chain, then upper chain.
    let mut hull: Vec<usize> = Vec::with_capacity(2 * n);
    for &i in &order {
        push_turning(&mut hull, points, i, 2);
    }
    let upper_floor = hull.len() + 1;
    for &i in order.iter().rev().skip(1) {
        push_turning(&mut hull, points, i, upper_floor);
    }
    // The last vertex repeats the first.
    hull.pop();

    if hull.len() < 3 {
        return Err(ShapeError::DegenerateHull(hull.len()));
    }

    hull.sort_unstable();
    Ok(hull)
}

/// Push `i`, first popping vertices that would not make a strict left turn.
/// Pops only while at least `floor` entries remain.
fn push_turning(hull: &mut Vec<usize>, points: &[Point<i32>], i: usize, floor: usize) {
    while hull.len() >= floor {
        let a = points[hull[hull.len() - 2]];
        let b = points[hull[hull.len() - 1]];
        if cross(a, b, points[i]) > 0 {
            break;
        }
        hull.pop();
    }
    hull.push(i);
}

/// Z component of (b - a) x (c - a).
fn cross(a: Point<i32>, b: Point<i32>, c: Point<i32>) -> i64 {
    let (abx, aby) = ((b.x - a.x) as i64, (b.y - a.y) as i64);
    let (acx, acy) = ((c.x - a.x) as i64, (c.y - a.y) as i64);
    abx * acy - aby * acx
}
