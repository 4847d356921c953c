use ndarray::Array2;

use super::mask::Mask;

/// Opening followed by closing with a `size`x`size` square element.
///
/// Erases foreground specks smaller than the element, then fills background
/// holes smaller than the element.
pub fn clean(mask: &Mask, size: usize) -> Mask {
    let opened = morphological_opening(mask, size);
    morphological_closing(&opened, size)
}

/// Morphological opening (erosion followed by dilation) with a square element.
///
/// Removes small isolated foreground pixels while preserving larger regions.
pub fn morphological_opening(mask: &Mask, size: usize) -> Mask {
    let eroded = erode(mask, size);
    dilate(&eroded, size)
}

/// Morphological closing (dilation followed by erosion) with a square element.
///
/// Fills small background holes enclosed by foreground.
pub fn morphological_closing(mask: &Mask, size: usize) -> Mask {
    let dilated = dilate(mask, size);
    erode(&dilated, size)
}

/// Binary erosion: a pixel stays set only if every in-image pixel under the element is set.
pub fn erode(mask: &Mask, size: usize) -> Mask {
    let (lo, hi) = window(size);
    let rows = sweep(mask.data(), Direction::AlongRow, lo, hi, true);
    Mask::new(sweep(&rows, Direction::AlongColumn, lo, hi, true))
}

/// Binary dilation: a pixel becomes set if any in-image pixel under the reflected element is set.
pub fn dilate(mask: &Mask, size: usize) -> Mask {
    let (lo, hi) = window(size);
    let rows = sweep(mask.data(), Direction::AlongRow, -hi, -lo, false);
    Mask::new(sweep(&rows, Direction::AlongColumn, -hi, -lo, false))
}

#[derive(Clone, Copy)]
enum Direction {
    AlongRow,
    AlongColumn,
}

/// Element offsets relative to its anchor, which sits at `size / 2`.
fn window(size: usize) -> (isize, isize) {
    let size = size.max(1) as isize;
    let lo = -(size / 2);
    (lo, lo + size - 1)
}

/// One-dimensional min (`all`) or max (`any`) filter over offsets `lo..=hi`.
/// Out-of-image positions are skipped.
fn sweep(src: &Array2<bool>, dir: Direction, lo: isize, hi: isize, all: bool) -> Array2<bool> {
    let (h, w) = src.dim();
    Array2::from_shape_fn((h, w), |(row, col)| {
        let (pos, len) = match dir {
            Direction::AlongRow => (col as isize, w as isize),
            Direction::AlongColumn => (row as isize, h as isize),
        };
        let start = (pos + lo).max(0);
        let end = (pos + hi).min(len - 1);
        let mut values = (start..=end).map(|i| match dir {
            Direction::AlongRow => src[[row, i as usize]],
            Direction::AlongColumn => src[[i as usize, col]],
        });
        if all {
            values.all(|v| v)
        } else {
            values.any(|v| v)
        }
    })
}
