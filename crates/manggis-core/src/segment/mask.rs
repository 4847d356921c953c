use image::{GrayImage, Luma};
use ndarray::Array2;

use crate::consts::MASK_FOREGROUND;

/// Binary foreground mask, row-major, shape = (height, width).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    data: Array2<bool>,
}

impl Mask {
    pub fn new(data: Array2<bool>) -> Self {
        Self { data }
    }

    /// Any non-zero pixel of `img` becomes foreground.
    pub fn from_gray(img: &GrayImage) -> Self {
        let (w, h) = img.dimensions();
        let data = Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
            img.get_pixel(col as u32, row as u32).0[0] != 0
        });
        Self::new(data)
    }

    pub fn data(&self) -> &Array2<bool> {
        &self.data
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.data[[row, col]]
    }

    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.data.iter().any(|&v| v)
    }

    /// Export as an 8-bit image with foreground = 255, background = 0.
    pub fn to_gray(&self) -> GrayImage {
        let mut img = GrayImage::new(self.width() as u32, self.height() as u32);
        for ((row, col), &fg) in self.data.indexed_iter() {
            if fg {
                img.put_pixel(col as u32, row as u32, Luma([MASK_FOREGROUND]));
            }
        }
        img
    }
}
