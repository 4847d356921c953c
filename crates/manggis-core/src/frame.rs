use ndarray::Array2;

/// An image in hue/saturation/value space, one plane per channel.
///
/// Uses the 8-bit convention: hue in `[0, 180)` (degrees halved),
/// saturation and value in `[0, 255]`. Planes are row-major, shape = (height, width).
#[derive(Clone, Debug)]
pub struct HsvFrame {
    pub hue: Array2<u8>,
    pub saturation: Array2<u8>,
    pub value: Array2<u8>,
}

impl HsvFrame {
    pub fn width(&self) -> usize {
        self.hue.ncols()
    }

    pub fn height(&self) -> usize {
        self.hue.nrows()
    }

    /// The (hue, saturation, value) triple at `(row, col)`.
    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        [
            self.hue[[row, col]],
            self.saturation[[row, col]],
            self.value[[row, col]],
        ]
    }
}
