use image::{GrayImage, RgbImage};

use crate::contour::Contour;
use crate::lobes::{Defect, LobeEstimate};

/// Pipeline processing stage, used in log output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Preprocessing,
    Segmenting,
    ExtractingContour,
    CountingLobes,
    Rendering,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Preprocessing => write!(f, "Preprocessing"),
            Self::Segmenting => write!(f, "Segmenting"),
            Self::ExtractingContour => write!(f, "Extracting contour"),
            Self::CountingLobes => write!(f, "Counting lobes"),
            Self::Rendering => write!(f, "Rendering"),
        }
    }
}

/// Everything one run produces.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// Cleaned binary mask, 0 or 255, at canonical resolution.
    pub mask: GrayImage,
    /// Resized input with the selected contour and counted defects drawn on it.
    pub annotated: RgbImage,
    pub estimate: LobeEstimate,
    /// Largest external contour, if any foreground was found.
    pub contour: Option<Contour>,
    /// Enclosed area of `contour` (0 when there is none).
    pub area: f64,
    /// Defects that were counted as lobe notches.
    pub defects: Vec<Defect>,
}
