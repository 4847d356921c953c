pub mod config;
pub mod defects;
pub mod hull;

pub use config::LobeConfig;
pub use defects::{convexity_defects, Defect};
pub use hull::{convex_hull_indices, ShapeError};

use serde::Serialize;
use tracing::{debug, warn};

use crate::contour::Contour;

/// How much the lobe count can be trusted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StatusKind {
    /// Enough lobes found; the count is the answer.
    Confident,
    /// Fewer lobes than a calyx should have; the thresholds likely need tuning.
    ImplausiblyLow,
    /// The largest region is too small to be a calyx.
    TooSmall,
    /// No foreground region at all.
    NoDetection,
    /// The contour has no usable convex hull.
    GeometryError,
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Confident => write!(f, "Confident"),
            Self::ImplausiblyLow => write!(f, "Implausibly Low"),
            Self::TooSmall => write!(f, "Too Small"),
            Self::NoDetection => write!(f, "No Detection"),
            Self::GeometryError => write!(f, "Geometry Error"),
        }
    }
}

/// Final lobe count with its classification.
///
/// `Display` renders the status line shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LobeEstimate {
    pub count: usize,
    pub status: StatusKind,
}

impl LobeEstimate {
    pub fn new(count: usize, status: StatusKind) -> Self {
        Self { count, status }
    }

    pub fn no_detection() -> Self {
        Self::new(0, StatusKind::NoDetection)
    }

    pub fn too_small() -> Self {
        Self::new(0, StatusKind::TooSmall)
    }

    pub fn geometry_error() -> Self {
        Self::new(0, StatusKind::GeometryError)
    }

    /// Classify a defect count against the plausibility floor.
    pub fn classify(count: usize, min_plausible: usize) -> Self {
        if count < min_plausible {
            Self::new(count, StatusKind::ImplausiblyLow)
        } else {
            Self::new(count, StatusKind::Confident)
        }
    }
}

impl std::fmt::Display for LobeEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            StatusKind::Confident => write!(f, "Jumlah Ruas: {}", self.count),
            StatusKind::ImplausiblyLow => {
                write!(f, "Terdeteksi: {} (Coba geser slider)", self.count)
            }
            StatusKind::TooSmall => write!(f, "Objek terlalu kecil"),
            StatusKind::NoDetection => write!(f, "Tidak ada kelopak terdeteksi"),
            StatusKind::GeometryError => write!(f, "Error kalkulasi bentuk"),
        }
    }
}

/// Lobe estimate plus the defects that were counted.
#[derive(Clone, Debug)]
pub struct LobeCount {
    pub estimate: LobeEstimate,
    /// Defects deeper than the configured minimum, in hull order.
    pub defects: Vec<Defect>,
}

/// Count the lobes of a calyx outline.
///
/// Each convexity defect deeper than `min_defect_depth` is taken as the notch
/// between two lobes. Small regions and degenerate outlines are classified
/// rather than reported as errors.
pub fn count_lobes(contour: &Contour, area: f64, config: &LobeConfig) -> LobeCount {
    if area <= config.min_area {
        debug!(area, min_area = config.min_area, "Contour too small");
        return LobeCount {
            estimate: LobeEstimate::too_small(),
            defects: Vec::new(),
        };
    }

    let hull = match convex_hull_indices(&contour.points) {
        Ok(hull) => hull,
        Err(e) => {
            warn!(error = %e, "Convex hull failed");
            return LobeCount {
                estimate: LobeEstimate::geometry_error(),
                defects: Vec::new(),
            };
        }
    };

    let all = convexity_defects(&contour.points, &hull);
    let defects: Vec<Defect> = all
        .iter()
        .copied()
        .filter(|d| d.depth > config.min_defect_depth)
        .collect();
    let deepest_px = all.iter().map(Defect::depth_px).fold(0.0, f64::max);
    debug!(
        hull_vertices = hull.len(),
        defects = all.len(),
        deep_defects = defects.len(),
        deepest_px,
        "Convexity defects computed"
    );

    LobeCount {
        estimate: LobeEstimate::classify(defects.len(), config.min_plausible_lobes),
        defects,
    }
}
