use image::GrayImage;

use crate::config::ReconstructionConfig;
use crate::geometry::{CircleFit, LineSegment, Primitive};
use crate::operations::detection::{BuildPrimitiveList, CircleCandidates, ClassifiedCircle, ClassifyCircle};

/// Raw detections of one orthographic view.
///
/// `raster` is the binary drawing (material non-zero) used to tell full
/// circles from arcs; without it no circle can be classified and only the
/// line segments survive.
#[derive(Debug, Clone, Default)]
pub struct Projection {
    pub raster: Option<GrayImage>,
    pub circles: Vec<CircleFit>,
    pub segments: Vec<LineSegment>,
}

impl Projection {
    /// Creates a projection from already fitted circles and segments.
    #[must_use]
    pub fn new(raster: Option<GrayImage>, circles: Vec<CircleFit>, segments: Vec<LineSegment>) -> Self {
        Self {
            raster,
            circles,
            segments,
        }
    }

    /// Creates a projection from a binary raster, fitting circles from its
    /// contours. Line segments still come from an external detector.
    #[must_use]
    pub fn from_raster(raster: GrayImage, segments: Vec<LineSegment>, config: &ReconstructionConfig) -> Self {
        let circles = CircleCandidates::new(config).execute(&raster);
        Self {
            raster: Some(raster),
            circles,
            segments,
        }
    }

    /// Classifies every fitted circle against the raster.
    #[must_use]
    pub fn classify_circles(&self, config: &ReconstructionConfig) -> Vec<ClassifiedCircle> {
        let Some(raster) = &self.raster else {
            if !self.circles.is_empty() {
                tracing::debug!(
                    circles = self.circles.len(),
                    "no raster for gap sampling, circles skipped"
                );
            }
            return Vec::new();
        };
        self.circles
            .iter()
            .map(|fit| ClassifyCircle::new(*fit, config).classify(raster))
            .collect()
    }

    /// Normalized primitive list of this view.
    #[must_use]
    pub fn primitives(&self, config: &ReconstructionConfig) -> Vec<Primitive> {
        let classified = self.classify_circles(config);
        BuildPrimitiveList::new(&classified, &self.segments).execute()
    }
}

/// The two orthogonal views of one drawing.
#[derive(Debug, Clone, Default)]
pub struct DrawingViews {
    /// View in the XZ plane; its circles are cross-sections of Z-axis solids.
    pub xz: Projection,
    /// View in the ZY plane; its circles are cross-sections of X-axis solids.
    pub zy: Projection,
}
