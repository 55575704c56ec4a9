use image::GrayImage;
use imageproc::contours::find_contours;
use imageproc::geometry::{approximate_polygon_dp, arc_length};

use crate::config::ReconstructionConfig;
use crate::geometry::CircleFit;
use crate::math::distance_2d::retain_near_centroid;
use crate::math::enclosing_circle::min_enclosing_circle;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

/// Finds fitted circles in a binary raster.
///
/// Every traced contour (outer borders and holes) whose area exceeds
/// `area_threshold` is approximated with Douglas-Peucker at
/// `approx_epsilon_ratio` of its perimeter. Contours whose approximation
/// keeps more than `min_polygon_vertices` corners are treated as round and
/// replaced by their minimum enclosing circle. Finally only circles lying
/// within `contour_center_tolerance` of the centroid of all circle centers
/// are kept.
pub struct CircleCandidates<'a> {
    config: &'a ReconstructionConfig,
}

impl<'a> CircleCandidates<'a> {
    /// Creates a new `CircleCandidates` operation.
    #[must_use]
    pub fn new(config: &'a ReconstructionConfig) -> Self {
        Self { config }
    }

    /// Executes the extraction, returning circles in contour tracing order.
    #[must_use]
    pub fn execute(&self, image: &GrayImage) -> Vec<CircleFit> {
        let contours = find_contours::<i32>(image);
        let traced = contours.len();

        let circles: Vec<CircleFit> = contours
            .iter()
            .filter_map(|contour| self.fit_round_contour(&contour.points))
            .collect();
        let round = circles.len();

        let kept = retain_near_centroid(circles, self.config.contour_center_tolerance, |c| c.center);
        tracing::debug!(traced, round, kept = kept.len(), "circle candidates extracted");
        kept
    }

    fn fit_round_contour(&self, points: &[imageproc::point::Point<i32>]) -> Option<CircleFit> {
        let pts: Vec<Point2> = points
            .iter()
            .map(|p| Point2::new(f64::from(p.x), f64::from(p.y)))
            .collect();

        if signed_area_2d(&pts).abs() <= self.config.area_threshold {
            return None;
        }

        let epsilon = self.config.approx_epsilon_ratio * arc_length(points, true);
        // approximate_polygon_dp panics on a non-positive epsilon.
        let vertices = if epsilon > 0.0 {
            approximate_polygon_dp(points, epsilon, true).len()
        } else {
            points.len()
        };
        if vertices <= self.config.min_polygon_vertices {
            tracing::trace!(vertices, "contour too angular for a circle");
            return None;
        }

        let (center, radius) = min_enclosing_circle(&pts)?;
        CircleFit::new(center.x, center.y, radius).ok()
    }
}
