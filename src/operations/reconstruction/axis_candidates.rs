use crate::config::ReconstructionConfig;
use crate::geometry::{AxisCandidate, AxisCandidates, Primitive};
use crate::math::distance_2d::retain_near_centroid;

/// Selects rotation-axis candidates from the circles and arcs of both
/// projections.
///
/// Per projection, circle/arc primitives whose center lies within
/// `center_tolerance` of the centroid of all circle/arc centers are kept,
/// then rings of near-equal radius are merged keeping the first one seen.
/// The XZ projection yields Z-axis candidates, the ZY projection X-axis
/// candidates.
pub struct SelectAxisCandidates<'a> {
    xz: &'a [Primitive],
    zy: &'a [Primitive],
    config: &'a ReconstructionConfig,
}

impl<'a> SelectAxisCandidates<'a> {
    /// Creates a new `SelectAxisCandidates` operation.
    #[must_use]
    pub fn new(xz: &'a [Primitive], zy: &'a [Primitive], config: &'a ReconstructionConfig) -> Self {
        Self { xz, zy, config }
    }

    /// Executes the selection.
    #[must_use]
    pub fn execute(&self) -> AxisCandidates {
        let candidates = AxisCandidates {
            z: select_in_projection(self.xz, self.config),
            x: select_in_projection(self.zy, self.config),
        };
        tracing::debug!(
            z = candidates.z.len(),
            x = candidates.x.len(),
            "axis candidates selected"
        );
        candidates
    }
}

/// Candidate selection for a single projection.
#[must_use]
pub fn select_in_projection(
    primitives: &[Primitive],
    config: &ReconstructionConfig,
) -> Vec<AxisCandidate> {
    let circular: Vec<AxisCandidate> = primitives
        .iter()
        .filter_map(Primitive::circular)
        .map(|(center, radius)| AxisCandidate { center, radius })
        .collect();
    let concentric = retain_near_centroid(circular, config.center_tolerance, |c| c.center);
    dedup_by_radius(concentric, config.radius_dedup_tolerance)
}

/// Drops every candidate whose radius is within `tolerance` (inclusive) of
/// an already kept candidate. Order is preserved and the first of each
/// group survives.
#[must_use]
pub fn dedup_by_radius(candidates: Vec<AxisCandidate>, tolerance: f64) -> Vec<AxisCandidate> {
    let mut kept: Vec<AxisCandidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let duplicate = kept
            .iter()
            .any(|k| (k.radius - candidate.radius).abs() <= tolerance);
        if duplicate {
            tracing::trace!(radius = candidate.radius, "duplicate axis ring dropped");
        } else {
            kept.push(candidate);
        }
    }
    kept
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn circle(x: f64, y: f64, r: f64) -> Primitive {
        Primitive::Circle {
            center: Point2::new(x, y),
            radius: r,
        }
    }

    fn arc(x: f64, y: f64, r: f64) -> Primitive {
        Primitive::Arc {
            center: Point2::new(x, y),
            radius: r,
            start_angle: 0.0,
            end_angle: 90.0,
        }
    }

    fn radii(candidates: &[AxisCandidate]) -> Vec<f64> {
        candidates.iter().map(|c| c.radius).collect()
    }

    #[test]
    fn empty_projection_gives_no_candidates() {
        let config = ReconstructionConfig::default();
        assert!(select_in_projection(&[], &config).is_empty());
    }

    #[test]
    fn lines_only_gives_no_candidates() {
        let config = ReconstructionConfig::default();
        let lines = [Primitive::Line {
            start: Point2::new(0.0, 0.0),
            end: Point2::new(10.0, 0.0),
        }];
        assert!(select_in_projection(&lines, &config).is_empty());
    }

    #[test]
    fn concentric_rings_are_kept_in_order() {
        let config = ReconstructionConfig::default();
        let prims = [circle(100.0, 100.0, 50.0), arc(101.0, 99.0, 30.0), circle(100.0, 101.0, 10.0)];
        assert_eq!(radii(&select_in_projection(&prims, &config)), vec![50.0, 30.0, 10.0]);
    }

    #[test]
    fn off_center_circle_is_rejected() {
        let config = ReconstructionConfig::default();
        let prims = [
            circle(100.0, 100.0, 50.0),
            circle(100.0, 100.0, 30.0),
            circle(100.0, 100.0, 20.0),
            circle(160.0, 100.0, 5.0),
        ];
        // Centroid sits at x = 115: the three rings are 15 px off, the stray one 45 px.
        let config = ReconstructionConfig {
            center_tolerance: 20.0,
            ..config
        };
        assert_eq!(radii(&select_in_projection(&prims, &config)), vec![50.0, 30.0, 20.0]);
    }

    #[test]
    fn near_equal_radii_keep_first_seen() {
        let config = ReconstructionConfig::default();
        let prims = [arc(0.0, 0.0, 30.0), circle(0.0, 0.0, 32.0), arc(0.0, 0.0, 33.5), circle(0.0, 0.0, 50.0)];
        // 32 is within 3 of 30; 33.5 is 3.5 from 30 and survives.
        assert_eq!(radii(&select_in_projection(&prims, &config)), vec![30.0, 33.5, 50.0]);
    }

    #[test]
    fn radius_dedup_is_idempotent() {
        let rings: Vec<AxisCandidate> = [10.0, 12.0, 13.5, 16.0, 16.4, 40.0, 43.0]
            .into_iter()
            .map(|radius| AxisCandidate {
                center: Point2::origin(),
                radius,
            })
            .collect();
        let once = dedup_by_radius(rings, 3.0);
        let twice = dedup_by_radius(once.clone(), 3.0);
        assert_eq!(once, twice);
        assert_eq!(radii(&once), vec![10.0, 13.5, 40.0]);
    }

    #[test]
    fn radius_dedup_boundary_is_inclusive() {
        let ring = |radius| AxisCandidate {
            center: Point2::origin(),
            radius,
        };
        assert_eq!(dedup_by_radius(vec![ring(30.0), ring(33.0)], 3.0).len(), 1);
        assert_eq!(dedup_by_radius(vec![ring(30.0), ring(33.0001)], 3.0).len(), 2);
    }

    #[test]
    fn projections_feed_their_own_axis() {
        let config = ReconstructionConfig::default();
        let xz = [circle(10.0, 10.0, 5.0)];
        let zy = [circle(20.0, 20.0, 8.0), circle(20.0, 20.0, 4.0)];
        let got = SelectAxisCandidates::new(&xz, &zy, &config).execute();
        assert_eq!(radii(&got.z), vec![5.0]);
        assert_eq!(radii(&got.x), vec![8.0, 4.0]);
    }
}
