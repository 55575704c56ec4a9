use crate::config::ReconstructionConfig;
use crate::geometry::{Axis, AxisCandidate, AxisCandidates, Primitive};
use crate::math::Point2;

/// An axis candidate together with the primitives of the other projection
/// that bound it lengthwise.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileMatch {
    pub axis: Axis,
    pub candidate: AxisCandidate,
    pub profile: Vec<Primitive>,
}

/// Matches every axis candidate against the opposite projection.
///
/// Z-axis candidates (from XZ) are profiled by the ZY primitives, X-axis
/// candidates (from ZY) by the XZ primitives. Candidates with an empty
/// profile are dropped. Output holds all Z matches, then all X matches,
/// each in candidate order.
pub struct MatchProfiles<'a> {
    xz: &'a [Primitive],
    zy: &'a [Primitive],
    candidates: &'a AxisCandidates,
    config: &'a ReconstructionConfig,
}

impl<'a> MatchProfiles<'a> {
    /// Creates a new `MatchProfiles` operation.
    #[must_use]
    pub fn new(
        xz: &'a [Primitive],
        zy: &'a [Primitive],
        candidates: &'a AxisCandidates,
        config: &'a ReconstructionConfig,
    ) -> Self {
        Self {
            xz,
            zy,
            candidates,
            config,
        }
    }

    /// Executes the matching.
    #[must_use]
    pub fn execute(&self) -> Vec<ProfileMatch> {
        if self.candidates.is_empty() {
            tracing::trace!("no axis candidates to match");
            return Vec::new();
        }
        let z = self
            .candidates
            .z
            .iter()
            .filter_map(|c| self.match_candidate(Axis::Z, c, self.zy));
        let x = self
            .candidates
            .x
            .iter()
            .filter_map(|c| self.match_candidate(Axis::X, c, self.xz));
        let matches: Vec<ProfileMatch> = z.chain(x).collect();
        tracing::debug!(matches = matches.len(), "profiles matched");
        matches
    }

    fn match_candidate(
        &self,
        axis: Axis,
        candidate: &AxisCandidate,
        other: &[Primitive],
    ) -> Option<ProfileMatch> {
        let profile: Vec<Primitive> = other
            .iter()
            .filter(|p| self.qualifies(axis, candidate, p))
            .copied()
            .collect();
        if profile.is_empty() {
            tracing::trace!(?axis, radius = candidate.radius, "axis candidate has no profile");
            return None;
        }
        Some(ProfileMatch {
            axis,
            candidate: *candidate,
            profile,
        })
    }

    fn qualifies(&self, axis: Axis, candidate: &AxisCandidate, primitive: &Primitive) -> bool {
        let rt = self.config.radius_tolerance;
        let ct = self.config.coord_tolerance;
        let c = candidate.center;
        let r = candidate.radius;

        match (axis, *primitive) {
            (Axis::Z, Primitive::Line { start, end }) => {
                let on_radius = |p: Point2| ((p.x - c.x).abs() - r).abs() < rt;
                let near_axis = |p: Point2| (p.y - c.y).abs() < ct;
                (on_radius(start) || on_radius(end)) && (near_axis(start) || near_axis(end))
            }
            (Axis::X, Primitive::Line { start, end }) => {
                let on_radius = |p: Point2| ((p.y - c.y).abs() - r).abs() < rt;
                let near_axis = |p: Point2| (p.x - c.x).abs() < ct;
                (on_radius(start) || on_radius(end)) && (near_axis(start) || near_axis(end))
            }
            (Axis::Z, Primitive::Arc { center, radius, .. }) => {
                (center.x - c.x).abs() < ct && (radius - r).abs() < rt
            }
            (Axis::X, Primitive::Arc { center, radius, .. }) => {
                (center.y - c.y).abs() < ct && (radius - r).abs() < rt
            }
            (_, Primitive::Circle { .. }) => false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Primitive {
        Primitive::Line {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    fn arc(x: f64, y: f64, r: f64) -> Primitive {
        Primitive::Arc {
            center: Point2::new(x, y),
            radius: r,
            start_angle: 0.0,
            end_angle: 180.0,
        }
    }

    fn candidate(x: f64, y: f64, r: f64) -> AxisCandidate {
        AxisCandidate {
            center: Point2::new(x, y),
            radius: r,
        }
    }

    fn z_only(c: AxisCandidate) -> AxisCandidates {
        AxisCandidates { z: vec![c], x: Vec::new() }
    }

    fn x_only(c: AxisCandidate) -> AxisCandidates {
        AxisCandidates { z: Vec::new(), x: vec![c] }
    }

    #[test]
    fn z_line_at_radius_offset_matches() {
        let config = ReconstructionConfig::default();
        let cands = z_only(candidate(100.0, 5.0, 50.0));
        let zy = [line(50.0, 0.0, 50.0, 100.0), line(150.0, 0.0, 150.0, 100.0)];
        let m = MatchProfiles::new(&[], &zy, &cands, &config).execute();
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].axis, Axis::Z);
        assert_eq!(m[0].profile.len(), 2);
    }

    #[test]
    fn z_line_needs_endpoint_near_center_y() {
        let config = ReconstructionConfig::default();
        let cands = z_only(candidate(100.0, 50.0, 50.0));
        // Right x-offset, but both endpoints are 50 px away from y = 50.
        let zy = [line(50.0, 0.0, 50.0, 100.0)];
        assert!(MatchProfiles::new(&[], &zy, &cands, &config).execute().is_empty());
    }

    #[test]
    fn z_line_at_wrong_offset_is_rejected() {
        let config = ReconstructionConfig::default();
        let cands = z_only(candidate(100.0, 0.0, 50.0));
        let zy = [line(70.0, 0.0, 70.0, 100.0)];
        assert!(MatchProfiles::new(&[], &zy, &cands, &config).execute().is_empty());
    }

    #[test]
    fn tolerance_is_strict() {
        let config = ReconstructionConfig::default();
        let cands = z_only(candidate(100.0, 0.0, 50.0));
        // |(|60 - 100|) - 50| = 10, not below the tolerance.
        let zy = [line(60.0, 0.0, 60.0, 100.0)];
        assert!(MatchProfiles::new(&[], &zy, &cands, &config).execute().is_empty());
        let zy = [line(59.5, 0.0, 59.5, 100.0)];
        assert_eq!(MatchProfiles::new(&[], &zy, &cands, &config).execute().len(), 1);
    }

    #[test]
    fn x_line_uses_orthogonal_mapping() {
        let config = ReconstructionConfig::default();
        let cands = x_only(candidate(5.0, 100.0, 30.0));
        let xz = [line(0.0, 70.0, 80.0, 70.0), line(0.0, 130.0, 80.0, 130.0)];
        let m = MatchProfiles::new(&xz, &[], &cands, &config).execute();
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].axis, Axis::X);
        assert_eq!(m[0].profile.len(), 2);

        // The Z mapping reads these as x offsets of 5 and 75 from x = 5.
        let zy_only = MatchProfiles::new(&[], &xz, &z_only(candidate(5.0, 100.0, 30.0)), &config).execute();
        assert!(zy_only.is_empty());
    }

    #[test]
    fn z_arc_compares_center_x_and_radius() {
        let config = ReconstructionConfig::default();
        let cands = z_only(candidate(100.0, 0.0, 40.0));
        let zy = [arc(104.0, 300.0, 45.0), arc(130.0, 0.0, 40.0), arc(100.0, 0.0, 55.0)];
        let m = MatchProfiles::new(&[], &zy, &cands, &config).execute();
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].profile, vec![arc(104.0, 300.0, 45.0)]);
    }

    #[test]
    fn x_arc_compares_center_y_and_radius() {
        let config = ReconstructionConfig::default();
        let cands = x_only(candidate(0.0, 100.0, 40.0));
        let xz = [arc(300.0, 96.0, 38.0), arc(0.0, 130.0, 40.0)];
        let m = MatchProfiles::new(&xz, &[], &cands, &config).execute();
        assert_eq!(m[0].profile, vec![arc(300.0, 96.0, 38.0)]);
    }

    #[test]
    fn circles_never_join_a_profile() {
        let config = ReconstructionConfig::default();
        let cands = z_only(candidate(0.0, 0.0, 10.0));
        let zy = [Primitive::Circle {
            center: Point2::new(0.0, 0.0),
            radius: 10.0,
        }];
        assert!(MatchProfiles::new(&[], &zy, &cands, &config).execute().is_empty());
    }

    #[test]
    fn no_candidates_gives_no_matches() {
        let config = ReconstructionConfig::default();
        let cands = AxisCandidates::default();
        assert!(cands.is_empty());
        let zy = [line(50.0, 0.0, 50.0, 100.0)];
        assert!(MatchProfiles::new(&zy, &zy, &cands, &config).execute().is_empty());
        assert!(!z_only(candidate(100.0, 0.0, 50.0)).is_empty());
    }

    #[test]
    fn z_matches_precede_x_matches() {
        let config = ReconstructionConfig::default();
        let cands = AxisCandidates {
            z: vec![candidate(100.0, 0.0, 50.0)],
            x: vec![candidate(0.0, 100.0, 30.0)],
        };
        let xz = [line(0.0, 70.0, 80.0, 70.0)];
        let zy = [line(50.0, 0.0, 50.0, 100.0)];
        let m = MatchProfiles::new(&xz, &zy, &cands, &config).execute();
        let axes: Vec<Axis> = m.iter().map(|m| m.axis).collect();
        assert_eq!(axes, vec![Axis::Z, Axis::X]);
    }
}
