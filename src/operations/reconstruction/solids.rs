use crate::geometry::{Axis, Primitive, Solid};
use crate::math::{Point2, Point3};

use super::ProfileMatch;

/// Turns each profile match into a cylinder.
///
/// The axial extent is the min/max over the profile: both endpoint
/// coordinates of every line, and `center ± radius` of every arc regardless
/// of the arc's angular span. Matches whose profile contributes no extent
/// are skipped.
pub struct ReconstructSolids<'a> {
    matches: &'a [ProfileMatch],
}

impl<'a> ReconstructSolids<'a> {
    /// Creates a new `ReconstructSolids` operation.
    #[must_use]
    pub fn new(matches: &'a [ProfileMatch]) -> Self {
        Self { matches }
    }

    /// Executes the reconstruction, one solid per usable match, in match order.
    #[must_use]
    pub fn execute(&self) -> Vec<Solid> {
        let solids: Vec<Solid> = self.matches.iter().filter_map(solid_from_match).collect();
        tracing::debug!(
            matches = self.matches.len(),
            solids = solids.len(),
            "solids reconstructed"
        );
        solids
    }
}

/// Builds the cylinder for one match, or `None` when nothing in the profile
/// bounds it.
#[must_use]
pub fn solid_from_match(m: &ProfileMatch) -> Option<Solid> {
    let (min, max) = axial_extent(m.axis, &m.profile)?;
    let height = max - min;
    let mid = min + height / 2.0;
    let c = m.candidate.center;

    let center = match m.axis {
        Axis::Z => Point3::new(c.x, 0.0, mid),
        Axis::X => Point3::new(mid, c.y, 0.0),
    };

    Some(Solid {
        axis: m.axis,
        center,
        radius: m.candidate.radius,
        height,
    })
}

/// Running min/max of the profile along the rotation axis: drawing y for
/// Z-axis solids, drawing x for X-axis solids.
fn axial_extent(axis: Axis, profile: &[Primitive]) -> Option<(f64, f64)> {
    let along = |p: Point2| match axis {
        Axis::Z => p.y,
        Axis::X => p.x,
    };

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for primitive in profile {
        match *primitive {
            Primitive::Line { start, end } => {
                min = min.min(along(start)).min(along(end));
                max = max.max(along(start)).max(along(end));
            }
            Primitive::Arc { center, radius, .. } => {
                min = min.min(along(center) - radius);
                max = max.max(along(center) + radius);
            }
            Primitive::Circle { .. } => {}
        }
    }

    (min.is_finite() && max.is_finite()).then_some((min, max))
}
