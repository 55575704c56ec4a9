use crate::config::ReconstructionConfig;
use crate::geometry::{CompositeOp, CompositeSolid, Solid, SolidGroup};
use crate::math::distance_2d::distance;

/// Groups overlapping solids into composites.
///
/// Solids are visited in input order. Each solid not yet consumed becomes
/// the base of a new group and absorbs every later unconsumed solid with the
/// same axis that overlaps it. The group starts as a union and turns into a
/// subtraction as soon as an absorbed solid is thinner than the base; a
/// later, wider one does not turn it back. A group that absorbs nothing is
/// emitted as a plain cylinder. Every input solid lands in exactly one group.
pub struct ResolveInteractions<'a> {
    solids: &'a [Solid],
    config: &'a ReconstructionConfig,
}

impl<'a> ResolveInteractions<'a> {
    /// Creates a new `ResolveInteractions` operation.
    #[must_use]
    pub fn new(solids: &'a [Solid], config: &'a ReconstructionConfig) -> Self {
        Self { solids, config }
    }

    /// Executes the grouping.
    #[must_use]
    pub fn execute(&self) -> Vec<SolidGroup> {
        let tolerance = self.config.overlap_tolerance;
        let mut consumed = vec![false; self.solids.len()];
        let mut groups = Vec::new();

        for (i, base) in self.solids.iter().enumerate() {
            if consumed[i] {
                continue;
            }
            consumed[i] = true;

            let mut operation = CompositeOp::Union;
            let mut members = vec![*base];
            for (j, other) in self.solids.iter().enumerate().skip(i + 1) {
                if consumed[j] || !solids_overlap(base, other, tolerance) {
                    continue;
                }
                consumed[j] = true;
                if other.radius < base.radius {
                    operation = CompositeOp::Subtraction;
                }
                members.push(*other);
            }

            if members.len() > 1 {
                tracing::debug!(
                    ?operation,
                    members = members.len(),
                    axis = ?base.axis,
                    "overlapping solids grouped"
                );
                groups.push(SolidGroup::Composite(CompositeSolid {
                    operation,
                    solids: members,
                }));
            } else {
                groups.push(SolidGroup::Cylinder(*base));
            }
        }

        groups
    }
}

/// Tests whether two solids overlap within `tolerance`.
///
/// Solids on different axes never overlap. Otherwise both axial ranges,
/// each widened by `tolerance`, must intersect and the transverse distance
/// between the centers must be below the radius sum plus `tolerance`.
/// The test is symmetric in its two solids.
#[must_use]
pub fn solids_overlap(a: &Solid, b: &Solid, tolerance: f64) -> bool {
    if a.axis != b.axis {
        return false;
    }
    let (a_min, a_max) = a.axial_range();
    let (b_min, b_max) = b.axial_range();
    if !(a_min < b_max + tolerance && a_max > b_min - tolerance) {
        return false;
    }
    distance(&a.transverse_center(), &b.transverse_center()) < a.radius + b.radius + tolerance
}
