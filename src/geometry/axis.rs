use serde::{Deserialize, Serialize};

use crate::math::{Point2, Vector3};

/// Direction of a solid's rotation axis.
///
/// Z-axis candidates come from the XZ projection and are profiled in the
/// ZY projection; X-axis candidates the other way round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Z,
    X,
}

impl Axis {
    /// Unit direction vector of the axis.
    #[must_use]
    pub fn direction(self) -> Vector3 {
        match self {
            Self::Z => Vector3::z(),
            Self::X => Vector3::x(),
        }
    }
}

/// A circle or arc hypothesised to be the cross-section of a rotation axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisCandidate {
    pub center: Point2,
    pub radius: f64,
}

/// Axis candidates of both projections, in detection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisCandidates {
    /// Candidates found in the XZ projection.
    pub z: Vec<AxisCandidate>,
    /// Candidates found in the ZY projection.
    pub x: Vec<AxisCandidate>,
}

impl AxisCandidates {
    /// Returns whether neither projection produced a candidate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.z.is_empty() && self.x.is_empty()
    }
}
