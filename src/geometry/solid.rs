use serde::{Deserialize, Serialize};

use super::Axis;
use crate::math::{Point2, Point3, Vector3};

/// A cylinder reconstructed from one axis candidate and its profile.
///
/// Z-axis solids carry `center.y == 0`, X-axis solids `center.z == 0`; that
/// coordinate is not observable in either projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "CYLINDER")]
pub struct Solid {
    pub axis: Axis,
    pub center: Point3,
    pub radius: f64,
    pub height: f64,
}

impl Solid {
    /// Unit direction of the rotation axis.
    #[must_use]
    pub fn axis_direction(&self) -> Vector3 {
        self.axis.direction()
    }

    /// Coordinate of the center along the rotation axis.
    #[must_use]
    pub fn axial_center(&self) -> f64 {
        match self.axis {
            Axis::Z => self.center.z,
            Axis::X => self.center.x,
        }
    }

    /// `(min, max)` extent along the rotation axis.
    #[must_use]
    pub fn axial_range(&self) -> (f64, f64) {
        let half = self.height * 0.5;
        let c = self.axial_center();
        (c - half, c + half)
    }

    /// Center projected onto the plane perpendicular to the rotation axis:
    /// `(x, y)` for Z-axis solids, `(y, z)` for X-axis solids.
    #[must_use]
    pub fn transverse_center(&self) -> Point2 {
        match self.axis {
            Axis::Z => Point2::new(self.center.x, self.center.y),
            Axis::X => Point2::new(self.center.y, self.center.z),
        }
    }

    /// Center of the bottom cap, where a mesh builder extruding along
    /// [`axis_direction`](Self::axis_direction) by `height` starts.
    #[must_use]
    pub fn base_point(&self) -> Point3 {
        self.center - self.axis_direction() * (self.height * 0.5)
    }
}

/// Boolean-style label attached to a composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompositeOp {
    Union,
    Subtraction,
}

/// Overlapping solids grouped under one operation. The first solid is the base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "COMPOSITE")]
pub struct CompositeSolid {
    pub operation: CompositeOp,
    pub solids: Vec<Solid>,
}

impl CompositeSolid {
    /// The solid the remaining constituents are combined with.
    #[must_use]
    pub fn base(&self) -> Option<&Solid> {
        self.solids.first()
    }

    /// Constituents applied to the base with [`operation`](Self::operation).
    #[must_use]
    pub fn tools(&self) -> &[Solid] {
        self.solids.get(1..).unwrap_or(&[])
    }
}

/// One entry of the reconstruction output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
///
/// Both variants carry their own `"type"` tag, so a solid serializes the
/// same whether it stands alone or sits inside a composite.
#[serde(untagged)]
pub enum SolidGroup {
    Cylinder(Solid),
    Composite(CompositeSolid),
}

impl SolidGroup {
    /// Every solid in this group, base first.
    #[must_use]
    pub fn solids(&self) -> &[Solid] {
        match self {
            Self::Cylinder(solid) => std::slice::from_ref(solid),
            Self::Composite(composite) => &composite.solids,
        }
    }
}
