pub mod axis;
pub mod primitive;
pub mod solid;

pub use axis::{Axis, AxisCandidate, AxisCandidates};
pub use primitive::{AngularSpan, CircleFit, LineSegment, Primitive};
pub use solid::{CompositeOp, CompositeSolid, Solid, SolidGroup};
