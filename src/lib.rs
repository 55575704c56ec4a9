pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod projection;

#[cfg(test)]
mod test_utils;

pub use config::ReconstructionConfig;
pub use error::{ReconError, Result};
pub use geometry::{Axis, CompositeOp, CompositeSolid, Primitive, Solid, SolidGroup};
pub use operations::Reconstruct;
pub use projection::{DrawingViews, Projection};
