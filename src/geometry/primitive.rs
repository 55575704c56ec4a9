use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

/// A circle fitted to a raster contour, before gap classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleFit {
    /// Center in pixel coordinates.
    pub center: Point2,
    /// Radius in pixels.
    pub radius: f64,
}

impl CircleFit {
    /// Creates a fitted circle.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is non-finite or the radius is not positive.
    pub fn new(x: f64, y: f64, radius: f64) -> Result<Self> {
        if !(x.is_finite() && y.is_finite() && radius.is_finite()) {
            return Err(GeometryError::NonFinite("circle fit").into());
        }
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("circle radius must be positive".into()).into());
        }
        Ok(Self {
            center: Point2::new(x, y),
            radius,
        })
    }
}

/// An angular interval on a circle, in degrees from the positive x-axis.
///
/// `start > end` only occurs for stitched arcs that cross 0°.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngularSpan {
    pub start: f64,
    pub end: f64,
}

impl AngularSpan {
    /// Creates a new span from `start` to `end` degrees.
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Returns whether the span crosses the 0°/360° seam.
    #[must_use]
    pub fn wraps(&self) -> bool {
        self.start > self.end
    }
}

/// A raw line segment reported by the external segment detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Point2,
    pub end: Point2,
}

impl LineSegment {
    /// Creates a new segment from `(x1, y1)` to `(x2, y2)`.
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }
}

/// A 2D drawing primitive of one projection.
///
/// Angles are in degrees in `[0, 360)`, measured from the positive x-axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Primitive {
    Circle {
        center: Point2,
        radius: f64,
    },
    Arc {
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Line {
        start: Point2,
        end: Point2,
    },
}

impl Primitive {
    /// Creates an arc primitive from a fitted circle and one of its spans.
    #[must_use]
    pub fn arc(fit: &CircleFit, span: AngularSpan) -> Self {
        Self::Arc {
            center: fit.center,
            radius: fit.radius,
            start_angle: span.start,
            end_angle: span.end,
        }
    }

    /// Returns the center and radius of a circle or arc, `None` for lines.
    #[must_use]
    pub fn circular(&self) -> Option<(Point2, f64)> {
        match *self {
            Self::Circle { center, radius } | Self::Arc { center, radius, .. } => {
                Some((center, radius))
            }
            Self::Line { .. } => None,
        }
    }
}
