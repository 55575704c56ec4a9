use crate::geometry::{AngularSpan, LineSegment, Primitive};
use crate::math::Point2;

use super::{Boundary, ClassifiedCircle};

/// Normalizes the detections of one projection into a single primitive list.
///
/// Full circles come first, then every arc span in classification order,
/// then line segments. Segment endpoints are truncated toward zero to whole
/// pixels. Circles whose boundary stayed undetermined contribute nothing.
pub struct BuildPrimitiveList<'a> {
    circles: &'a [ClassifiedCircle],
    segments: &'a [LineSegment],
}

impl<'a> BuildPrimitiveList<'a> {
    /// Creates a new `BuildPrimitiveList` operation.
    #[must_use]
    pub fn new(circles: &'a [ClassifiedCircle], segments: &'a [LineSegment]) -> Self {
        Self { circles, segments }
    }

    /// Executes the normalization.
    #[must_use]
    pub fn execute(&self) -> Vec<Primitive> {
        let full = self.circles.iter().filter_map(|c| match c.boundary {
            Boundary::FullCircle => Some(Primitive::Circle {
                center: c.fit.center,
                radius: c.fit.radius,
            }),
            Boundary::Arcs(_) | Boundary::Undetermined => None,
        });

        let arcs = self.circles.iter().flat_map(|c| {
            let spans: &[AngularSpan] = match &c.boundary {
                Boundary::Arcs(spans) => spans.as_slice(),
                Boundary::FullCircle | Boundary::Undetermined => &[],
            };
            spans.iter().map(move |span| Primitive::arc(&c.fit, *span))
        });

        let lines = self.segments.iter().map(|s| Primitive::Line {
            start: truncate(&s.start),
            end: truncate(&s.end),
        });

        full.chain(arcs).chain(lines).collect()
    }
}

fn truncate(p: &Point2) -> Point2 {
    Point2::new(p.x.trunc(), p.y.trunc())
}
