use image::GrayImage;

use crate::config::ReconstructionConfig;
use crate::geometry::{AngularSpan, CircleFit};

/// Outcome of walking around a fitted circle.
#[derive(Debug, Clone, PartialEq)]
pub enum Boundary {
    /// Material was found at every in-bounds sample.
    FullCircle,
    /// The boundary is broken; one span per run of material.
    Arcs(Vec<AngularSpan>),
    /// No material at any sample, or no sample fell inside the image.
    Undetermined,
}

/// A fitted circle together with its classified boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedCircle {
    pub fit: CircleFit,
    pub boundary: Boundary,
}

/// One radial sample: its angle and whether the patch there is empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapSample {
    /// Angle in degrees.
    pub angle: f64,
    /// The whole patch at this angle is background.
    pub is_gap: bool,
}

/// Classifies a fitted circle as a full circle or a set of arcs by sampling
/// the binary raster along its circumference.
///
/// `num_points` angles are taken evenly over `[0, 360)`. At each one the
/// `(2 * patch_radius + 1)` square patch around the circumference pixel is
/// inspected; an all-background patch is a gap in the drawn boundary.
/// Samples whose pixel falls outside the image are dropped.
pub struct ClassifyCircle<'a> {
    fit: CircleFit,
    config: &'a ReconstructionConfig,
}

impl<'a> ClassifyCircle<'a> {
    /// Creates a new `ClassifyCircle` operation.
    #[must_use]
    pub fn new(fit: CircleFit, config: &'a ReconstructionConfig) -> Self {
        Self { fit, config }
    }

    /// Executes the classification against a binary raster.
    #[must_use]
    pub fn execute(&self, image: &GrayImage) -> Boundary {
        let samples = self.sample(image);
        let boundary = partition_samples(&samples, self.config.stitch_wraparound);
        tracing::trace!(
            center = ?self.fit.center,
            radius = self.fit.radius,
            samples = samples.len(),
            ?boundary,
            "classified circle boundary"
        );
        boundary
    }

    /// Executes the classification and pairs the result with the fit.
    #[must_use]
    pub fn classify(&self, image: &GrayImage) -> ClassifiedCircle {
        ClassifiedCircle {
            fit: self.fit,
            boundary: self.execute(image),
        }
    }

    /// Samples the raster along the circle, in increasing angle order.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn sample(&self, image: &GrayImage) -> Vec<GapSample> {
        let n = self.config.num_points;
        let (w, h) = image.dimensions();
        let step = 360.0 / n as f64;
        let CircleFit { center, radius } = self.fit;

        (0..n)
            .filter_map(|i| {
                let angle = i as f64 * step;
                let rad = angle.to_radians();
                // Truncate toward zero, so points just left of the border still land on column 0.
                let px = (center.x + radius * rad.cos()).trunc();
                let py = (center.y + radius * rad.sin()).trunc();
                if px < 0.0 || py < 0.0 || px >= f64::from(w) || py >= f64::from(h) {
                    return None;
                }
                let is_gap = patch_is_background(image, px as u32, py as u32, self.config.patch_radius);
                Some(GapSample { angle, is_gap })
            })
            .collect()
    }
}

/// Returns whether every pixel of the square patch around `(px, py)`, clipped
/// to the image, is zero.
fn patch_is_background(image: &GrayImage, px: u32, py: u32, half: u32) -> bool {
    let (w, h) = image.dimensions();
    let x0 = px.saturating_sub(half);
    let y0 = py.saturating_sub(half);
    let x1 = px.saturating_add(half).saturating_add(1).min(w);
    let y1 = py.saturating_add(half).saturating_add(1).min(h);
    (y0..y1).all(|y| (x0..x1).all(|x| image.get_pixel(x, y)[0] == 0))
}

/// Splits an ordered sample sweep into runs of material.
///
/// Single linear pass: entering a gap closes the open run at the angle of
/// the previous sample, leaving a gap opens a new one. A run still open at
/// the end of the sweep is only kept if some gap was seen; without any gap
/// the circle is full. The seam between the last and first sample is not
/// re-examined, so a run crossing 0° comes out as two spans unless `stitch`
/// is set.
#[must_use]
pub fn partition_samples(samples: &[GapSample], stitch: bool) -> Boundary {
    let mut spans = Vec::new();
    let mut open: Option<f64> = None;
    let mut saw_gap = false;
    let mut prev_angle = 0.0;

    for s in samples {
        if s.is_gap {
            saw_gap = true;
            if let Some(start) = open.take() {
                spans.push(AngularSpan::new(start, prev_angle));
            }
        } else if open.is_none() {
            open = Some(s.angle);
        }
        prev_angle = s.angle;
    }

    if let Some(start) = open {
        if !saw_gap {
            return Boundary::FullCircle;
        }
        spans.push(AngularSpan::new(start, prev_angle));
    }

    if spans.is_empty() {
        return Boundary::Undetermined;
    }

    if stitch {
        stitch_seam(&mut spans, samples);
    }
    Boundary::Arcs(spans)
}

/// Merges the span ending at the last sample into the span starting at the
/// first sample.
#[allow(clippy::float_cmp)]
fn stitch_seam(spans: &mut Vec<AngularSpan>, samples: &[GapSample]) {
    let (Some(first_sample), Some(last_sample)) = (samples.first(), samples.last()) else {
        return;
    };
    if spans.len() < 2 {
        return;
    }
    let opens_sweep = spans[0].start == first_sample.angle;
    let closes_sweep = spans.last().is_some_and(|s| s.end == last_sample.angle);
    if !(opens_sweep && closes_sweep) {
        return;
    }
    if let Some(tail) = spans.pop() {
        spans[0].start = tail.start;
    }
}
