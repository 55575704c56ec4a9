use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Tolerances and sampling parameters shared by every reconstruction stage.
///
/// All distances are in drawing pixels. Each stage receives the config
/// explicitly; nothing reads global defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconstructionConfig {
    /// Maximum distance from the centroid of all circle/arc centers for a
    /// primitive to count as an axis candidate.
    pub center_tolerance: f64,
    /// Maximum distance from the centroid of all raster circle candidates
    /// for a fitted circle to be kept before gap classification.
    pub contour_center_tolerance: f64,
    /// Axis candidates whose radii differ by at most this much are merged.
    pub radius_dedup_tolerance: f64,
    /// Allowed mismatch between a profile primitive's radial offset and the
    /// candidate radius.
    pub radius_tolerance: f64,
    /// Allowed mismatch between a profile primitive's coordinate and the
    /// candidate center's coordinate.
    pub coord_tolerance: f64,
    /// Slack added to axial extents and radius sums when testing overlap.
    pub overlap_tolerance: f64,
    /// Number of equally spaced samples taken around a fitted circle.
    pub num_points: usize,
    /// Half-width of the square patch inspected at each sample (2 = 5x5).
    pub patch_radius: u32,
    /// Minimum contour area for a contour to be considered a circle candidate.
    pub area_threshold: f64,
    /// Douglas-Peucker epsilon as a fraction of the contour perimeter.
    pub approx_epsilon_ratio: f64,
    /// A contour is circular only if its approximation has more vertices than this.
    pub min_polygon_vertices: usize,
    /// Merge the arcs touching the first and last sample angles into one arc
    /// crossing 0°. Off by default: such an arc is reported as two records.
    pub stitch_wraparound: bool,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            center_tolerance: 10.0,
            contour_center_tolerance: 5.0,
            radius_dedup_tolerance: 3.0,
            radius_tolerance: 10.0,
            coord_tolerance: 10.0,
            overlap_tolerance: 10.0,
            num_points: 360,
            patch_radius: 2,
            area_threshold: 50.0,
            approx_epsilon_ratio: 0.04,
            min_polygon_vertices: 5,
            stitch_wraparound: false,
        }
    }
}

impl ReconstructionConfig {
    /// Parses a JSON document; fields it omits keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and any error
    /// reported by [`validate`](Self::validate).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every tolerance is finite and non-negative and that at
    /// least one sample is taken per circle.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTolerance`] naming the first bad field,
    /// or [`ConfigError::ZeroSampleCount`].
    pub fn validate(&self) -> Result<()> {
        let tolerances = [
            ("center_tolerance", self.center_tolerance),
            ("contour_center_tolerance", self.contour_center_tolerance),
            ("radius_dedup_tolerance", self.radius_dedup_tolerance),
            ("radius_tolerance", self.radius_tolerance),
            ("coord_tolerance", self.coord_tolerance),
            ("overlap_tolerance", self.overlap_tolerance),
            ("area_threshold", self.area_threshold),
            ("approx_epsilon_ratio", self.approx_epsilon_ratio),
        ];
        for (name, value) in tolerances {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidTolerance { name, value }.into());
            }
        }
        if self.num_points == 0 {
            return Err(ConfigError::ZeroSampleCount.into());
        }
        Ok(())
    }
}
