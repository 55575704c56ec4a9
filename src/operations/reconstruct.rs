use crate::config::ReconstructionConfig;
use crate::error::Result;
use crate::geometry::SolidGroup;
use crate::projection::DrawingViews;

use super::reconstruction::{MatchProfiles, ReconstructSolids, ResolveInteractions, SelectAxisCandidates};

/// Runs the full reconstruction over both views of a drawing.
///
/// Stages run strictly forward: primitive lists per view, axis candidates,
/// profile matches, cylinders, and finally overlap grouping. Missing or
/// unusable input only shrinks the result.
pub struct Reconstruct<'a> {
    views: &'a DrawingViews,
    config: &'a ReconstructionConfig,
}

impl<'a> Reconstruct<'a> {
    /// Creates a new `Reconstruct` operation.
    #[must_use]
    pub fn new(views: &'a DrawingViews, config: &'a ReconstructionConfig) -> Self {
        Self { views, config }
    }

    /// Executes the pipeline, returning solids and composites in input order.
    ///
    /// # Errors
    ///
    /// Returns an error only if the configuration is invalid.
    pub fn execute(&self) -> Result<Vec<SolidGroup>> {
        self.config.validate()?;

        let xz = self.views.xz.primitives(self.config);
        let zy = self.views.zy.primitives(self.config);
        tracing::debug!(xz = xz.len(), zy = zy.len(), "primitive lists built");

        let candidates = SelectAxisCandidates::new(&xz, &zy, self.config).execute();
        let matches = MatchProfiles::new(&xz, &zy, &candidates, self.config).execute();
        let solids = ReconstructSolids::new(&matches).execute();
        let groups = ResolveInteractions::new(&solids, self.config).execute();

        tracing::info!(
            solids = solids.len(),
            groups = groups.len(),
            "reconstruction finished"
        );
        Ok(groups)
    }
}
