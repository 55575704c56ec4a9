mod axis_candidates;
mod interactions;
mod match_profiles;
mod solids;

pub use axis_candidates::{dedup_by_radius, select_in_projection, SelectAxisCandidates};
pub use interactions::{solids_overlap, ResolveInteractions};
pub use match_profiles::{MatchProfiles, ProfileMatch};
pub use solids::{solid_from_match, ReconstructSolids};
