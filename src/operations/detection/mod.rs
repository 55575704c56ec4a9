mod circle_candidates;
mod classify_circle;
mod primitive_list;

pub use circle_candidates::CircleCandidates;
pub use classify_circle::{partition_samples, Boundary, ClassifiedCircle, ClassifyCircle, GapSample};
pub use primitive_list::BuildPrimitiveList;
