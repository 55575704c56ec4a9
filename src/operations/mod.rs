pub mod detection;
pub mod reconstruction;

mod reconstruct;

pub use reconstruct::Reconstruct;
