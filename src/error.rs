use thiserror::Error;

/// Top-level error type for solid reconstruction.
#[derive(Debug, Error)]
pub enum ReconError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised while validating a [`ReconstructionConfig`](crate::ReconstructionConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tolerance {name} = {value} must be finite and non-negative")]
    InvalidTolerance { name: &'static str, value: f64 },

    #[error("num_points must be at least 1")]
    ZeroSampleCount,

    #[error("malformed configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors related to constructing geometric primitives.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),
}

/// Convenience type alias for results using [`ReconError`].
pub type Result<T> = std::result::Result<T, ReconError>;
