use thiserror::Error;

/// Top-level error type for the tubra geometry crate.
#[derive(Debug, Error)]
pub enum TubraError {
    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Errors related to Hermite curve evaluation.
#[derive(Debug, Error)]
pub enum CurveError {
    #[error("curve requires at least 2 control nodes, got {count}")]
    TooFewNodes { count: usize },

    #[error("resampling requires at least 1 subdivision, got {subdivisions}")]
    TooFewSubdivisions { subdivisions: usize },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to Poisson-disc sampling.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("sampling radius must be positive and finite, got {radius}")]
    InvalidRadius { radius: f64 },

    #[error("sampling region must have positive dimensions, got {width} x {height}")]
    InvalidRegion { width: f64, height: f64 },
}

/// Errors related to tube mesh template construction.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("tube template requires at least 2 subdivisions, got {subdivisions}")]
    TooFewSubdivisions { subdivisions: usize },

    #[error("tube template requires at least 1 segment, got {segments}")]
    TooFewSegments { segments: usize },
}

/// Convenience type alias for results using [`TubraError`].
pub type Result<T> = std::result::Result<T, TubraError>;
