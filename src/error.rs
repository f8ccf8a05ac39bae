use thiserror::Error;

/// Top-level error type for the inkcut eraser kernel.
#[derive(Debug, Error)]
pub enum InkcutError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to path construction and geometric queries.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),

    #[error("path needs at least one point")]
    EmptyPath,
}

/// Errors raised while validating fragment styles.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("alpha {0} is out of range [0, 1]")]
    AlphaOutOfRange(f64),

    #[error("color channel {channel} = {value} is out of range [0, 1]")]
    ChannelOutOfRange { channel: &'static str, value: f64 },

    #[error("stroke width {0} must be finite and non-negative")]
    InvalidWidth(f64),
}

/// Errors related to stroke-level operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Reasons an erase falls back to leaving the stroke unchanged.
///
/// These are never returned as errors; they are reported on the outcome and
/// logged.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EraseAbort {
    #[error("crossings with the eraser could not be classified consistently")]
    AmbiguousCrossing,

    #[error("discarded extent {discarded} is implausible for an eraser of extent {eraser}")]
    ImplausibleDiscard { discarded: f64, eraser: f64 },

    #[error("erased fragment has degenerate geometry")]
    DegenerateGeometry,
}

/// Convenience type alias for results using [`InkcutError`].
pub type Result<T> = std::result::Result<T, InkcutError>;
