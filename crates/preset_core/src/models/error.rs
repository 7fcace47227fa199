use thiserror::Error;

/// Errors raised when a display string does not have the expected shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid resolution '{0}', expected '<width>x<height>'")]
    InvalidResolution(String),

    #[error("Invalid bitrate '{0}', expected '<integer> Kbps'")]
    InvalidBitrate(String),

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
}

/// Result type for model parsing.
pub type ModelResult<T> = Result<T, ModelError>;
