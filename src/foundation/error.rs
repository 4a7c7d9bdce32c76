/// Result alias used across the crate.
pub type GoldResult<T> = Result<T, GoldError>;

/// Error taxonomy of the construction and presentation pipeline.
///
/// The pipeline is closed and deterministic; any error aborts the run.
#[derive(thiserror::Error, Debug)]
pub enum GoldError {
    /// Invalid input value (scale, speed, canvas, fps, palette).
    #[error("validation error: {0}")]
    Validation(String),

    /// Setup mismatch between configured slots and generated entities.
    #[error("configuration error: {0}")]
    Config(String),

    /// Misuse of the timeline player or an inconsistent stage list.
    #[error("timeline error: {0}")]
    Timeline(String),

    /// Rasterization failure.
    #[error("render error: {0}")]
    Render(String),

    /// Frame sink / encoder failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// Config or dump (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error with preserved source.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GoldError {
    /// Build a [`GoldError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GoldError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`GoldError::Timeline`].
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    /// Build a [`GoldError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GoldError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`GoldError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
