/// Convenience result type used across the marquee engine.
pub type MarqueeResult<T> = Result<T, MarqueeError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only construction-time problems surface as errors. Malformed runtime input (non-finite frame
/// deltas, velocity samples or widths) is discarded by the engine and never reported here.
#[derive(thiserror::Error, Debug)]
pub enum MarqueeError {
    /// Invalid caller-provided data (unknown track, bad scenario event).
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration that would produce an engine unable to honor its invariants.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MarqueeError {
    /// Build a [`MarqueeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MarqueeError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`MarqueeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
