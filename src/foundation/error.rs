/// Convenience result type used across convoscope.
pub type ConvoResult<T> = Result<T, ConvoError>;

/// Top-level error taxonomy used by the library APIs.
///
/// The convolution core itself never fails: empty inputs and out-of-range
/// indices are degenerate results, not errors. These variants belong to the
/// collaborators around it.
#[derive(thiserror::Error, Debug)]
pub enum ConvoError {
    /// Invalid user-provided configuration or session data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Raw sequence text that could not be turned into a signal.
    #[error("parse error: {0}")]
    Parse(String),

    /// Errors while building or rasterizing a stage frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while streaming frames into the video encoder.
    #[error("encode error: {0}")]
    Encode(String),

    /// Failures of the generative assistant (transport, payload, cancellation).
    #[error("assist error: {0}")]
    Assist(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ConvoError {
    /// Build a [`ConvoError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ConvoError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`ConvoError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ConvoError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`ConvoError::Assist`] value.
    pub fn assist(msg: impl Into<String>) -> Self {
        Self::Assist(msg.into())
    }

    /// Build a [`ConvoError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ConvoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
