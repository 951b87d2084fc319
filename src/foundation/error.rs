/// Convenience result type used across textplate.
pub type TextplateResult<T> = Result<T, TextplateError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum TextplateError {
    /// Invalid user-provided data (geometry, font size, canvas dimensions).
    #[error("validation error: {0}")]
    Validation(String),

    /// Input bytes are not a valid raster image.
    #[error("decode error: {0}")]
    Decode(String),

    /// The assembled canvas could not be encoded to the requested format.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TextplateError {
    /// Build a [`TextplateError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TextplateError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`TextplateError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
