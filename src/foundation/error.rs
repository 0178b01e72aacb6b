use std::path::PathBuf;

/// Convenience result type used across the generator.
pub type BackgroundResult<T> = Result<T, BackgroundError>;

/// Error taxonomy for canvas setup, encoding and output.
#[derive(thiserror::Error, Debug)]
pub enum BackgroundError {
    /// Invalid canvas or scene parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures while serializing pixels into PNG bytes.
    #[error("encode error: {0}")]
    Encode(String),

    /// The output file could not be created or written.
    #[error("write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BackgroundError {
    /// Build a [`BackgroundError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BackgroundError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
