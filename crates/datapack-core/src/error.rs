//! Error types for datapack operations

use crate::ErrorAnnotations;
use thiserror::Error;

/// Result type alias for datapack operations
pub type DataPackResult<T> = Result<T, DataPackError>;

/// Error type for datapack operations
///
/// Business errors never appear here; they travel inside an envelope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataPackError {
    /// A payload could not be encoded
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Text is not a well-formed envelope, or `data` does not fit the target type
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// Invalid packager configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl DataPackError {
    /// Whether this error came from decoding envelope text
    pub fn is_deserialization(&self) -> bool {
        matches!(self, DataPackError::Deserialization(_))
    }
}

/// Classifies decode failures; encode paths map their errors explicitly
impl From<serde_json::Error> for DataPackError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            DataPackError::Deserialization(err.to_string())
        } else {
            DataPackError::Serialization(err.to_string())
        }
    }
}

impl ErrorAnnotations for DataPackError {}
