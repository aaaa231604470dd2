//! Errors carrying keyed annotations
//!
//! An error with no annotations packs as a single-message error. An error
//! with one or more annotations packs as a multi-error, one entry per
//! annotation in the order the annotations were added.

use std::fmt;

/// An error that may carry keyed annotations alongside its description
pub trait ErrorAnnotations: fmt::Display {
    /// Keyed annotations as `(key, text)` pairs, in insertion order
    fn annotations(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

/// General-purpose error with an ordered set of keyed annotations
///
/// # Example
///
/// ```
/// use datapack_core::{AnnotatedError, ErrorAnnotations};
///
/// let err = AnnotatedError::new("validation failed")
///     .with("name", "is required")
///     .with("age", 17);
///
/// assert_eq!(err.annotations().len(), 2);
/// assert_eq!(err.to_string(), "validation failed");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedError {
    message: String,
    annotations: Vec<(String, String)>,
}

impl AnnotatedError {
    /// Create an error with a description and no annotations
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            annotations: Vec::new(),
        }
    }

    /// Add an annotation; the value is converted to text immediately
    ///
    /// Re-using a key replaces the earlier value in place.
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Add an annotation in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        let key = key.into();
        let text = value.to_string();
        match self.annotations.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = text,
            None => self.annotations.push((key, text)),
        }
    }

    /// The error description
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether no annotations have been added
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

impl fmt::Display for AnnotatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for AnnotatedError {}

impl ErrorAnnotations for AnnotatedError {
    fn annotations(&self) -> Vec<(String, String)> {
        self.annotations.clone()
    }
}
