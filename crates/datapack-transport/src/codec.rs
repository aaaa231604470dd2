//! Codec trait, JSON implementation, and loop-tolerant back-references

use datapack_core::DataPackError;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::DeserializeOwned};
use std::fmt;
use std::rc::{Rc, Weak};
use thiserror::Error;

/// Errors that can occur during encoding/decoding
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

impl From<CodecError> for DataPackError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Serialization(msg) => DataPackError::Serialization(msg),
            CodecError::Deserialization(msg) => DataPackError::Deserialization(msg),
            CodecError::InvalidFormat(msg) => DataPackError::Deserialization(msg),
        }
    }
}

/// Trait for envelope text encoding and decoding
pub trait Codec: Send + Sync {
    /// Encode a value to text
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, CodecError>;

    /// Decode text to a value
    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, CodecError>;

    /// Get the content type for this codec
    fn content_type(&self) -> &'static str;
}

/// JSON codec implementation using serde_json
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    /// Whether to pretty-print output (default: false for efficiency)
    pretty: bool,
}

impl JsonCodec {
    /// Create a new JSON codec
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create a JSON codec that pretty-prints output
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Whether output is pretty-printed
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl Codec for JsonCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, CodecError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        result.map_err(|e| CodecError::Serialization(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, CodecError> {
        if text.trim().is_empty() {
            return Err(CodecError::InvalidFormat("empty envelope text".to_string()));
        }
        serde_json::from_str(text).map_err(|e| CodecError::Deserialization(e.to_string()))
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}

/// Back-reference inside a cyclic payload graph
///
/// Owned payload trees cannot form cycles; a graph that points back at an
/// ancestor does so through a `Weak` pointer wrapped in `BackRef`. The link
/// always encodes as `null` and decodes to an empty reference, so cycles are
/// elided instead of recursing without bound.
///
/// # Example
///
/// ```
/// use datapack_transport::BackRef;
/// use serde::Serialize;
/// use std::rc::Rc;
///
/// #[derive(Serialize)]
/// struct Node {
///     name: String,
///     parent: BackRef<Node>,
/// }
///
/// let root = Rc::new(Node { name: "root".into(), parent: BackRef::empty() });
/// let child = Node { name: "child".into(), parent: BackRef::new(&root) };
///
/// let json = serde_json::to_string(&child).unwrap();
/// assert_eq!(json, r#"{"name":"child","parent":null}"#);
/// ```
pub struct BackRef<T>(Weak<T>);

impl<T> BackRef<T> {
    /// Point back at `target` without owning it
    pub fn new(target: &Rc<T>) -> Self {
        Self(Rc::downgrade(target))
    }

    /// A reference that points nowhere
    pub fn empty() -> Self {
        Self(Weak::new())
    }

    /// Follow the reference if the target is still alive
    pub fn upgrade(&self) -> Option<Rc<T>> {
        self.0.upgrade()
    }

    /// Whether the reference points nowhere
    pub fn is_empty(&self) -> bool {
        self.0.strong_count() == 0
    }
}

impl<T> Default for BackRef<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Clone for BackRef<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> fmt::Debug for BackRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackRef")
            .field("live", &!self.is_empty())
            .finish()
    }
}

impl<T> Serialize for BackRef<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_none()
    }
}

impl<'de, T> Deserialize<'de> for BackRef<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde::de::IgnoredAny::deserialize(deserializer)?;
        Ok(Self::empty())
    }
}
