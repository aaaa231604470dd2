//! Envelope data model
//!
//! Every payload crossing a component boundary travels inside an
//! [`Envelope`]: an error block, a metadata block, and the payload itself.
//! Field names on the wire are camelCase and must not change.

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Error number used when the caller does not classify an error
pub const UNCLASSIFIED_ERROR_NO: i32 = 999;

/// Outer container wrapping a payload of type `T`
///
/// Only a JSON object decodes into an envelope; a positional array is
/// rejected even when its elements would fit the three blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Envelope<T> {
    /// Error status of the exchange
    #[serde(default)]
    pub error: ErrorInfo,

    /// Shape and pagination metadata describing `data`
    #[serde(default)]
    pub info: DataInfo,

    /// The payload
    pub data: T,
}

impl<T> Envelope<T> {
    /// Wrap a payload with no error and the given metadata
    pub fn new(data: T, info: DataInfo) -> Self {
        Self {
            error: ErrorInfo::default(),
            info,
            data,
        }
    }

    /// Check if the envelope reports an error
    pub fn has_error(&self) -> bool {
        self.error.has_error
    }

    /// Take the payload, discarding the blocks
    pub fn into_data(self) -> T {
        self.data
    }

    /// Split into `(error, info, data)`
    pub fn into_parts(self) -> (ErrorInfo, DataInfo, T) {
        (self.error, self.info, self.data)
    }
}

impl Envelope<()> {
    /// Build an envelope that carries only an error; `data` encodes as `null`
    pub fn failure(error: ErrorInfo) -> Self {
        Self {
            error,
            info: DataInfo::default(),
            data: (),
        }
    }
}

/// The blocks of an envelope without its payload
///
/// Decoding into this type ignores `data` entirely, so metadata can be read
/// even when the payload shape is unknown to the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvelopeHead {
    pub error: ErrorInfo,
    pub info: DataInfo,
}

#[derive(Deserialize)]
struct EnvelopeFields<T> {
    #[serde(default)]
    error: ErrorInfo,
    #[serde(default)]
    info: DataInfo,
    data: T,
}

#[derive(Deserialize)]
struct HeadFields {
    #[serde(default)]
    error: ErrorInfo,
    #[serde(default)]
    info: DataInfo,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Envelope<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields: EnvelopeFields<T> = deserialize_object(deserializer)?;
        Ok(Self {
            error: fields.error,
            info: fields.info,
            data: fields.data,
        })
    }
}

impl<'de> Deserialize<'de> for EnvelopeHead {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields: HeadFields = deserialize_object(deserializer)?;
        Ok(Self {
            error: fields.error,
            info: fields.info,
        })
    }
}

/// Decode `T` from a map, refusing the sequence form derived structs accept
fn deserialize_object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    deserializer.deserialize_map(ObjectVisitor(PhantomData))
}

struct ObjectVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ObjectVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an envelope object")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<T, A::Error> {
        T::deserialize(de::value::MapAccessDeserializer::new(map))
    }
}

/// Error descriptor carrying either one message or several keyed messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorInfo {
    /// Error number; 0 when there is no error, 999 when unclassified
    pub error_no: i32,
    /// Whether this block describes an error
    pub has_error: bool,
    /// Whether the keyed `multi_message` list is used instead of `message`
    pub is_multi_error: bool,
    /// Single error description
    pub message: String,
    /// Keyed error descriptions, in annotation order
    pub multi_message: Vec<MultiErrorInfo>,
}

impl ErrorInfo {
    /// Single-message error
    pub fn single(error_no: i32, message: impl Into<String>) -> Self {
        Self {
            error_no,
            has_error: true,
            is_multi_error: false,
            message: message.into(),
            multi_message: Vec::new(),
        }
    }

    /// Multi-message error; `message` stays empty
    ///
    /// Returns `None` for an empty `entries` list, since a multi-error must
    /// carry at least one keyed message.
    pub fn multi(error_no: i32, entries: Vec<MultiErrorInfo>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self {
            error_no,
            has_error: true,
            is_multi_error: true,
            message: String::new(),
            multi_message: entries,
        })
    }

    /// Look up the message recorded for `key` in a multi-error
    pub fn message_for(&self, key: &str) -> Option<&str> {
        self.multi_message
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.message.as_str())
    }
}

/// One keyed entry of a multi-error
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiErrorInfo {
    pub key: String,
    pub message: String,
}

impl MultiErrorInfo {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Metadata block: shape tag plus pagination descriptor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataInfo {
    pub data_type: DataType,
    pub page_info: PageInfo,
}

impl DataInfo {
    /// Metadata for an unpaginated payload of the given shape
    pub fn of(data_type: DataType) -> Self {
        Self {
            data_type,
            page_info: PageInfo::default(),
        }
    }

    /// Metadata for a paginated list
    pub fn paged(page_info: PageInfo) -> Self {
        Self {
            data_type: DataType::AsPageList,
            page_info,
        }
    }
}

/// How the consumer should interpret `data`
///
/// Encoded on the wire as its integer discriminant.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Single object
    #[default]
    AsObject = 0,
    /// Ordered collection
    AsList = 1,
    /// Ordered collection with pagination
    AsPageList = 2,
    /// Scalar value
    AsValue = 3,
}

impl DataType {
    /// Integer discriminant used on the wire
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up a tag by its wire discriminant
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(DataType::AsObject),
            1 => Some(DataType::AsList),
            2 => Some(DataType::AsPageList),
            3 => Some(DataType::AsValue),
            _ => None,
        }
    }

    /// Look up a tag by its name ("AsObject", "AsList", ...)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "AsObject" => Some(DataType::AsObject),
            "AsList" => Some(DataType::AsList),
            "AsPageList" => Some(DataType::AsPageList),
            "AsValue" => Some(DataType::AsValue),
            _ => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::AsObject => write!(f, "AsObject"),
            DataType::AsList => write!(f, "AsList"),
            DataType::AsPageList => write!(f, "AsPageList"),
            DataType::AsValue => write!(f, "AsValue"),
        }
    }
}

impl Serialize for DataType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DataTypeVisitor)
    }
}

struct DataTypeVisitor;

impl Visitor<'_> for DataTypeVisitor {
    type Value = DataType;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a data type discriminant 0..=3 or its name")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<DataType, E> {
        DataType::from_code(v)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<DataType, E> {
        u64::try_from(v)
            .ok()
            .and_then(DataType::from_code)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<DataType, E> {
        DataType::from_name(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

/// Pagination descriptor
///
/// A `page_size` of 0 means pagination does not apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageInfo {
    /// Current page number
    #[serde(alias = "PageIndex")]
    pub page_index: i32,
    /// Items per page
    #[serde(alias = "PageSize")]
    pub page_size: i32,
    /// Number of pages
    #[serde(alias = "PageCount")]
    pub page_count: i32,
    /// Number of items across all pages
    #[serde(alias = "TotalCount")]
    pub total_count: i32,
}

impl PageInfo {
    pub fn new(page_index: i32, page_size: i32, page_count: i32, total_count: i32) -> Self {
        Self {
            page_index,
            page_size,
            page_count,
            total_count,
        }
    }

    /// Build a descriptor whose `page_count` is derived from `total_count`
    pub fn for_total(page_index: i32, page_size: i32, total_count: i32) -> Self {
        let page_count = if page_size > 0 {
            (total_count.max(0) as u32).div_ceil(page_size as u32) as i32
        } else {
            0
        };
        Self::new(page_index, page_size, page_count, total_count)
    }

    /// Whether pagination applies
    pub fn is_paginated(&self) -> bool {
        self.page_size != 0
    }
}
