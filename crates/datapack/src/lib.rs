//! # datapack
//!
//! Uniform response envelopes for cross-component communication.
//!
//! Every payload sent from a producer to a consumer is wrapped in a fixed
//! outer structure:
//! - an error block (`errorNo`, `hasError`, single or keyed multi-message)
//! - a metadata block (shape tag plus optional pagination)
//! - the payload itself
//!
//! ## Quick Start
//!
//! ```
//! use datapack::prelude::*;
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize, Payload)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! let user = User { id: 1, name: "ada".into() };
//! let text = datapack::pack_it(Some(&user))?;
//!
//! let back: User = datapack::unpack_it(&text)?;
//! assert_eq!(back, user);
//!
//! let page = PageInfo::for_total(1, 20, 45);
//! let text = datapack::pack_list_paged(Some(&[user][..]), &page)?;
//! let (users, page_info) = datapack::unpack_list_with_page_info::<User>(&text)?;
//! assert_eq!(users.len(), 1);
//! assert_eq!(page_info.page_count, 3);
//! # Ok::<(), datapack::DataPackError>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`datapack_core`] - Envelope data model, shape classification, errors, config
//! - [`datapack_transport`] - Codec and packager
//! - [`datapack_logging`] - Tracing subscriber setup
//! - [`datapack_macros`] - `#[derive(Payload)]`
//!
//! The free functions below use [`DataPackager::global`], a JSON packager
//! with the default configuration. Build a [`DataPackager`] directly to use
//! a custom [`PackagerConfig`] or [`Codec`].

use serde::{Serialize, de::DeserializeOwned};

// Re-export core types
pub use datapack_core::{
    AnnotatedError, DataInfo, DataPackError, DataPackResult, DataType, Envelope, EnvelopeHead,
    ErrorAnnotations, ErrorInfo, LogLevel, MultiErrorInfo, PackagerConfig, PageInfo,
    PayloadShape, UNCLASSIFIED_ERROR_NO,
};

// Re-export transport types
pub use datapack_transport::{BackRef, Codec, CodecError, DataPackager, JsonCodec};

// Re-export logging setup
pub use datapack_logging::{ReloadHandle, init_from_config, init_logging};

// Re-export macros
pub use datapack_macros::Payload;

// Re-export common dependencies that payload authors need
pub use serde;
pub use serde_json;
pub use tracing;

/// Pack a single error message; `None` uses error number 999
pub fn pack_error(message: &str, error_no: Option<i32>) -> DataPackResult<String> {
    DataPackager::global().pack_error(message, error_no)
}

/// Pack an error cause as a single- or multi-message error
pub fn pack_error_from<E>(cause: &E, error_no: Option<i32>) -> DataPackResult<String>
where
    E: ErrorAnnotations + ?Sized,
{
    DataPackager::global().pack_error_from(cause, error_no)
}

/// Pack a single object or scalar
pub fn pack_it<T>(value: Option<&T>) -> DataPackResult<String>
where
    T: Serialize + PayloadShape + ?Sized,
{
    DataPackager::global().pack_it(value)
}

/// Pack a single payload with pagination
pub fn pack_it_paged<T>(value: Option<&T>, page_info: &PageInfo) -> DataPackResult<String>
where
    T: Serialize + PayloadShape + ?Sized,
{
    DataPackager::global().pack_it_paged(value, page_info)
}

/// Pack an ordered collection
pub fn pack_list<T: Serialize>(values: Option<&[T]>) -> DataPackResult<String> {
    DataPackager::global().pack_list(values)
}

/// Pack an ordered collection with pagination
pub fn pack_list_paged<T: Serialize>(
    values: Option<&[T]>,
    page_info: &PageInfo,
) -> DataPackResult<String> {
    DataPackager::global().pack_list_paged(values, page_info)
}

/// Decode the whole envelope typed over `T`
pub fn unpack_envelope<T: DeserializeOwned>(text: &str) -> DataPackResult<Envelope<T>> {
    DataPackager::global().unpack_envelope(text)
}

/// Decode the payload as `T`
pub fn unpack_it<T: DeserializeOwned>(text: &str) -> DataPackResult<T> {
    DataPackager::global().unpack_it(text)
}

/// Decode the payload as a list of `T`
pub fn unpack_list<T: DeserializeOwned>(text: &str) -> DataPackResult<Vec<T>> {
    DataPackager::global().unpack_list(text)
}

/// Decode the payload as a list of `T` together with its pagination
pub fn unpack_list_with_page_info<T: DeserializeOwned>(
    text: &str,
) -> DataPackResult<(Vec<T>, PageInfo)> {
    DataPackager::global().unpack_list_with_page_info(text)
}

/// Read only the pagination block
pub fn get_package_page_info(text: &str) -> DataPackResult<PageInfo> {
    DataPackager::global().get_package_page_info(text)
}

/// Read only the error block
pub fn get_package_error_info(text: &str) -> DataPackResult<ErrorInfo> {
    DataPackager::global().get_package_error_info(text)
}

/// Prelude module for convenient imports.
///
/// Use `use datapack::prelude::*;` to import commonly used types.
///
/// This includes:
/// - Envelope types: `Envelope`, `ErrorInfo`, `DataInfo`, `DataType`, `PageInfo`
/// - Errors: `AnnotatedError`, `ErrorAnnotations`, `DataPackError`, `DataPackResult`
/// - Packager: `DataPackager`, `PackagerConfig`, `PayloadShape`
/// - Macros: `Payload`
/// - Serde derives: `Serialize`, `Deserialize`
pub mod prelude {
    pub use crate::{
        AnnotatedError, DataInfo, DataPackError, DataPackResult, DataPackager, DataType,
        Envelope, ErrorAnnotations, ErrorInfo, PackagerConfig, PageInfo, Payload, PayloadShape,
    };

    // Serde derives (commonly needed for payload types)
    pub use serde::{Deserialize, Serialize};
}
