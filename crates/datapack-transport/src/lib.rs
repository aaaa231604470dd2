//! datapack-transport - JSON codec and envelope packager
//!
//! This crate provides:
//! - [`Codec`] trait for encoding/decoding envelope text
//! - [`JsonCodec`] implementation for JSON transport
//! - [`BackRef`] for eliding cycles in payload graphs
//! - [`DataPackager`] for packing payloads and errors into envelopes and back

mod codec;
mod packager;

pub use codec::{BackRef, Codec, CodecError, JsonCodec};
pub use packager::DataPackager;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{BackRef, Codec, CodecError, DataPackager, JsonCodec};
}
