//! Envelope packager
//!
//! Builds envelopes from payloads or errors and encodes them to text, and
//! decodes envelope text back into typed payloads and metadata. Every call
//! allocates its own envelope; a packager holds no mutable state and can be
//! shared freely across threads.

use crate::codec::{Codec, JsonCodec};
use datapack_core::{
    DataInfo, DataPackResult, DataType, Envelope, EnvelopeHead, ErrorAnnotations, ErrorInfo,
    MultiErrorInfo, PackagerConfig, PageInfo, PayloadShape,
};
use once_cell::sync::OnceCell;
use serde::{Serialize, de::DeserializeOwned};

/// Packs payloads into envelope text and unpacks them again
#[derive(Debug, Clone)]
pub struct DataPackager<C: Codec = JsonCodec> {
    codec: C,
    config: PackagerConfig,
}

impl DataPackager<JsonCodec> {
    /// Create a packager with the default configuration
    pub fn new() -> Self {
        Self {
            codec: JsonCodec::new(),
            config: PackagerConfig::default(),
        }
    }

    /// Create a JSON packager from a configuration
    ///
    /// Fails with a config error if [`PackagerConfig::validate`] rejects
    /// the configuration.
    pub fn with_config(config: PackagerConfig) -> DataPackResult<Self> {
        let codec = if config.pretty {
            JsonCodec::pretty()
        } else {
            JsonCodec::new()
        };
        Self::with_codec(codec, config)
    }

    /// Get the shared default packager
    pub fn global() -> &'static DataPackager {
        static INSTANCE: OnceCell<DataPackager> = OnceCell::new();
        INSTANCE.get_or_init(DataPackager::new)
    }
}

impl Default for DataPackager<JsonCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Codec> DataPackager<C> {
    /// Create a packager over a custom codec
    ///
    /// The configuration is validated first, so every packager built this
    /// way packs a non-empty no-data message.
    pub fn with_codec(codec: C, config: PackagerConfig) -> DataPackResult<Self> {
        config.validate()?;
        Ok(Self { codec, config })
    }

    /// Get the configuration
    pub fn config(&self) -> &PackagerConfig {
        &self.config
    }

    /// Get the codec
    pub fn codec(&self) -> &C {
        &self.codec
    }

    // ------------------------------------------------------------------
    // Error packing
    // ------------------------------------------------------------------

    /// Pack a single error message
    ///
    /// `error_no` of `None` uses the configured default (999 unless changed).
    pub fn pack_error(&self, message: &str, error_no: Option<i32>) -> DataPackResult<String> {
        let error_no = self.error_no(error_no);
        tracing::trace!(error_no, "packing single error");
        self.encode(&Envelope::failure(ErrorInfo::single(error_no, message)))
    }

    /// Pack an error cause
    ///
    /// A cause without annotations packs exactly like [`pack_error`] with its
    /// description. Otherwise the envelope is a multi-error with one entry per
    /// annotation, in the cause's annotation order.
    ///
    /// [`pack_error`]: DataPackager::pack_error
    pub fn pack_error_from<E>(&self, cause: &E, error_no: Option<i32>) -> DataPackResult<String>
    where
        E: ErrorAnnotations + ?Sized,
    {
        let entries: Vec<MultiErrorInfo> = cause
            .annotations()
            .into_iter()
            .map(|(key, message)| MultiErrorInfo { key, message })
            .collect();
        let entry_count = entries.len();
        let error_no = self.error_no(error_no);

        let Some(error) = ErrorInfo::multi(error_no, entries) else {
            return self.pack_error(&cause.to_string(), Some(error_no));
        };
        tracing::debug!(error_no, entries = entry_count, "packing multi-error");
        self.encode(&Envelope::failure(error))
    }

    /// Pack the configured "no data" error
    pub fn pack_no_data(&self) -> DataPackResult<String> {
        tracing::debug!("no payload supplied, packing no-data error");
        self.pack_error(&self.config.no_data_message, None)
    }

    // ------------------------------------------------------------------
    // Payload packing
    // ------------------------------------------------------------------

    /// Pack a single object or scalar
    ///
    /// The shape tag comes from `T`'s [`PayloadShape`] classification.
    pub fn pack_it<T>(&self, value: Option<&T>) -> DataPackResult<String>
    where
        T: Serialize + PayloadShape + ?Sized,
    {
        let Some(value) = value else {
            return self.pack_no_data();
        };
        self.encode(&Envelope::new(value, DataInfo::of(T::DATA_TYPE)))
    }

    /// Pack a single payload with pagination
    ///
    /// A `page_size` of 0 falls back to [`pack_it`](DataPackager::pack_it).
    pub fn pack_it_paged<T>(&self, value: Option<&T>, page_info: &PageInfo) -> DataPackResult<String>
    where
        T: Serialize + PayloadShape + ?Sized,
    {
        let Some(value) = value else {
            return self.pack_no_data();
        };
        if !page_info.is_paginated() {
            tracing::trace!("page size is 0, packing without pagination");
            return self.pack_it(Some(value));
        }
        self.encode(&Envelope::new(value, DataInfo::paged(*page_info)))
    }

    /// Pack an ordered collection
    pub fn pack_list<T: Serialize>(&self, values: Option<&[T]>) -> DataPackResult<String> {
        let Some(values) = values else {
            return self.pack_no_data();
        };
        self.encode(&Envelope::new(values, DataInfo::of(DataType::AsList)))
    }

    /// Pack an ordered collection with pagination
    ///
    /// A `page_size` of 0 falls back to [`pack_list`](DataPackager::pack_list).
    pub fn pack_list_paged<T: Serialize>(
        &self,
        values: Option<&[T]>,
        page_info: &PageInfo,
    ) -> DataPackResult<String> {
        let Some(values) = values else {
            return self.pack_no_data();
        };
        if !page_info.is_paginated() {
            tracing::trace!("page size is 0, packing as plain list");
            return self.pack_list(Some(values));
        }
        self.encode(&Envelope::new(values, DataInfo::paged(*page_info)))
    }

    // ------------------------------------------------------------------
    // Unpacking
    // ------------------------------------------------------------------

    /// Decode the whole envelope typed over `T`
    pub fn unpack_envelope<T: DeserializeOwned>(&self, text: &str) -> DataPackResult<Envelope<T>> {
        self.codec.decode(text).map_err(|e| {
            tracing::debug!(error = %e, "failed to decode envelope");
            e.into()
        })
    }

    /// Decode the payload as `T`
    pub fn unpack_it<T: DeserializeOwned>(&self, text: &str) -> DataPackResult<T> {
        Ok(self.unpack_envelope::<T>(text)?.into_data())
    }

    /// Decode the payload as a list of `T`
    pub fn unpack_list<T: DeserializeOwned>(&self, text: &str) -> DataPackResult<Vec<T>> {
        self.unpack_it(text)
    }

    /// Decode the payload as a list of `T` together with its pagination
    ///
    /// The page info is returned even when the envelope was not paginated;
    /// check [`PageInfo::is_paginated`] before relying on it.
    pub fn unpack_list_with_page_info<T: DeserializeOwned>(
        &self,
        text: &str,
    ) -> DataPackResult<(Vec<T>, PageInfo)> {
        let envelope = self.unpack_envelope::<Vec<T>>(text)?;
        Ok((envelope.data, envelope.info.page_info))
    }

    /// Read only the pagination block, whatever the payload's shape
    pub fn get_package_page_info(&self, text: &str) -> DataPackResult<PageInfo> {
        Ok(self.decode_head(text)?.info.page_info)
    }

    /// Read only the error block, whatever the payload's shape
    pub fn get_package_error_info(&self, text: &str) -> DataPackResult<ErrorInfo> {
        Ok(self.decode_head(text)?.error)
    }

    fn decode_head(&self, text: &str) -> DataPackResult<EnvelopeHead> {
        self.codec.decode(text).map_err(|e| {
            tracing::debug!(error = %e, "failed to decode envelope head");
            e.into()
        })
    }

    fn encode<T: Serialize>(&self, envelope: &Envelope<T>) -> DataPackResult<String> {
        self.codec.encode(envelope).map_err(|e| {
            tracing::warn!(error = %e, "failed to encode envelope");
            e.into()
        })
    }

    fn error_no(&self, error_no: Option<i32>) -> i32 {
        error_no.unwrap_or(self.config.default_error_no)
    }
}

#[cfg(test)]
#[path = "packager/packager_tests.rs"]
mod packager_tests;
