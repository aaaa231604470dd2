//! datapack-core - Envelope data model, shape classification, and error types
//!
//! This crate provides the foundational types of the datapack protocol:
//! - [`Envelope`] and its [`ErrorInfo`] / [`DataInfo`] / [`PageInfo`] blocks
//! - [`DataType`] shape tags and the [`PayloadShape`] classification trait
//! - [`ErrorAnnotations`] and [`AnnotatedError`] for keyed multi-errors
//! - [`DataPackError`] for error handling
//! - [`PackagerConfig`] for packager configuration

mod annotated;
mod config;
mod envelope;
mod error;
mod shape;

pub use annotated::{AnnotatedError, ErrorAnnotations};
pub use config::PackagerConfig;
pub use envelope::{
    DataInfo, DataType, Envelope, EnvelopeHead, ErrorInfo, MultiErrorInfo, PageInfo,
    UNCLASSIFIED_ERROR_NO,
};
pub use error::{DataPackError, DataPackResult};
pub use shape::PayloadShape;

/// Log levels understood by the packager configuration
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    /// Parse a case-insensitive level name ("trace", "debug", ...)
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            "off" => Some(LogLevel::Off),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AnnotatedError, DataInfo, DataPackError, DataPackResult, DataType, Envelope,
        ErrorAnnotations, ErrorInfo, LogLevel, MultiErrorInfo, PackagerConfig, PageInfo,
        PayloadShape,
    };
}
