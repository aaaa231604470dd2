//! datapack-logging - Tracing setup with runtime level reloading
//!
//! This crate provides:
//! - [`init_logging`] to install a formatted tracing subscriber
//! - [`ReloadHandle`] to change the active log level at runtime

mod layer;
mod reload;

pub use datapack_core::LogLevel;
pub use layer::{init_from_config, init_logging, reloadable_filter};
pub use reload::ReloadHandle;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, init_from_config, init_logging};
}
