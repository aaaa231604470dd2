//! Runtime log level changes

use datapack_core::{DataPackError, DataPackResult, LogLevel};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing_subscriber::Registry;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::reload;

type FilterHandle = reload::Handle<LevelFilter, Registry>;

/// Holds the installed filter handle and the level it currently enforces
pub struct ReloadHandle {
    state: Mutex<Option<(FilterHandle, LogLevel)>>,
}

impl ReloadHandle {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(None),
        }
    }

    /// Get the process-wide handle used by [`init_logging`](crate::init_logging)
    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    /// Attach a filter handle that currently enforces `level`
    pub fn attach(&self, handle: FilterHandle, level: LogLevel) {
        *self.state.lock() = Some((handle, level));
    }

    /// Level currently enforced, if a handle is attached
    pub fn current_level(&self) -> Option<LogLevel> {
        self.state.lock().as_ref().map(|(_, level)| *level)
    }

    /// Swap the enforced level
    pub fn reload_level(&self, level: LogLevel) -> DataPackResult<()> {
        let mut guard = self.state.lock();
        let Some((handle, current)) = guard.as_mut() else {
            return Err(DataPackError::Config(
                "logging has not been initialized".to_string(),
            ));
        };
        handle
            .reload(level_filter(level))
            .map_err(|e| DataPackError::Config(format!("failed to reload log level: {e}")))?;
        *current = level;
        Ok(())
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}

#[cfg(test)]
#[path = "reload/reload_tests.rs"]
mod reload_tests;
