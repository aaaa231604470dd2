//! Subscriber installation

use crate::reload::{ReloadHandle, level_filter};
use datapack_core::{LogLevel, PackagerConfig};
use tracing_subscriber::Registry;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::reload;

/// Build a level filter layer that can be swapped at runtime
pub fn reloadable_filter(
    level: LogLevel,
) -> (
    reload::Layer<LevelFilter, Registry>,
    reload::Handle<LevelFilter, Registry>,
) {
    reload::Layer::new(level_filter(level))
}

/// Install a formatted subscriber filtered at `level`
///
/// Returns `false` if a global subscriber was already installed; the
/// existing subscriber is left in place and the global [`ReloadHandle`] is
/// not touched.
pub fn init_logging(level: LogLevel) -> bool {
    use tracing_subscriber::prelude::*;

    let (filter, handle) = reloadable_filter(level);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true));

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }
    ReloadHandle::global().attach(handle, level);
    tracing::debug!(%level, "logging initialized");
    true
}

/// Install a subscriber using the packager configuration's log level
pub fn init_from_config(config: &PackagerConfig) -> bool {
    init_logging(config.log_level())
}
