#![allow(non_snake_case)]

use super::*;
use crate::reloadable_filter;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{Event, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;

struct CountingLayer {
    count: Arc<AtomicUsize>,
}

impl<S: Subscriber> Layer<S> for CountingLayer {
    fn on_event(&self, _event: &Event<'_>, _ctx: Context<'_, S>) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn ReloadHandle___reload_level___without_handle_returns_config_error() {
    let handle = ReloadHandle::new();

    let result = handle.reload_level(LogLevel::Debug);

    assert!(matches!(result, Err(DataPackError::Config(_))));
    assert!(handle.current_level().is_none());
}

#[test]
fn ReloadHandle___attach___records_current_level() {
    let (_filter, filter_handle) = reloadable_filter(LogLevel::Warn);
    let handle = ReloadHandle::new();

    handle.attach(filter_handle, LogLevel::Warn);

    assert_eq!(handle.current_level(), Some(LogLevel::Warn));
}

#[test]
fn ReloadHandle___reload_level___changes_filtering() {
    let count = Arc::new(AtomicUsize::new(0));
    let (filter, filter_handle) = reloadable_filter(LogLevel::Warn);
    let subscriber = tracing_subscriber::registry().with(filter).with(CountingLayer {
        count: Arc::clone(&count),
    });
    let handle = ReloadHandle::new();
    handle.attach(filter_handle, LogLevel::Warn);

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("filtered out");
        tracing::warn!("passes");

        handle.reload_level(LogLevel::Info).unwrap();

        tracing::info!("passes after reload");
    });

    assert_eq!(count.load(Ordering::SeqCst), 2);
    assert_eq!(handle.current_level(), Some(LogLevel::Info));
}

#[test]
fn ReloadHandle___reload_level___dropped_subscriber_returns_error() {
    let (filter, filter_handle) = reloadable_filter(LogLevel::Info);
    let handle = ReloadHandle::new();
    handle.attach(filter_handle, LogLevel::Info);
    drop(filter);

    let result = handle.reload_level(LogLevel::Debug);

    assert!(result.is_err());
    assert_eq!(handle.current_level(), Some(LogLevel::Info));
}

#[test]
fn level_filter___off___disables_everything() {
    assert_eq!(level_filter(LogLevel::Off), LevelFilter::OFF);
    assert_eq!(level_filter(LogLevel::Trace), LevelFilter::TRACE);
}
