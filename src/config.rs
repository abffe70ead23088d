//! # Bus configuration.
//!
//! Provides [`BusConfig`], the per-instance settings for an
//! [`EventBus`](crate::EventBus).
//!
//! Config is consumed once at construction time:
//! `EventBus::with_config(config)`. A bus built with `EventBus::new()` uses
//! [`BusConfig::default`].

use std::borrow::Cow;

/// Configuration for one bus instance.
///
/// Defines:
/// - **Diagnostics**: whether no-listener emissions produce a warning
/// - **Identity**: the label attached to this bus in log output
///
/// ## Field semantics
/// - `warn_unhandled`: emitting an event with zero named and zero wildcard
///   listeners is not an error, but it usually means a typoed event name or a
///   listener registered too late. When `true`, such emissions log a
///   warning-level diagnostic.
/// - `label`: appears as the `bus` field of that diagnostic. Useful when
///   several components each own a bus.
#[derive(Clone, Debug)]
pub struct BusConfig {
    /// Log a warning when an emitted event has no listeners at all.
    pub warn_unhandled: bool,

    /// Label identifying this bus in diagnostics.
    pub label: Cow<'static, str>,
}

impl Default for BusConfig {
    /// Default configuration:
    ///
    /// - `warn_unhandled = true` (surface silent emissions)
    /// - `label = "bus"`
    fn default() -> Self {
        Self {
            warn_unhandled: true,
            label: Cow::Borrowed("bus"),
        }
    }
}

impl BusConfig {
    /// Returns a config with the given label and default settings otherwise.
    pub fn labeled(label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}
