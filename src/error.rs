//! Error types used by the event bus.
//!
//! This module defines [`BusError`], the argument-validation failures raised by
//! bus operations before any listener state changes.
//!
//! Listener failures are deliberately *not* represented here: a listener that
//! panics during dispatch propagates to the caller of
//! [`EventBus::emit`](crate::EventBus::emit) and aborts the remainder of that
//! emission. The bus never swallows or retries a failed listener.

use thiserror::Error;

/// # Errors produced by bus operations.
///
/// These represent malformed calls, not dispatch failures. They are raised
/// synchronously before any registry mutation, so a failed call leaves the
/// bus exactly as it was. Always recoverable by fixing the call site.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// An empty string was passed where an event name is required.
    #[error("event name must be a non-empty string")]
    EmptyEvent,

    /// The wildcard token was passed to `emit`.
    ///
    /// `"*"` only addresses the wildcard registry in `subscribe`/`unsubscribe`;
    /// it can never be the name of an emitted event.
    #[error("\"*\" is reserved for wildcard subscriptions and cannot be emitted")]
    ReservedEvent,
}

impl BusError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use ripple::BusError;
    ///
    /// assert_eq!(BusError::EmptyEvent.as_label(), "bus_empty_event");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            BusError::EmptyEvent => "bus_empty_event",
            BusError::ReservedEvent => "bus_reserved_event",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            BusError::EmptyEvent => "empty event name".to_string(),
            BusError::ReservedEvent => "wildcard token used as event name".to_string(),
        }
    }
}
