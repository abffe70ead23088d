//! # Per-dispatch context (`EventCtx`).
//!
//! Every call to [`EventBus::emit`](crate::EventBus::emit) builds one
//! [`EventCtx`] and passes it to each listener it invokes. The context is the
//! listener's whole view of the dispatch:
//!
//! - [`EventCtx::event`] the name of the event being dispatched (wildcard
//!   listeners learn which event fired the same way named ones do);
//! - [`EventCtx::args`] the emission payload, forwarded unmodified;
//! - [`EventCtx::cancel`] the cooperative stop signal for this emission;
//! - [`EventCtx::bus`] the dispatching bus, for re-entrant calls
//!   (`subscribe`, `unsubscribe`, nested `emit`) from inside a listener.
//!
//! ## Cancellation scope
//! The cancellation flag lives *in the context*, not on the bus. Each `emit`
//! call owns a fresh flag, so a nested emission started from inside a listener
//! cancels independently of the outer one, and "cancelling outside a dispatch"
//! is not expressible at all.
//!
//! Cancellation is cooperative: the bus checks the flag between listener
//! invocations. A running listener is never interrupted mid-call.

use std::any::Any;
use std::cell::Cell;

use crate::events::{Args, EventBus};

/// Context handed to every listener invocation of one emission.
///
/// Borrows the event name, payload and bus for the synchronous extent of the
/// `emit` call; listeners cannot retain it.
pub struct EventCtx<'a> {
    bus: &'a EventBus,
    event: &'a str,
    args: &'a Args,
    cancelled: Cell<bool>,
}

impl<'a> EventCtx<'a> {
    pub(crate) fn new(bus: &'a EventBus, event: &'a str, args: &'a Args) -> Self {
        Self {
            bus,
            event,
            args,
            cancelled: Cell::new(false),
        }
    }

    /// Name of the event being dispatched.
    #[inline]
    pub fn event(&self) -> &str {
        self.event
    }

    /// Payload of this emission.
    #[inline]
    pub fn args(&self) -> &Args {
        self.args
    }

    /// Typed access to the payload value at `index`.
    ///
    /// Shorthand for `ctx.args().get::<T>(index)`.
    #[inline]
    pub fn arg<T: Any>(&self, index: usize) -> Option<&T> {
        self.args.get::<T>(index)
    }

    /// The bus running this dispatch.
    ///
    /// Lets a listener mutate subscriptions or start a nested emission without
    /// capturing the bus in its closure.
    #[inline]
    pub fn bus(&self) -> &EventBus {
        self.bus
    }

    /// Cancels the remainder of the current emission.
    ///
    /// Listeners earlier in the dispatch order have already run and are not
    /// undone. Listeners later in the current phase, and the whole wildcard
    /// phase if the named phase is still running, are skipped. The enclosing
    /// `emit` returns `Ok(false)`.
    ///
    /// Only the emission this context belongs to is affected; nested and outer
    /// emissions keep their own flags.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// Whether this emission has been cancelled.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
