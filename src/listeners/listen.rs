//! # Core listener trait
//!
//! `Listen` is the extension point for plugging event handlers into the bus.
//! Handlers are invoked synchronously, in order, on the thread that called
//! [`EventBus::emit`](crate::EventBus::emit).
//!
//! ## Contract
//! - Implementations should be fast and non-blocking: the emitter waits for
//!   every handler in the dispatch. Long-running work belongs somewhere else
//!   (a queue, a worker) that the handler merely pokes.
//! - A handler may mutate subscriptions or emit again through
//!   [`EventCtx::bus`]; the bus stays consistent under re-entrancy.
//! - A handler that panics aborts the rest of the dispatch for the caller of
//!   `emit`; the bus does not catch it.
//!
//! ## Example (skeleton)
//! ```rust
//! use ripple::{EventCtx, Listen};
//!
//! struct Audit;
//!
//! impl Listen for Audit {
//!     fn on_event(&self, ctx: &EventCtx<'_>) {
//!         // write audit record for ctx.event()...
//!     }
//!     fn name(&self) -> &str {
//!         "audit"
//!     }
//! }
//! ```

use std::sync::Arc;

use crate::events::EventCtx;

/// Contract for event listeners.
///
/// Called on the emitter's stack for every matching emission. The same value
/// may be registered for several events, or several times for one event; use
/// the handle returned by [`ListenFn::arc`](crate::ListenFn::arc) (or your own
/// `Arc`) for [`unsubscribe`](crate::EventBus::unsubscribe).
pub trait Listen: Send + Sync + 'static {
    /// Handle one emission.
    ///
    /// # Parameters
    /// - `ctx`: the dispatch context (event name, payload, cancellation)
    fn on_event(&self, ctx: &EventCtx<'_>);

    /// Human-readable name (for logs/diagnostics).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to a listener.
///
/// Subscription stores a clone of the handle; unsubscription matches it by
/// reference (`Arc::ptr_eq`).
pub type ListenerRef = Arc<dyn Listen>;
