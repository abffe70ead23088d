//! Event dispatch: payload, context, registry and the bus itself.
//!
//! This module groups the emission **data model** and the **bus** that routes
//! emissions to listeners.
//!
//! ## Contents
//! - [`Args`] ordered, arbitrarily typed emission payload
//! - [`EventCtx`] per-dispatch context owning the cancellation flag
//! - [`EventBus`] the synchronous dispatcher ([`WILDCARD`] is its reserved
//!   subscription token)
//! - `Registry` (private) listener storage with pruning
//!
//! ## Quick reference
//! - **Publishers**: whoever owns the bus calls
//!   [`EventBus::emit`]; listeners may re-emit through [`EventCtx::bus`].
//! - **Consumers**: anything implementing
//!   [`Listen`](crate::Listen), registered via [`EventBus::subscribe`] /
//!   [`EventBus::subscribe_once`].

mod args;
mod bus;
mod ctx;
mod registry;

pub use args::{ArgValue, Args};
pub use bus::{EventBus, WILDCARD};
pub use ctx::EventCtx;
