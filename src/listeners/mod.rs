//! # Event listeners.
//!
//! This module provides the [`Listen`] trait and the adapters that turn
//! ordinary values into bus subscriptions.
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   emit(event, args) ──► EventBus ──► named phase, then wildcard phase
//!                                          │
//!                                          └──► Listen::on_event(&ctx)
//!                                                    │
//!                                               ┌────┴──────┬──────────┐
//!                                               ▼           ▼          ▼
//!                                            ListenFn   LogListener  custom
//!                                            (closure)  (stdout)     impls
//! ```
//!
//! ## Listener kinds
//! - **Closures** wrapped by [`ListenFn`], for one-off handlers
//! - **Custom types** implementing [`Listen`], for handlers with state or a
//!   name worth logging
//!
//! ## Implementing custom listeners
//! ```rust
//! use ripple::{EventCtx, Listen};
//!
//! struct Metrics;
//!
//! impl Listen for Metrics {
//!     fn on_event(&self, ctx: &EventCtx<'_>) {
//!         if ctx.event() == "task-failed" {
//!             // increment failure counter
//!         }
//!     }
//! }
//! ```

mod listen;
mod listen_fn;

#[cfg(feature = "logging")]
mod log;

pub use listen::{Listen, ListenerRef};
pub use listen_fn::ListenFn;

#[cfg(feature = "logging")]
pub use log::LogListener;
