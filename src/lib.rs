//! # ripple
//!
//! **Ripple** is a small synchronous, in-process event bus for Rust.
//!
//! It provides named events, a wildcard subscription, one-shot listeners,
//! safe listener-set mutation during dispatch, and cooperative cancellation
//! of the emission in flight. The crate is designed as a decoupling seam for
//! component-style architectures: parts of a program broadcast what happened
//! and never learn who was listening.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  component A │   │  component B │   │  component C │
//!     │ (publisher)  │   │ (listener)   │   │ (both)       │
//!     └──────┬───────┘   └──────▲───────┘   └──────▲──┬────┘
//!            │ emit             │ on_event         │  │ emit
//!            ▼                  │                  │  ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  EventBus                                                     │
//! │  - Registry: name ──► [registrations]   (pruned on empty)     │
//! │  - Wildcard list: [registrations]       (runs after named)    │
//! │  - BusConfig: diagnostics                                     │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ### One emission
//! ```text
//! emit(event, args)
//!   ├─► EventCtx created (fresh cancellation flag for this emission)
//!   ├─► named listeners for `event`, insertion order
//!   │     └─ ctx.cancel() ─► stop, skip wildcard phase, return Ok(false)
//!   ├─► wildcard listeners, insertion order (same cancel rule)
//!   └─► return Ok(true)
//!
//! Listeners receive &EventCtx: the event name, the args, cancel(), and the
//! bus itself for re-entrant subscribe/unsubscribe/emit.
//! ```
//!
//! ## Features
//! | Area             | Description                                              | Key types / traits             |
//! |------------------|----------------------------------------------------------|--------------------------------|
//! | **Listener API** | Subscribe closures or custom types to events.            | [`Listen`], [`ListenFn`]       |
//! | **Dispatch**     | Ordered synchronous fan-out with wildcard phase.         | [`EventBus`], [`WILDCARD`]     |
//! | **Cancellation** | Cooperative, scoped to one emission, nesting-safe.       | [`EventCtx`]                   |
//! | **Payloads**     | Ordered, arbitrarily typed emission arguments.           | [`Args`], [`ArgValue`]         |
//! | **Errors**       | Typed argument-validation errors.                        | [`BusError`]                   |
//! | **Configuration**| Per-bus diagnostics settings.                            | [`BusConfig`]                  |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogListener`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use ripple::{Args, BusError, EventBus, EventCtx, ListenFn, WILDCARD};
//!
//! fn main() -> Result<(), BusError> {
//!     let bus = EventBus::new();
//!
//!     // A named listener that reads the payload.
//!     bus.subscribe(
//!         "state-changed",
//!         ListenFn::arc("render", |ctx: &EventCtx| {
//!             if let Some(key) = ctx.arg::<String>(0) {
//!                 println!("re-render field {key}");
//!             }
//!         }),
//!     )?;
//!
//!     // A wildcard listener; ctx.event() tells it which event fired.
//!     bus.subscribe(
//!         WILDCARD,
//!         ListenFn::arc("trace", |ctx: &EventCtx| {
//!             println!("observed {}", ctx.event());
//!         }),
//!     )?;
//!
//!     // A guard that may veto the rest of an emission.
//!     bus.subscribe(
//!         "submit",
//!         ListenFn::arc("validate", |ctx: &EventCtx| {
//!             if ctx.arg::<String>(0).is_none() {
//!                 ctx.cancel();
//!             }
//!         }),
//!     )?;
//!
//!     let delivered = bus.emit("state-changed", &Args::new().with(String::from("title")))?;
//!     assert!(delivered);
//!
//!     let vetoed = !bus.emit("submit", &Args::new())?;
//!     assert!(vetoed, "validation cancelled the emission");
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod events;
mod listeners;

// ---- Public re-exports ----

pub use config::BusConfig;
pub use error::BusError;
pub use events::{ArgValue, Args, EventBus, EventCtx, WILDCARD};
pub use listeners::{Listen, ListenFn, ListenerRef};

// Optional: expose a simple built-in logging listener (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogListener;
