//! # Example: once_and_wildcard
//!
//! One-shot subscriptions and the wildcard phase.
//!
//! Shows how to:
//! - Register a listener that fires exactly once with
//!   [`EventBus::subscribe_once`].
//! - Observe every event from one place via [`WILDCARD`].
//! - See the phase order: named listeners first, wildcard listeners after.
//!
//! ## Run
//! ```bash
//! cargo run --example once_and_wildcard
//! ```

use ripple::{Args, BusError, EventBus, EventCtx, ListenFn, WILDCARD};

fn main() -> Result<(), BusError> {
    let bus = EventBus::new();

    bus.subscribe_once(
        "connected",
        ListenFn::arc("handshake", |_ctx: &EventCtx| {
            println!("[handshake] runs on the first connect only");
        }),
    )?;

    bus.subscribe(
        "connected",
        ListenFn::arc("session", |_ctx: &EventCtx| {
            println!("[session] runs on every connect");
        }),
    )?;

    bus.subscribe(
        WILDCARD,
        ListenFn::arc("trace", |ctx: &EventCtx| {
            println!("[trace] observed {:?} (after the named phase)", ctx.event());
        }),
    )?;

    println!("-- first emission --");
    bus.emit("connected", &Args::new())?;

    println!("-- second emission --");
    bus.emit("connected", &Args::new())?;

    println!("listeners left on \"connected\": {}", bus.listener_count("connected"));
    Ok(())
}
