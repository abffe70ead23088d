//! # Example: teardown
//!
//! Component-style lifecycle: subscribe on construction, clear on teardown.
//!
//! Shows how to:
//! - Tie a set of subscriptions to an owning component.
//! - Drop everything at once with [`EventBus::clear_all_listeners`].
//! - Surface the no-listener diagnostic (a `tracing` warning) for events
//!   emitted after teardown.
//!
//! ## Run
//! ```bash
//! RUST_LOG=warn cargo run --example teardown
//! ```

use ripple::{Args, BusConfig, BusError, EventBus, EventCtx, ListenFn};

fn main() -> Result<(), BusError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let bus = EventBus::with_config(BusConfig::labeled("widget"));

    bus.subscribe(
        "value-changed",
        ListenFn::arc("binding", |ctx: &EventCtx| {
            if let Some(v) = ctx.arg::<i64>(0) {
                println!("[binding] value is now {v}");
            }
        }),
    )?;

    bus.emit("value-changed", &Args::new().with(42i64))?;

    // The component goes away; its subscriptions must not outlive it.
    bus.clear_all_listeners();
    println!("torn down, listeners left: {}", bus.listener_count("value-changed"));

    // With RUST_LOG=warn this logs: event emitted with no listeners.
    bus.emit("value-changed", &Args::new().with(7i64))?;

    Ok(())
}
