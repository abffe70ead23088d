//! # Example: basic
//!
//! Minimal subscribe/emit round trip with a typed payload.
//!
//! Shows how to:
//! - Build an [`EventBus`] and register a closure listener with [`ListenFn`].
//! - Pass values through [`Args`] and read them back with [`EventCtx::arg`].
//! - Check the return value of `emit`.
//!
//! ## Run
//! ```bash
//! cargo run --example basic
//! ```

use ripple::{Args, BusError, EventBus, EventCtx, ListenFn};

fn main() -> Result<(), BusError> {
    let bus = EventBus::new();

    bus.subscribe(
        "user-renamed",
        ListenFn::arc("greeter", |ctx: &EventCtx| {
            let name = ctx.arg::<String>(0).map(String::as_str).unwrap_or("<missing>");
            let attempt = ctx.arg::<u32>(1).copied().unwrap_or(0);
            println!("[greeter] event={} name={name} attempt={attempt}", ctx.event());
        }),
    )?;

    let args = Args::new().with(String::from("ripple")).with(1u32);
    let delivered = bus.emit("user-renamed", &args)?;
    println!("delivered without cancellation: {delivered}");

    Ok(())
}
