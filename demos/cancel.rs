//! # Example: cancel
//!
//! Cooperative mid-dispatch cancellation.
//!
//! Shows how to:
//! - Veto the remainder of an emission from inside a listener with
//!   [`EventCtx::cancel`].
//! - Read the outcome from `emit`'s return value (`false` = cancelled).
//! - See that listeners ahead of the cancelling one still ran, and that the
//!   wildcard phase is skipped entirely.
//!
//! ## Flow
//! ```text
//! emit("submit", args)
//!   ├─► [audit]     runs
//!   ├─► [validate]  runs, finds the payload empty ──► ctx.cancel()
//!   ├─► [persist]   skipped
//!   └─► [trace] (wildcard) skipped
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example cancel
//! ```

use ripple::{Args, BusError, EventBus, EventCtx, ListenFn, WILDCARD};

fn main() -> Result<(), BusError> {
    let bus = EventBus::new();

    bus.subscribe(
        "submit",
        ListenFn::arc("audit", |_ctx: &EventCtx| {
            println!("[audit] recording the attempt");
        }),
    )?;

    bus.subscribe(
        "submit",
        ListenFn::arc("validate", |ctx: &EventCtx| {
            if ctx.arg::<String>(0).is_none() {
                println!("[validate] empty form, vetoing");
                ctx.cancel();
            }
        }),
    )?;

    bus.subscribe(
        "submit",
        ListenFn::arc("persist", |_ctx: &EventCtx| {
            println!("[persist] saving (unreachable for the vetoed emission)");
        }),
    )?;

    bus.subscribe(
        WILDCARD,
        ListenFn::arc("trace", |ctx: &EventCtx| {
            println!("[trace] completed emission of {}", ctx.event());
        }),
    )?;

    let ok = bus.emit("submit", &Args::new())?;
    println!("empty submit delivered: {ok}");

    let ok = bus.emit("submit", &Args::new().with(String::from("payload")))?;
    println!("filled submit delivered: {ok}");

    Ok(())
}
