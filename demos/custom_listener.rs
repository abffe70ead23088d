//! # Example: custom_listener
//!
//! Demonstrates how to build and attach a custom event listener.
//!
//! Shows how to:
//! - Implement the [`Listen`] trait on your own type.
//! - Keep state inside a listener (behind interior mutability).
//! - Combine it with the built-in [`LogListener`].
//!
//! ## Run
//! Requires the `logging` feature to export [`LogListener`].
//! ```bash
//! cargo run --example custom_listener --features logging
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ripple::{Args, BusError, EventBus, EventCtx, Listen, LogListener, WILDCARD};

/// Counts failures per run. In real life, you could export metrics,
/// ship logs, or trigger alerts.
struct FailureMeter {
    failures: AtomicUsize,
}

impl Listen for FailureMeter {
    fn on_event(&self, ctx: &EventCtx<'_>) {
        if ctx.event() == "task-failed" {
            let n = self.failures.fetch_add(1, Ordering::Relaxed) + 1;
            let reason = ctx.arg::<String>(0).map(String::as_str).unwrap_or("unknown");
            println!("[meter] failure #{n}: {reason}");
        }
    }

    fn name(&self) -> &str {
        "failure-meter"
    }
}

fn main() -> Result<(), BusError> {
    let bus = EventBus::new();

    let meter = Arc::new(FailureMeter {
        failures: AtomicUsize::new(0),
    });
    bus.subscribe(WILDCARD, meter.clone())?;
    bus.subscribe(WILDCARD, Arc::new(LogListener))?;

    bus.emit("task-started", &Args::new())?;
    bus.emit("task-failed", &Args::new().with(String::from("connection refused")))?;
    bus.emit("task-failed", &Args::new().with(String::from("timeout")))?;

    println!("total failures: {}", meter.failures.load(Ordering::Relaxed));
    Ok(())
}
