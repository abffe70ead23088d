//! # Simple logging listener for debugging and demos.
//!
//! [`LogListener`] prints every emission it sees to stdout in a compact,
//! human-readable format. Subscribe it to a single event or to the wildcard.
//!
//! ## Output format
//! ```text
//! [event] name=state-changed args=2
//! [event] name=teardown args=0
//! ```
//!
//! Enabled via the `logging` feature. Not intended for production use;
//! implement a custom [`Listen`] for structured logging or metrics.

use crate::events::EventCtx;
use crate::listeners::listen::Listen;

/// Simple stdout logging listener.
pub struct LogListener;

impl Listen for LogListener {
    fn on_event(&self, ctx: &EventCtx<'_>) {
        println!("[event] name={} args={}", ctx.event(), ctx.args().len());
    }

    fn name(&self) -> &str {
        "log"
    }
}
