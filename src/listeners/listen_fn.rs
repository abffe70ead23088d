//! # Function-backed listener (`ListenFn`)
//!
//! [`ListenFn`] wraps a closure `F: Fn(&EventCtx)` so plain functions can be
//! subscribed without hand-writing a [`Listen`] impl.
//!
//! The closure is `Fn`, not `FnMut`: a listener may run many times and
//! re-entrantly (a nested `emit` can reach it while an outer invocation is on
//! the stack). Shared state belongs in an explicit `Arc<...>` captured by the
//! closure.
//!
//! ## Example
//! ```rust
//! use ripple::{EventCtx, ListenFn, ListenerRef};
//!
//! let l: ListenerRef = ListenFn::arc("worker", |ctx: &EventCtx| {
//!     println!("saw {}", ctx.event());
//! });
//!
//! assert_eq!(l.name(), "worker");
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::events::EventCtx;
use crate::listeners::listen::Listen;

/// Function-backed listener implementation.
pub struct ListenFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> ListenFn<F> {
    /// Creates a new function-backed listener.
    ///
    /// Prefer [`ListenFn::arc`] when you immediately need a
    /// [`ListenerRef`](crate::ListenerRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the listener and returns it as a shared handle.
    ///
    /// ## Example
    /// ```rust
    /// use ripple::{EventBus, EventCtx, ListenFn, ListenerRef};
    ///
    /// let bus = EventBus::new();
    /// let hello: ListenerRef = ListenFn::arc("hello", |_ctx: &EventCtx| {});
    ///
    /// bus.subscribe("ping", hello.clone())?;
    /// bus.unsubscribe("ping", &hello)?;
    /// # Ok::<(), ripple::BusError>(())
    /// ```
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> Listen for ListenFn<F>
where
    F: Fn(&EventCtx<'_>) + Send + Sync + 'static,
{
    fn on_event(&self, ctx: &EventCtx<'_>) {
        (self.f)(ctx)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
