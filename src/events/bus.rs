//! # Synchronous event bus (`EventBus`).
//!
//! [`EventBus`] owns the listener registry and runs dispatch. Everything is
//! synchronous and in-process: `emit` invokes every matching listener on the
//! caller's stack, in order, before returning.
//!
//! ## Dispatch
//! ```text
//! emit(event, args)
//!     │
//!     ├─► validate name (non-empty, not "*")
//!     ├─► fresh EventCtx (per-emission cancellation flag)
//!     │
//!     ├─► named phase: snapshot entries for `event`
//!     │     for each entry (insertion order):
//!     │       ├─ skip if removed since snapshot
//!     │       ├─ listener.on_event(&ctx)
//!     │       ├─ once? remove registration
//!     │       └─ ctx cancelled? ──► return Ok(false)   (wildcard phase skipped)
//!     │
//!     ├─► no name key and no wildcard listeners?
//!     │       warn (see BusConfig::warn_unhandled) ──► return Ok(true)
//!     │
//!     ├─► wildcard phase: snapshot wildcard list, same loop
//!     │       ctx cancelled? ──► return Ok(false)
//!     │
//!     └─► return Ok(true)
//! ```
//!
//! ## Mutation during dispatch
//! Each phase iterates a snapshot taken when the phase starts, and re-checks
//! liveness against the registry before every invocation:
//!
//! - listeners **added** during an emission run from the *next* emission on;
//! - listeners **removed** during an emission (unsubscribe, `once` firing in a
//!   nested dispatch, `clear_all_listeners`) are not invoked after removal;
//! - no registration is skipped while live, and none runs twice in one
//!   emission. A `once` registration fires at most once even across nested
//!   dispatches of the same event.
//!
//! No registry borrow is held while a listener runs, which is what makes
//! re-entrant calls (`subscribe`, `unsubscribe`, nested `emit`) safe inside
//! listeners.
//!
//! ## Threading
//! The bus is single-threaded by design: dispatch is re-entrant on one stack
//! and uses `RefCell` internally. The type is `Send` (it can move to another
//! thread) but not `Sync`; confine each instance to one thread or actor.
//!
//! ## Failures
//! A listener that panics is not caught. The panic unwinds through `emit` to
//! the caller and the remainder of that dispatch is abandoned.

use std::cell::RefCell;

use tracing::warn;

use crate::config::BusConfig;
use crate::error::BusError;
use crate::events::registry::{Entry, Registry, Slot};
use crate::events::{Args, EventCtx};
use crate::listeners::ListenerRef;

/// Reserved subscription token: listeners registered under it receive every
/// emitted event, after all name-specific listeners.
pub const WILDCARD: &str = "*";

/// Synchronous in-process event bus.
///
/// Supports named events, wildcard subscriptions ([`WILDCARD`]), one-shot
/// listeners and cooperative cancellation of the emission in flight.
///
/// ## Registration policy
/// Every `subscribe` call is an independent registration, even for a handle
/// already subscribed to the same event. `unsubscribe` removes **all**
/// registrations of the handle for that event.
///
/// ## Example
/// ```rust
/// use ripple::{Args, EventBus, EventCtx, ListenFn};
///
/// let bus = EventBus::new();
///
/// let greeter = ListenFn::arc("greeter", |ctx: &EventCtx| {
///     let name = ctx.arg::<String>(0).map(String::as_str).unwrap_or("world");
///     println!("hello, {name} (event: {})", ctx.event());
/// });
/// bus.subscribe("greet", greeter)?;
///
/// let delivered = bus.emit("greet", &Args::new().with(String::from("ripple")))?;
/// assert!(delivered);
/// # Ok::<(), ripple::BusError>(())
/// ```
pub struct EventBus {
    registry: RefCell<Registry>,
    config: BusConfig,
}

impl EventBus {
    /// Creates a bus with the default [`BusConfig`].
    pub fn new() -> Self {
        Self::with_config(BusConfig::default())
    }

    /// Creates a bus with the given configuration.
    pub fn with_config(config: BusConfig) -> Self {
        Self {
            registry: RefCell::new(Registry::new()),
            config,
        }
    }

    /// Registers `listener` for `event`.
    ///
    /// `event` may be [`WILDCARD`] to receive every emission. Each call adds
    /// an independent registration.
    ///
    /// # Errors
    /// [`BusError::EmptyEvent`] if `event` is empty; no state changes.
    pub fn subscribe(&self, event: &str, listener: ListenerRef) -> Result<(), BusError> {
        self.register(event, listener, false)
    }

    /// Registers `listener` for `event`, removed automatically after its
    /// first invocation.
    ///
    /// The removal happens as soon as the listener has run, even when that
    /// emission is cancelled afterwards.
    ///
    /// # Errors
    /// [`BusError::EmptyEvent`] if `event` is empty; no state changes.
    pub fn subscribe_once(&self, event: &str, listener: ListenerRef) -> Result<(), BusError> {
        self.register(event, listener, true)
    }

    fn register(&self, event: &str, listener: ListenerRef, once: bool) -> Result<(), BusError> {
        if event.is_empty() {
            return Err(BusError::EmptyEvent);
        }
        self.registry.borrow_mut().insert(event, listener, once);
        Ok(())
    }

    /// Removes every registration of `listener` for `event`.
    ///
    /// Matching is by handle identity (`Arc::ptr_eq`), so pass a clone of the
    /// handle used to subscribe. `event` may be [`WILDCARD`]. Silently does
    /// nothing when no registration matches.
    ///
    /// # Errors
    /// [`BusError::EmptyEvent`] if `event` is empty; no state changes.
    pub fn unsubscribe(&self, event: &str, listener: &ListenerRef) -> Result<(), BusError> {
        if event.is_empty() {
            return Err(BusError::EmptyEvent);
        }
        self.registry.borrow_mut().remove_matching(event, listener);
        Ok(())
    }

    /// Emits `event`, invoking listeners synchronously on the caller's stack.
    ///
    /// Named listeners run first, then wildcard listeners; each phase in
    /// insertion order. `args` is forwarded to every listener unmodified.
    ///
    /// Returns `Ok(true)` when the dispatch ran to completion (including the
    /// no-listener case) and `Ok(false)` when a listener cancelled it via
    /// [`EventCtx::cancel`].
    ///
    /// Re-entrant: a listener may call `emit` on the same bus; the nested
    /// emission has its own cancellation scope.
    ///
    /// # Errors
    /// - [`BusError::EmptyEvent`] if `event` is empty.
    /// - [`BusError::ReservedEvent`] if `event` is [`WILDCARD`].
    ///
    /// # Panics
    /// Propagates any panic raised by a listener.
    pub fn emit(&self, event: &str, args: &Args) -> Result<bool, BusError> {
        if event.is_empty() {
            return Err(BusError::EmptyEvent);
        }
        if event == WILDCARD {
            return Err(BusError::ReservedEvent);
        }

        let ctx = EventCtx::new(self, event, args);

        let named = self.registry.borrow().snapshot_named(event);
        match named {
            Some(entries) => {
                if self.run_phase(Slot::Named(event), entries, &ctx) {
                    return Ok(false);
                }
            }
            None => {
                if self.registry.borrow().wildcard_is_empty() {
                    if self.config.warn_unhandled {
                        warn!(bus = %self.config.label, event, "event emitted with no listeners");
                    }
                    return Ok(true);
                }
            }
        }

        let wildcard = self.registry.borrow().snapshot_wildcard();
        if self.run_phase(Slot::Wildcard, wildcard, &ctx) {
            return Ok(false);
        }
        Ok(true)
    }

    /// Runs one dispatch phase over a snapshot. Returns `true` when the
    /// emission was cancelled inside the phase.
    fn run_phase(&self, slot: Slot<'_>, entries: Vec<Entry>, ctx: &EventCtx<'_>) -> bool {
        for entry in entries {
            // Removed while this emission was in flight.
            if !self.registry.borrow().contains_id(slot, entry.id) {
                continue;
            }

            entry.listener.on_event(ctx);

            if entry.once {
                self.registry.borrow_mut().remove_id(slot, entry.id);
            }
            if ctx.is_cancelled() {
                return true;
            }
        }
        false
    }

    /// Removes every registration, named and wildcard. Idempotent.
    ///
    /// Safe to call from inside a listener: the remaining listeners of the
    /// emission in flight are simply not invoked.
    pub fn clear_all_listeners(&self) {
        self.registry.borrow_mut().clear();
    }

    /// Number of registrations for `event` ([`WILDCARD`] counts the wildcard
    /// list; wildcard listeners are never included in a named count).
    pub fn listener_count(&self, event: &str) -> usize {
        self.registry.borrow().count(event)
    }

    /// Whether `event` has at least one registration.
    #[inline]
    pub fn has_listeners(&self, event: &str) -> bool {
        self.listener_count(event) > 0
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::listeners::ListenFn;

    /// Appends `tag` to a shared trace on every invocation.
    fn tracer(trace: &Arc<Mutex<Vec<String>>>, tag: &'static str) -> ListenerRef {
        let trace = Arc::clone(trace);
        ListenFn::arc(tag, move |_ctx: &EventCtx| {
            trace.lock().unwrap().push(tag.to_string());
        })
    }

    fn counter(hits: &Arc<AtomicUsize>) -> ListenerRef {
        let hits = Arc::clone(hits);
        ListenFn::arc("counter", move |_ctx: &EventCtx| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_subscribe_and_emit_delivers_args() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_in = Arc::clone(&seen);
        bus.subscribe(
            "renamed",
            ListenFn::arc("probe", move |ctx: &EventCtx| {
                let n = *ctx.arg::<u32>(0).expect("first arg");
                let s = ctx.arg::<String>(1).expect("second arg").clone();
                seen_in.lock().unwrap().push((ctx.event().to_string(), n, s));
            }),
        )
        .unwrap();

        let args = Args::new().with(7u32).with(String::from("widget"));
        assert_eq!(bus.emit("renamed", &args), Ok(true));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1, "exactly one invocation");
        assert_eq!(seen[0], ("renamed".to_string(), 7, "widget".to_string()));
    }

    #[test]
    fn test_listeners_run_in_subscription_order() {
        let bus = EventBus::new();
        let trace = Arc::new(Mutex::new(Vec::new()));

        bus.subscribe("x", tracer(&trace, "a")).unwrap();
        bus.subscribe("x", tracer(&trace, "b")).unwrap();
        bus.subscribe("x", tracer(&trace, "c")).unwrap();
        bus.emit("x", &Args::new()).unwrap();

        assert_eq!(*trace.lock().unwrap(), ["a", "b", "c"]);
    }

    #[test]
    fn test_unsubscribed_listener_is_never_invoked() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let l = counter(&hits);

        bus.subscribe("x", Arc::clone(&l)).unwrap();
        bus.unsubscribe("x", &l).unwrap();
        bus.emit("x", &Args::new()).unwrap();

        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(!bus.has_listeners("x"), "key must be pruned after removal");
    }

    #[test]
    fn test_unsubscribe_removes_all_registrations_of_handle() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let l = counter(&hits);

        bus.subscribe("x", Arc::clone(&l)).unwrap();
        bus.subscribe("x", Arc::clone(&l)).unwrap();
        assert_eq!(bus.listener_count("x"), 2);

        bus.unsubscribe("x", &l).unwrap();
        assert_eq!(bus.listener_count("x"), 0);
    }

    #[test]
    fn test_duplicate_registrations_each_fire() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let l = counter(&hits);

        bus.subscribe("x", Arc::clone(&l)).unwrap();
        bus.subscribe("x", Arc::clone(&l)).unwrap();
        bus.emit("x", &Args::new()).unwrap();

        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unsubscribe_without_match_is_noop() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));

        bus.subscribe("x", counter(&hits)).unwrap();
        bus.unsubscribe("x", &counter(&hits)).unwrap();
        bus.unsubscribe("never-subscribed", &counter(&hits)).unwrap();

        bus.emit("x", &Args::new()).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1, "unrelated listener survives");
    }

    #[test]
    fn test_once_listener_fires_exactly_once_and_prunes_key() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));

        bus.subscribe_once("x", counter(&hits)).unwrap();
        assert_eq!(bus.emit("x", &Args::new()), Ok(true));
        assert_eq!(bus.emit("x", &Args::new()), Ok(true), "no-listener emission still succeeds");
        assert_eq!(bus.emit("x", &Args::new()), Ok(true));

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(
            !bus.has_listeners("x"),
            "named entry must be pruned after its only registration fired"
        );
    }

    #[test]
    fn test_once_removal_survives_cancellation() {
        // The once listener cancels its own emission; it must still be gone.
        let bus = EventBus::new();
        bus.subscribe_once("x", ListenFn::arc("cancel-once", |ctx: &EventCtx| ctx.cancel()))
            .unwrap();

        assert_eq!(bus.emit("x", &Args::new()), Ok(false));
        assert!(!bus.has_listeners("x"));
    }

    #[test]
    fn test_wildcard_receives_every_event_with_its_name() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_in = Arc::clone(&seen);
        bus.subscribe(
            WILDCARD,
            ListenFn::arc("w", move |ctx: &EventCtx| {
                seen_in
                    .lock()
                    .unwrap()
                    .push((ctx.event().to_string(), ctx.arg::<u8>(0).copied()));
            }),
        )
        .unwrap();

        bus.emit("p", &Args::new().with(1u8)).unwrap();
        bus.emit("q", &Args::new().with(2u8)).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(*seen, [("p".to_string(), Some(1)), ("q".to_string(), Some(2))]);
    }

    #[test]
    fn test_wildcard_runs_after_named_listeners() {
        let bus = EventBus::new();
        let trace = Arc::new(Mutex::new(Vec::new()));

        bus.subscribe(WILDCARD, tracer(&trace, "wildcard")).unwrap();
        bus.subscribe("x", tracer(&trace, "named-1")).unwrap();
        bus.subscribe("x", tracer(&trace, "named-2")).unwrap();
        bus.emit("x", &Args::new()).unwrap();

        assert_eq!(*trace.lock().unwrap(), ["named-1", "named-2", "wildcard"]);
    }

    #[test]
    fn test_wildcard_fires_without_named_listeners() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));

        bus.subscribe(WILDCARD, counter(&hits)).unwrap();
        assert_eq!(bus.emit("anything", &Args::new()), Ok(true));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_once_wildcard_listener() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let named_hits = Arc::new(AtomicUsize::new(0));

        bus.subscribe_once(WILDCARD, counter(&hits)).unwrap();
        bus.subscribe("x", counter(&named_hits)).unwrap();

        bus.emit("x", &Args::new()).unwrap();
        bus.emit("x", &Args::new()).unwrap();

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(named_hits.load(Ordering::SeqCst), 2);
        assert_eq!(bus.listener_count(WILDCARD), 0);
    }

    #[test]
    fn test_cancel_stops_phase_and_skips_wildcard() {
        // a runs, b cancels, c and the wildcard never run.
        let bus = EventBus::new();
        let trace = Arc::new(Mutex::new(Vec::new()));

        bus.subscribe(WILDCARD, tracer(&trace, "wildcard")).unwrap();
        bus.subscribe("x", tracer(&trace, "a")).unwrap();

        let trace_in = Arc::clone(&trace);
        bus.subscribe(
            "x",
            ListenFn::arc("b", move |ctx: &EventCtx| {
                trace_in.lock().unwrap().push("b".to_string());
                ctx.cancel();
            }),
        )
        .unwrap();
        bus.subscribe("x", tracer(&trace, "c")).unwrap();

        assert_eq!(bus.emit("x", &Args::new()), Ok(false));
        assert_eq!(*trace.lock().unwrap(), ["a", "b"]);
    }

    #[test]
    fn test_cancel_in_wildcard_phase_stops_remaining_wildcards() {
        let bus = EventBus::new();
        let trace = Arc::new(Mutex::new(Vec::new()));

        let trace_in = Arc::clone(&trace);
        bus.subscribe(
            WILDCARD,
            ListenFn::arc("w1", move |ctx: &EventCtx| {
                trace_in.lock().unwrap().push("w1".to_string());
                ctx.cancel();
            }),
        )
        .unwrap();
        bus.subscribe(WILDCARD, tracer(&trace, "w2")).unwrap();
        bus.subscribe("x", tracer(&trace, "named")).unwrap();

        assert_eq!(bus.emit("x", &Args::new()), Ok(false));
        assert_eq!(*trace.lock().unwrap(), ["named", "w1"]);
    }

    #[test]
    fn test_nested_emission_cancels_independently() {
        // The inner emission is cancelled; the outer one still completes and
        // invokes its remaining listeners.
        let bus = EventBus::new();
        let trace = Arc::new(Mutex::new(Vec::new()));

        let trace_in = Arc::clone(&trace);
        bus.subscribe(
            "inner",
            ListenFn::arc("inner-cancel", move |ctx: &EventCtx| {
                trace_in.lock().unwrap().push("inner".to_string());
                ctx.cancel();
            }),
        )
        .unwrap();

        let trace_in = Arc::clone(&trace);
        bus.subscribe(
            "outer",
            ListenFn::arc("outer-head", move |ctx: &EventCtx| {
                trace_in.lock().unwrap().push("outer-head".to_string());
                let inner = ctx.bus().emit("inner", &Args::new()).unwrap();
                assert!(!inner, "inner emission was cancelled");
            }),
        )
        .unwrap();
        bus.subscribe("outer", tracer(&trace, "outer-tail")).unwrap();

        assert_eq!(bus.emit("outer", &Args::new()), Ok(true));
        assert_eq!(*trace.lock().unwrap(), ["outer-head", "inner", "outer-tail"]);
    }

    #[test]
    fn test_outer_cancellation_does_not_leak_into_nested_emission() {
        let bus = EventBus::new();
        let trace = Arc::new(Mutex::new(Vec::new()));

        bus.subscribe("inner", tracer(&trace, "inner-1")).unwrap();
        bus.subscribe("inner", tracer(&trace, "inner-2")).unwrap();

        let trace_in = Arc::clone(&trace);
        bus.subscribe(
            "outer",
            ListenFn::arc("outer-cancel", move |ctx: &EventCtx| {
                trace_in.lock().unwrap().push("outer-cancel".to_string());
                ctx.cancel();
                // Cancelling the outer emission must not stop the nested one.
                let inner = ctx.bus().emit("inner", &Args::new()).unwrap();
                assert!(inner, "nested emission has its own cancellation scope");
            }),
        )
        .unwrap();
        bus.subscribe("outer", tracer(&trace, "outer-tail")).unwrap();

        assert_eq!(bus.emit("outer", &Args::new()), Ok(false));
        assert_eq!(*trace.lock().unwrap(), ["outer-cancel", "inner-1", "inner-2"]);
    }

    #[test]
    fn test_emit_without_listeners_returns_true() {
        let bus = EventBus::new();
        assert_eq!(bus.emit("nobody-home", &Args::new()), Ok(true));
    }

    #[test]
    fn test_clear_all_listeners_drops_named_and_wildcard() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));

        bus.subscribe("x", counter(&hits)).unwrap();
        bus.subscribe("y", counter(&hits)).unwrap();
        bus.subscribe(WILDCARD, counter(&hits)).unwrap();

        bus.clear_all_listeners();
        bus.clear_all_listeners(); // idempotent

        bus.emit("x", &Args::new()).unwrap();
        bus.emit("y", &Args::new()).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(!bus.has_listeners("x"));
        assert!(!bus.has_listeners(WILDCARD));
    }

    #[test]
    fn test_clear_during_dispatch_stops_remaining_listeners() {
        let bus = EventBus::new();
        let trace = Arc::new(Mutex::new(Vec::new()));

        let trace_in = Arc::clone(&trace);
        bus.subscribe(
            "x",
            ListenFn::arc("clearer", move |ctx: &EventCtx| {
                trace_in.lock().unwrap().push("clearer".to_string());
                ctx.bus().clear_all_listeners();
            }),
        )
        .unwrap();
        bus.subscribe("x", tracer(&trace, "after")).unwrap();
        bus.subscribe(WILDCARD, tracer(&trace, "wildcard")).unwrap();

        // Not cancelled, just emptied: the emission completes normally.
        assert_eq!(bus.emit("x", &Args::new()), Ok(true));
        assert_eq!(*trace.lock().unwrap(), ["clearer"]);
        assert!(!bus.has_listeners("x"));
    }

    #[test]
    fn test_listener_added_during_dispatch_runs_next_emission() {
        let bus = EventBus::new();
        let trace = Arc::new(Mutex::new(Vec::new()));

        let trace_in = Arc::clone(&trace);
        bus.subscribe(
            "x",
            ListenFn::arc("adder", move |ctx: &EventCtx| {
                trace_in.lock().unwrap().push("adder".to_string());
                let trace_new = Arc::clone(&trace_in);
                ctx.bus()
                    .subscribe(
                        "x",
                        ListenFn::arc("late", move |_ctx: &EventCtx| {
                            trace_new.lock().unwrap().push("late".to_string());
                        }),
                    )
                    .unwrap();
            }),
        )
        .unwrap();

        bus.emit("x", &Args::new()).unwrap();
        assert_eq!(*trace.lock().unwrap(), ["adder"], "snapshot defers the new listener");

        trace.lock().unwrap().clear();
        bus.emit("x", &Args::new()).unwrap();
        // The second emission sees one `late` from the first; the one it adds
        // itself is again deferred.
        assert_eq!(*trace.lock().unwrap(), ["adder", "late"]);
    }

    #[test]
    fn test_listener_removed_during_dispatch_does_not_run() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let victim = counter(&hits);

        let victim_handle = Arc::clone(&victim);
        bus.subscribe(
            "x",
            ListenFn::arc("remover", move |ctx: &EventCtx| {
                ctx.bus().unsubscribe("x", &victim_handle).unwrap();
            }),
        )
        .unwrap();
        bus.subscribe("x", victim).unwrap();

        assert_eq!(bus.emit("x", &Args::new()), Ok(true));
        assert_eq!(
            hits.load(Ordering::SeqCst),
            0,
            "removal takes effect within the emission"
        );
    }

    #[test]
    fn test_once_listener_does_not_double_fire_across_nested_emissions() {
        // A listener ahead of the once entry re-emits the same event; the
        // nested dispatch consumes the once entry, so the outer snapshot must
        // skip it.
        let bus = EventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let depth = Arc::new(AtomicUsize::new(0));
        let depth_in = Arc::clone(&depth);
        bus.subscribe(
            "x",
            ListenFn::arc("reemit", move |ctx: &EventCtx| {
                if depth_in.fetch_add(1, Ordering::SeqCst) == 0 {
                    ctx.bus().emit("x", &Args::new()).unwrap();
                }
            }),
        )
        .unwrap();
        bus.subscribe_once("x", counter(&hits)).unwrap();

        bus.emit("x", &Args::new()).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1, "single-shot across nesting");
    }

    #[test]
    fn test_empty_event_name_is_rejected_everywhere() {
        let bus = EventBus::new();
        let l = counter(&Arc::new(AtomicUsize::new(0)));

        assert_eq!(bus.subscribe("", Arc::clone(&l)), Err(BusError::EmptyEvent));
        assert_eq!(bus.subscribe_once("", Arc::clone(&l)), Err(BusError::EmptyEvent));
        assert_eq!(bus.unsubscribe("", &l), Err(BusError::EmptyEvent));
        assert_eq!(bus.emit("", &Args::new()), Err(BusError::EmptyEvent));
        assert!(!bus.has_listeners(""), "failed calls must not mutate the registry");
    }

    #[test]
    fn test_emitting_the_wildcard_token_is_rejected() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        bus.subscribe(WILDCARD, counter(&hits)).unwrap();

        assert_eq!(bus.emit(WILDCARD, &Args::new()), Err(BusError::ReservedEvent));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_wildcard_subscription_never_becomes_a_name_key() {
        let bus = EventBus::new();
        bus.subscribe(WILDCARD, counter(&Arc::new(AtomicUsize::new(0)))).unwrap();

        assert_eq!(bus.listener_count(WILDCARD), 1);
        // A named event with the same spelling cannot exist.
        assert_eq!(bus.listener_count("x"), 0);
    }

    #[test]
    fn test_unsubscribe_wildcard_handle() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let w = counter(&hits);

        bus.subscribe(WILDCARD, Arc::clone(&w)).unwrap();
        bus.unsubscribe(WILDCARD, &w).unwrap();

        bus.emit("x", &Args::new()).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_listener_panic_propagates_to_emitter() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));

        bus.subscribe("x", ListenFn::arc("boom", |_ctx: &EventCtx| panic!("listener failure")))
            .unwrap();
        bus.subscribe("x", counter(&hits)).unwrap();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = bus.emit("x", &Args::new());
        }));
        assert!(result.is_err(), "panic must reach the emitter");
        assert_eq!(hits.load(Ordering::SeqCst), 0, "remaining listeners are abandoned");
    }

    #[test]
    fn test_warn_unhandled_can_be_disabled() {
        let bus = EventBus::with_config(BusConfig {
            warn_unhandled: false,
            ..BusConfig::default()
        });
        // Behavior is unchanged either way; the knob only silences the log.
        assert_eq!(bus.emit("quiet", &Args::new()), Ok(true));
    }

    #[test]
    fn test_bus_can_move_between_threads() {
        fn assert_send<T: Send>() {}
        assert_send::<EventBus>();
    }

    #[test]
    fn test_emit_skips_diagnostic_when_only_wildcards_listen() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        bus.subscribe(WILDCARD, counter(&hits)).unwrap();

        // No named entry for "x", but the emission is handled.
        assert_eq!(bus.emit("x", &Args::new()), Ok(true));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
