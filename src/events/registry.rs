//! Listener storage for the bus.
//!
//! [`Registry`] owns the two collections behind an
//! [`EventBus`](crate::EventBus): the map of named entries and the wildcard
//! list. It knows nothing about dispatch; the bus snapshots entries out of it
//! and applies removals back by registration id.
//!
//! Invariant: a name key with zero entries never persists. Every removal path
//! (`remove_matching`, `remove_id`) deletes the key when it empties.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::listeners::ListenerRef;

/// Global sequence counter for registration identity.
static REGISTRATION_SEQ: AtomicU64 = AtomicU64::new(0);

/// One subscription: a listener handle plus its single-shot flag.
///
/// `id` distinguishes this registration from any other, including another
/// registration of the same handle on the same event. Removal during an
/// in-flight dispatch works on ids, never on positions.
#[derive(Clone)]
pub(crate) struct Entry {
    pub(crate) id: u64,
    pub(crate) once: bool,
    pub(crate) listener: ListenerRef,
}

impl Entry {
    fn new(listener: ListenerRef, once: bool) -> Self {
        Self {
            id: REGISTRATION_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            once,
            listener,
        }
    }
}

/// Which collection a dispatch phase reads.
#[derive(Clone, Copy)]
pub(crate) enum Slot<'a> {
    Named(&'a str),
    Wildcard,
}

/// Listener collections: named entries keyed by event name, plus the wildcard
/// list. Wildcard registrations are never stored under a name key.
#[derive(Default)]
pub(crate) struct Registry {
    named: HashMap<String, Vec<Entry>>,
    wildcard: Vec<Entry>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a registration for `event` (`"*"` routes to the wildcard list).
    pub(crate) fn insert(&mut self, event: &str, listener: ListenerRef, once: bool) {
        let entry = Entry::new(listener, once);
        if event == crate::events::WILDCARD {
            self.wildcard.push(entry);
        } else {
            self.named.entry(event.to_string()).or_default().push(entry);
        }
    }

    /// Removes every registration for `event` whose handle matches `listener`
    /// by reference. No-op when nothing matches.
    pub(crate) fn remove_matching(&mut self, event: &str, listener: &ListenerRef) {
        if event == crate::events::WILDCARD {
            self.wildcard.retain(|e| !Arc::ptr_eq(&e.listener, listener));
            return;
        }
        if let Some(entries) = self.named.get_mut(event) {
            entries.retain(|e| !Arc::ptr_eq(&e.listener, listener));
            if entries.is_empty() {
                self.named.remove(event);
            }
        }
    }

    /// Removes a single registration by id. No-op if the id is already gone.
    pub(crate) fn remove_id(&mut self, slot: Slot<'_>, id: u64) {
        match slot {
            Slot::Wildcard => self.wildcard.retain(|e| e.id != id),
            Slot::Named(event) => {
                if let Some(entries) = self.named.get_mut(event) {
                    entries.retain(|e| e.id != id);
                    if entries.is_empty() {
                        self.named.remove(event);
                    }
                }
            }
        }
    }

    /// Whether the registration is still live (not removed since snapshot).
    pub(crate) fn contains_id(&self, slot: Slot<'_>, id: u64) -> bool {
        match slot {
            Slot::Wildcard => self.wildcard.iter().any(|e| e.id == id),
            Slot::Named(event) => self
                .named
                .get(event)
                .is_some_and(|entries| entries.iter().any(|e| e.id == id)),
        }
    }

    /// Snapshot of the named entries for `event`, in insertion order.
    ///
    /// `None` when the key does not exist (which, by the pruning invariant,
    /// is the same as "zero named listeners").
    pub(crate) fn snapshot_named(&self, event: &str) -> Option<Vec<Entry>> {
        self.named.get(event).cloned()
    }

    /// Snapshot of the wildcard entries, in insertion order.
    pub(crate) fn snapshot_wildcard(&self) -> Vec<Entry> {
        self.wildcard.clone()
    }

    pub(crate) fn wildcard_is_empty(&self) -> bool {
        self.wildcard.is_empty()
    }

    /// Number of registrations for `event` (`"*"` counts the wildcard list).
    pub(crate) fn count(&self, event: &str) -> usize {
        if event == crate::events::WILDCARD {
            self.wildcard.len()
        } else {
            self.named.get(event).map_or(0, Vec::len)
        }
    }

    /// Drops every registration, named and wildcard.
    pub(crate) fn clear(&mut self) {
        self.named.clear();
        self.wildcard.clear();
    }
}
