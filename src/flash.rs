//! One-shot notices carried across a redirect.
//!
//! A notice is stored per user, read once by the next page render, and
//! dropped automatically when nobody picks it up within the ttl.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::notify::Notice;
use crate::timer::DismissTimer;

struct Entry {
    notice: Notice,
    generation: u64,
    _expiry: DismissTimer,
}

#[derive(Default)]
struct Inner {
    entries: HashMap<String, Entry>,
    next_generation: u64,
}

#[derive(Clone)]
pub struct FlashStore {
    inner: Arc<Mutex<Inner>>,
    ttl: Duration,
}

impl FlashStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            ttl,
        }
    }

    fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
        // The map stays consistent even if a holder panicked.
        inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Store a notice for `key`, replacing (and cancelling the expiry of)
    /// any notice already waiting.
    pub fn push(&self, key: &str, notice: Notice) {
        let mut guard = Self::lock(&self.inner);
        let generation = guard.next_generation;
        guard.next_generation += 1;

        let mut expiry = DismissTimer::idle();
        let weak = Arc::downgrade(&self.inner);
        let owner = key.to_string();
        expiry.arm(self.ttl, move || async move {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let mut guard = Self::lock(&inner);
            if guard
                .entries
                .get(&owner)
                .is_some_and(|e| e.generation == generation)
            {
                tracing::debug!("Flash notice for {} expired", owner);
                guard.entries.remove(&owner);
            }
        });

        guard.entries.insert(
            key.to_string(),
            Entry {
                notice,
                generation,
                _expiry: expiry,
            },
        );
    }

    /// Remove and return the waiting notice, if any.
    pub fn take(&self, key: &str) -> Option<Notice> {
        let entry = Self::lock(&self.inner).entries.remove(key);
        entry.map(|e| e.notice)
    }

    pub fn len(&self) -> usize {
        Self::lock(&self.inner).entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
