//! Process-wide value registry with explicit lifetime control.
//!
//! A [`Registry`] maps numeric identifiers to shared, type-erased values.
//! Creation is explicit (`set`, or lazy through `get_or_init`) and so is
//! destruction (`remove`, `clear`); nothing is tied to static
//! initialization order. One process-wide instance, [`GLOBAL_REGISTRY`],
//! is provided for code that needs a single rendezvous point; everything
//! else should own its registry and pass it around.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lazy_static::lazy_static;

/// A stored value: shared, type-erased, and thread-safe.
pub type Entry = Arc<dyn Any + Send + Sync>;

#[derive(Default)]
pub struct Registry {
    entries: Mutex<HashMap<u64, Entry>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // Entries are replace-only, so a panic mid-update cannot leave a
    // half-written value behind; recover the map from a poisoned lock.
    fn lock(&self) -> MutexGuard<'_, HashMap<u64, Entry>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores `value` under `id`, returning the displaced entry if the
    /// id was already taken.
    pub fn set<T: Any + Send + Sync>(&self, id: u64, value: T) -> Option<Entry> {
        self.lock().insert(id, Arc::new(value))
    }

    /// Typed lookup. Returns `None` when the id is vacant or holds a
    /// value of another type.
    pub fn get<T: Any + Send + Sync>(&self, id: u64) -> Option<Arc<T>> {
        self.lock().get(&id).cloned()?.downcast::<T>().ok()
    }

    /// Returns the value under `id`, creating it with `init` if the id
    /// is vacant.
    ///
    /// The initializer runs without the registry lock held, so it may
    /// itself use the registry; if two threads race, the first value
    /// stored wins and the loser's is dropped.
    ///
    /// # Panics
    /// Panics if the id is occupied by a value of a different type.
    pub fn get_or_init<T, F>(&self, id: u64, init: F) -> Arc<T>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> T,
    {
        if let Some(existing) = self.typed_entry(id) {
            return existing;
        }
        let candidate = Arc::new(init());
        let mut entries = self.lock();
        let entry = entries
            .entry(id)
            .or_insert_with(|| candidate as Entry)
            .clone();
        drop(entries);
        match entry.downcast::<T>() {
            Ok(value) => value,
            Err(_) => panic!("registry id {id} holds a value of another type"),
        }
    }

    fn typed_entry<T: Any + Send + Sync>(&self, id: u64) -> Option<Arc<T>> {
        let entry = self.lock().get(&id).cloned()?;
        match entry.downcast::<T>() {
            Ok(value) => Some(value),
            Err(_) => panic!("registry id {id} holds a value of another type"),
        }
    }

    /// Removes the entry under `id`, returning its handle. Outstanding
    /// `Arc`s obtained through `get` stay alive; the registry merely
    /// stops handing the value out.
    pub fn remove(&self, id: u64) -> Option<Entry> {
        self.lock().remove(&id)
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

lazy_static! {
    /// The process-wide registry.
    pub static ref GLOBAL_REGISTRY: Registry = Registry::default();
}
