//! Reactive provider: the single source of truth for one preference.
//!
//! DESIGN
//! ======
//! A provider is constructed explicitly with [`PreferenceProvider::mount`],
//! which reads the backing store exactly once, and is then handed to
//! consumers by reference. Its state is either `Empty` or `Loaded`:
//!
//! - mount: decoded value -> `Loaded`; absent key -> `Empty`; undecodable
//!   value -> `Empty` and the corrupt key is removed so later mounts do not
//!   trip over the same text.
//! - `set_value`: write-through, then `Loaded(record)`.
//! - `clear`: remove the key, then `Empty`.
//!
//! Every mutation updates the store and notifies all listeners before it
//! returns, so any consumer reading after a mutation sees the new value.
//!
//! ERROR HANDLING
//! ==============
//! There is no error state. A failed write still moves the provider to
//! `Loaded` (the session continues on the in-memory value) and the failure
//! is returned to the caller, who may ignore it or warn the user.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use tracing::{debug, warn};

use crate::codec::{Record, decode, encode};
use crate::records::LocationPreference;
use crate::store::{BackingStore, StorageWriteFailure};

/// Current value of a preference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PreferenceState<T> {
    #[default]
    Empty,
    Loaded(T),
}

impl<T> PreferenceState<T> {
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    #[must_use]
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Loaded(value) => Some(value),
        }
    }

    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Empty => None,
            Self::Loaded(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for PreferenceState<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Self::Loaded)
    }
}

impl PreferenceState<LocationPreference> {
    /// Region key a page should use to pick its table row, falling back to
    /// `fallback` when no location is selected.
    #[must_use]
    pub fn region_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.as_option().map_or(fallback, |location| location.region.as_str())
    }
}

/// Read and decode `T` from `store`.
///
/// An undecodable value is removed from the store and reported as `Empty`.
pub fn load<T: Record>(store: &impl BackingStore) -> PreferenceState<T> {
    let Some(raw) = store.get(T::KEY) else {
        return PreferenceState::Empty;
    };
    match decode::<T>(&raw) {
        Ok(value) => PreferenceState::Loaded(value),
        Err(e) => {
            warn!(key = T::KEY, error = %e, "discarding undecodable preference");
            store.remove(T::KEY);
            PreferenceState::Empty
        }
    }
}

/// Handle returned by [`PreferenceProvider::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn Fn(&PreferenceState<T>)>;

/// Owns one preference's state and keeps it in sync with a backing store.
pub struct PreferenceProvider<T: Record, S: BackingStore> {
    store: S,
    state: PreferenceState<T>,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
    next_subscription: u64,
}

impl<T: Record, S: BackingStore> PreferenceProvider<T, S> {
    /// Build a provider and load its initial state from `store`.
    pub fn mount(store: S) -> Self {
        let state = load::<T>(&store);
        debug!(key = T::KEY, loaded = state.is_loaded(), "preference mounted");
        Self { store, state, listeners: Vec::new(), next_subscription: 0 }
    }

    /// Current state.
    #[must_use]
    pub fn get(&self) -> &PreferenceState<T> {
        &self.state
    }

    /// Current value, if loaded.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.state.as_option()
    }

    /// Store `record` and make it the current value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageWriteFailure`] when the store did not persist the
    /// value. The provider is `Loaded(record)` either way.
    pub fn set_value(&mut self, record: T) -> Result<(), StorageWriteFailure> {
        let written = self.store.set(T::KEY, &encode(&record));
        if let Err(e) = &written {
            warn!(key = T::KEY, error = %e, "preference kept in memory only");
        }
        self.state = PreferenceState::Loaded(record);
        self.notify();
        written
    }

    /// Remove the value from the store and the provider.
    pub fn clear(&mut self) {
        self.store.remove(T::KEY);
        if !self.state.is_loaded() {
            return;
        }
        self.state = PreferenceState::Empty;
        self.notify();
    }

    /// Register `listener` to run after every state change.
    pub fn subscribe(&mut self, listener: impl Fn(&PreferenceState<T>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// The backing store this provider writes to.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }
}

impl<T: Record + std::fmt::Debug, S: BackingStore> std::fmt::Debug for PreferenceProvider<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceProvider")
            .field("key", &T::KEY)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
