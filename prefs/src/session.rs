//! Browser-session bundle: login flag plus the location and profile
//! providers, all over one shared backing store.
//!
//! SYSTEM CONTEXT
//! ==============
//! A `Session` is built once at start-up (`start` mounts both providers, one
//! store read each) and passed to whatever needs preferences. Teardown is
//! explicit: `logout` clears the profile and the login flag, while
//! `delete_account` wipes the whole store.
//!
//! The login flag is a bare marker (`isLoggedIn` = `"true"`); there is no
//! token and no expiry.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use tracing::info;

use crate::codec::{Record, encode};
use crate::provider::{PreferenceProvider, PreferenceState, load};
use crate::records::{LocationPreference, SignupDraft, UserProfile};
use crate::store::{BackingStore, StorageWriteFailure};

/// Store key holding the login marker.
pub const LOGGED_IN_KEY: &str = "isLoggedIn";
const LOGGED_IN_VALUE: &str = "true";

/// Where a guarded page should send the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landing {
    /// Not logged in.
    Login,
    /// Logged in without a completed profile.
    ProfileSetup,
    /// Logged in with a profile.
    Dashboard,
}

impl Landing {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::ProfileSetup => "/profile-setup",
            Self::Dashboard => "/dashboard",
        }
    }
}

/// Session state shared across pages.
pub struct Session<S: BackingStore + Clone> {
    store: S,
    location: PreferenceProvider<LocationPreference, S>,
    profile: PreferenceProvider<UserProfile, S>,
}

impl<S: BackingStore + Clone> Session<S> {
    /// Mount the location and profile providers over `store`.
    pub fn start(store: S) -> Self {
        let location = PreferenceProvider::mount(store.clone());
        let profile = PreferenceProvider::mount(store.clone());
        Self { store, location, profile }
    }

    #[must_use]
    pub fn location(&self) -> &PreferenceProvider<LocationPreference, S> {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut PreferenceProvider<LocationPreference, S> {
        &mut self.location
    }

    #[must_use]
    pub fn profile(&self) -> &PreferenceProvider<UserProfile, S> {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut PreferenceProvider<UserProfile, S> {
        &mut self.profile
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.store.get(LOGGED_IN_KEY).as_deref() == Some(LOGGED_IN_VALUE)
    }

    /// Mark the session as authenticated.
    ///
    /// # Errors
    ///
    /// Returns [`StorageWriteFailure`] if the flag was not persisted.
    pub fn login(&self) -> Result<(), StorageWriteFailure> {
        info!("session login");
        self.store.set(LOGGED_IN_KEY, LOGGED_IN_VALUE)
    }

    /// Log in and keep the signup contact details for the profile wizard.
    ///
    /// # Errors
    ///
    /// Returns [`StorageWriteFailure`] if either write was not persisted.
    pub fn signup(&self, draft: &SignupDraft) -> Result<(), StorageWriteFailure> {
        self.store.set(SignupDraft::KEY, &encode(draft))?;
        self.login()
    }

    /// Contact details captured at signup, if any.
    #[must_use]
    pub fn signup_draft(&self) -> Option<SignupDraft> {
        load::<SignupDraft>(&self.store).into_option()
    }

    /// Drop the signup draft once the profile exists.
    pub fn discard_signup_draft(&self) {
        self.store.remove(SignupDraft::KEY);
    }

    /// Clear the login flag and the profile. The selected location stays.
    pub fn logout(&mut self) {
        info!("session logout");
        self.store.remove(LOGGED_IN_KEY);
        self.profile.clear();
    }

    /// Remove every stored key and reset both providers.
    pub fn delete_account(&mut self) {
        info!("account deleted");
        self.store.clear();
        self.location.clear();
        self.profile.clear();
    }

    /// Route a visitor to the right entry page.
    #[must_use]
    pub fn landing(&self) -> Landing {
        if !self.is_logged_in() {
            return Landing::Login;
        }
        match self.profile.get() {
            PreferenceState::Empty => Landing::ProfileSetup,
            PreferenceState::Loaded(_) => Landing::Dashboard,
        }
    }

    /// The shared backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
