//! Preference context: the `prefs` session mirrored into signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` mounts one [`Preferences`] and provides it as context. Pages read the
//! signal fields to render and call the methods to change anything; there is
//! no other path to browser storage.
//!
//! DESIGN
//! ======
//! The `Session` (store handle, location provider, profile provider) lives in
//! a local `StoredValue` because its listeners are not `Send`. A listener on
//! each provider copies every new state into an `RwSignal`, so a write made
//! through any page re-renders every page that reads the signal.
//!
//! ERROR HANDLING
//! ==============
//! A write that storage rejects still updates the signals. The failure is
//! logged and turned into a banner message in `storage_warning`.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use leptos::prelude::*;
use prefs::session::Landing;
use prefs::wizard::{ProfileWizard, WizardError};
use prefs::{LocationPreference, PreferenceState, Session, SignupDraft, StorageWriteFailure, UserProfile};

use crate::storage::BrowserStore;

pub type BrowserSession = Session<BrowserStore>;

/// Banner text for a rejected storage write.
pub fn storage_warning_text(failure: &StorageWriteFailure) -> String {
    match failure {
        StorageWriteFailure::Unavailable => {
            "Browser storage is turned off. Your changes last until this tab is closed.".to_owned()
        }
        StorageWriteFailure::QuotaExceeded { .. } => {
            "Browser storage is full. Your changes last until this tab is closed.".to_owned()
        }
        StorageWriteFailure::Io { .. } => format!("Your changes were not saved: {failure}"),
    }
}

#[derive(Clone, Copy)]
pub struct Preferences {
    session: StoredValue<BrowserSession, LocalStorage>,
    pub location: RwSignal<PreferenceState<LocationPreference>>,
    pub profile: RwSignal<PreferenceState<UserProfile>>,
    pub logged_in: RwSignal<bool>,
    pub storage_warning: RwSignal<Option<String>>,
}

impl Preferences {
    /// Read browser storage once and wire the providers to fresh signals.
    pub fn mount() -> Self {
        let mut session = Session::start(BrowserStore);
        let location = RwSignal::new(session.location().get().clone());
        let profile = RwSignal::new(session.profile().get().clone());
        let logged_in = RwSignal::new(session.is_logged_in());

        session.location_mut().subscribe(move |state| location.set(state.clone()));
        session.profile_mut().subscribe(move |state| profile.set(state.clone()));

        Self { session: StoredValue::new_local(session), location, profile, logged_in, storage_warning: RwSignal::new(None) }
    }

    fn with_session<U>(&self, f: impl FnOnce(&mut BrowserSession) -> U) -> Option<U> {
        self.session.try_update_value(f)
    }

    fn report(&self, written: Option<Result<(), StorageWriteFailure>>) {
        if let Some(Err(failure)) = written {
            #[cfg(feature = "csr")]
            log::warn!("preference write not persisted: {failure}");
            self.storage_warning.set(Some(storage_warning_text(&failure)));
        }
    }

    pub fn set_location(&self, location: LocationPreference) {
        let written = self.with_session(|s| s.location_mut().set_value(location));
        self.report(written);
    }

    pub fn clear_location(&self) {
        self.with_session(|s| s.location_mut().clear());
    }

    pub fn set_profile(&self, profile: UserProfile) {
        let written = self.with_session(|s| s.profile_mut().set_value(profile));
        self.report(written);
    }

    pub fn login(&self) {
        let written = self.with_session(|s| s.login());
        self.report(written);
        self.logged_in.set(true);
    }

    pub fn signup(&self, draft: &SignupDraft) {
        let written = self.with_session(|s| s.signup(draft));
        self.report(written);
        self.logged_in.set(true);
    }

    pub fn signup_draft(&self) -> Option<SignupDraft> {
        self.session.try_with_value(Session::signup_draft).flatten()
    }

    /// Save the wizard's profile and location.
    ///
    /// # Errors
    ///
    /// Validation errors leave storage untouched. A storage error still
    /// leaves both signals loaded and raises the banner.
    pub fn finish_wizard(&self, wizard: &ProfileWizard) -> Result<UserProfile, WizardError> {
        let finished = self
            .with_session(|s| wizard.finish(s))
            .unwrap_or(Err(WizardError::Storage(StorageWriteFailure::Unavailable)));
        if let Err(WizardError::Storage(failure)) = &finished {
            self.storage_warning.set(Some(storage_warning_text(failure)));
        }
        finished
    }

    /// Log out: drop the login flag and the profile. The location stays.
    pub fn logout(&self) {
        self.with_session(BrowserSession::logout);
        self.logged_in.set(false);
    }

    pub fn delete_account(&self) {
        self.with_session(BrowserSession::delete_account);
        self.logged_in.set(false);
        self.storage_warning.set(None);
    }

    /// Where a visitor arriving now should go.
    pub fn landing(&self) -> Landing {
        landing_for(self.logged_in.get_untracked(), &self.profile.get_untracked())
    }
}

/// Entry route for the given login flag and profile state.
pub fn landing_for(logged_in: bool, profile: &PreferenceState<UserProfile>) -> Landing {
    match (logged_in, profile) {
        (false, _) => Landing::Login,
        (true, PreferenceState::Empty) => Landing::ProfileSetup,
        (true, PreferenceState::Loaded(_)) => Landing::Dashboard,
    }
}
