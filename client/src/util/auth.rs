//! Route guard for pages behind login.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page installs the same redirect so a visitor without the
//! session flag always lands on `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use prefs::session::Landing;

use crate::state::preferences::Preferences;

/// Redirect target for a protected page, if the visitor must leave it.
pub fn unauth_redirect(logged_in: bool) -> Option<&'static str> {
    (!logged_in).then(|| Landing::Login.path())
}

/// Redirect to `/login` whenever the session flag is absent.
pub fn install_unauth_redirect<F>(prefs: Preferences, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = unauth_redirect(prefs.logged_in.get()) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Navigate to whatever path handlers drop into `target`.
///
/// Handlers inside `Show` and reactive children must stay `Send`, so they set
/// this signal instead of holding the router's navigate function.
pub fn install_pending_redirect<F>(target: RwSignal<Option<&'static str>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = target.get() {
            target.set(None);
            navigate(path, NavigateOptions::default());
        }
    });
}
