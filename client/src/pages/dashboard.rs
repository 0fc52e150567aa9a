//! Dashboard: greeting, selected location, and links to the tools.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route for a set-up account. Visitors without a
//! profile are sent to the wizard; those without a location to the picker.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use prefs::session::Landing;
use prefs::{LocationPreference, PreferenceState, UserProfile};

use crate::components::storage_banner::StorageBanner;
use crate::state::preferences::Preferences;
use crate::util::auth::install_unauth_redirect;

/// Where the dashboard sends a visitor who is not fully set up.
fn dashboard_redirect(
    profile: &PreferenceState<UserProfile>,
    location: &PreferenceState<LocationPreference>,
) -> Option<&'static str> {
    if !profile.is_loaded() {
        return Some(Landing::ProfileSetup.path());
    }
    if !location.is_loaded() {
        return Some("/location-selector");
    }
    None
}

fn location_line(location: &PreferenceState<LocationPreference>) -> String {
    location.as_option().map_or_else(|| "Location not set".to_owned(), ToString::to_string)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let prefs = expect_context::<Preferences>();
    let navigate = use_navigate();
    install_unauth_redirect(prefs, navigate.clone());

    Effect::new(move || {
        if !prefs.logged_in.get() {
            return;
        }
        let target = prefs.profile.with(|profile| prefs.location.with(|location| dashboard_redirect(profile, location)));
        if let Some(path) = target {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let greeting = move || {
        prefs
            .profile
            .with(|p| p.as_option().map(|profile| format!("Welcome back, {}", profile.name)))
            .unwrap_or_else(|| "Welcome".to_owned())
    };

    view! {
        <div class="page">
            <StorageBanner/>
            <div class="card">
                <h1>{greeting}</h1>
                <p>{move || prefs.location.with(location_line)}</p>
                <a class="button button--secondary" href="/location-selector">"Change Location"</a>
            </div>
            <div class="card">
                <h2>"Tools"</h2>
                <ul>
                    <li><a href="/crop-advisor">"Crop Advisor"</a></li>
                    <li><a href="/byproduct-utilization">"By-product Utilization"</a></li>
                    <li><a href="/profile">"My Profile"</a></li>
                </ul>
            </div>
        </div>
    }
}
