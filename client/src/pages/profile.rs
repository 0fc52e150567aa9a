//! Profile page: view and edit the saved profile, log out, delete account.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use prefs::session::Landing;
use prefs::wizard::{ProfileDraft, ProfileWizard, WizardError};
use prefs::{Language, PreferenceState, SoilType, UserProfile, UserRole, WaterSource};

use crate::components::storage_banner::StorageBanner;
use crate::pages::profile_setup::{TextInput, choice, text_input};
use crate::state::preferences::Preferences;
use crate::util::auth::{install_pending_redirect, install_unauth_redirect};

/// Label/value pairs for the read-only view.
fn profile_rows(profile: &UserProfile) -> Vec<(&'static str, String)> {
    vec![
        ("Name", profile.name.clone()),
        ("Role", profile.role.label().to_owned()),
        ("Phone", profile.phone.clone().unwrap_or_default()),
        ("Email", profile.email.clone().unwrap_or_default()),
        ("Location", profile.location().to_string()),
        ("Farm Size", profile.farm_size_acres.to_string()),
        ("Soil Type", profile.soil_type.label().to_owned()),
        ("Water Source", profile.water_source.label().to_owned()),
        ("Main Crop", profile.main_crop.clone().unwrap_or_default()),
        ("Language", profile.language.label().to_owned()),
        ("Notifications", if profile.notifications_enabled { "On" } else { "Off" }.to_owned()),
    ]
}

/// Editable draft seeded from the saved profile.
fn draft_from_profile(profile: &UserProfile) -> ProfileDraft {
    ProfileDraft {
        name: profile.name.clone(),
        phone: profile.phone.clone().unwrap_or_default(),
        email: profile.email.clone().unwrap_or_default(),
        role: profile.role,
        location: Some(profile.location()),
        farm_size: profile.farm_size_acres.as_str().to_owned(),
        soil_type: profile.soil_type,
        water_source: profile.water_source,
        main_crop: profile.main_crop.clone().unwrap_or_default(),
        language: profile.language,
        notifications_enabled: profile.notifications_enabled,
    }
}

fn edited_profile(draft: ProfileDraft) -> Result<UserProfile, WizardError> {
    let mut wizard = ProfileWizard::new();
    *wizard.draft_mut() = draft;
    wizard.build_edit()
}

fn confirm_delete() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete your account and all saved data?").ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        true
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let prefs = expect_context::<Preferences>();
    let navigate = use_navigate();
    install_unauth_redirect(prefs, navigate.clone());
    let redirect = RwSignal::new(None::<&'static str>);
    install_pending_redirect(redirect, navigate);

    Effect::new(move || {
        if prefs.logged_in.get() && !prefs.profile.with(PreferenceState::is_loaded) {
            redirect.set(Some(Landing::ProfileSetup.path()));
        }
    });

    let editing = RwSignal::new(false);
    let draft = RwSignal::new(ProfileWizard::new());
    let error = RwSignal::new(None::<String>);

    let on_edit = move |_: leptos::ev::MouseEvent| {
        let Some(profile) = prefs.profile.get_untracked().into_option() else {
            return;
        };
        draft.update(|w| *w.draft_mut() = draft_from_profile(&profile));
        error.set(None);
        editing.set(true);
    };

    let on_save = move |_: leptos::ev::MouseEvent| match edited_profile(draft.with_untracked(|w| w.draft().clone())) {
        Ok(profile) => {
            prefs.set_profile(profile);
            error.set(None);
            editing.set(false);
        }
        Err(err) => error.set(Some(err.to_string())),
    };

    let on_logout = move |_: leptos::ev::MouseEvent| {
        prefs.logout();
        redirect.set(Some(Landing::Login.path()));
    };

    let on_delete = move |_: leptos::ev::MouseEvent| {
        if confirm_delete() {
            prefs.delete_account();
            redirect.set(Some(Landing::Login.path()));
        }
    };

    view! {
        <div class="page">
            <StorageBanner/>
            <div class="card">
                <h1>"My Profile"</h1>
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <dl>
                                {move || {
                                    prefs
                                        .profile
                                        .with(|p| p.as_option().map(profile_rows))
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                        .collect_view()
                                }}
                            </dl>
                            <button class="button" on:click=on_edit>"Edit Profile"</button>
                        }
                    }
                >
                    {text_input(draft, TextInput::Name)}
                    {text_input(draft, TextInput::Phone)}
                    {text_input(draft, TextInput::Email)}
                    {choice("Role", &UserRole::ALL, UserRole::label, draft, |d| d.role, |d, v| d.role = v)}
                    {text_input(draft, TextInput::FarmSize)}
                    {choice("Soil Type", &SoilType::ALL, SoilType::label, draft, |d| d.soil_type, |d, v| d.soil_type = v)}
                    {choice(
                        "Water Source",
                        &WaterSource::ALL,
                        WaterSource::label,
                        draft,
                        |d| d.water_source,
                        |d, v| d.water_source = v,
                    )}
                    {text_input(draft, TextInput::MainCrop)}
                    {choice("Language", &Language::ALL, Language::label, draft, |d| d.language, |d, v| d.language = v)}
                    <Show when=move || error.get().is_some()>
                        <p class="message message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="button" on:click=on_save>"Save Changes"</button>
                    " "
                    <button class="button button--secondary" on:click=move |_| editing.set(false)>"Cancel"</button>
                </Show>
            </div>
            <div class="card">
                <a class="button button--secondary" href="/location-selector">"Change Location"</a>
                " "
                <button class="button button--secondary" on:click=on_logout>"Logout"</button>
                " "
                <button class="button button--danger" on:click=on_delete>"Delete Account"</button>
            </div>
        </div>
    }
}
