//! Four-step profile setup wizard.
//!
//! SYSTEM CONTEXT
//! ==============
//! New accounts land here after signup. The wizard state lives in a signal;
//! only the final step writes through `Preferences`, which stores both the
//! profile and the location it names.

#[cfg(test)]
#[path = "profile_setup_test.rs"]
mod profile_setup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use prefs::catalog::{LocationCatalog, parse_location};
use prefs::session::Landing;
use prefs::wizard::{Advance, ProfileDraft, ProfileWizard, WizardError, WizardStep};
use prefs::{Language, SoilType, UserRole, WaterSource};

use crate::components::storage_banner::StorageBanner;
use crate::state::preferences::Preferences;
use crate::util::auth::{install_pending_redirect, install_unauth_redirect};

/// Free-text inputs bound to a draft field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TextInput {
    Name,
    Phone,
    Email,
    FarmSize,
    MainCrop,
}

impl TextInput {
    fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Phone => "Phone Number",
            Self::Email => "Email",
            Self::FarmSize => "Farm Size (acres)",
            Self::MainCrop => "Main Crop",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            Self::Phone => "tel",
            Self::Email => "email",
            Self::FarmSize => "number",
            Self::Name | Self::MainCrop => "text",
        }
    }

    fn value(self, draft: &ProfileDraft) -> &str {
        match self {
            Self::Name => &draft.name,
            Self::Phone => &draft.phone,
            Self::Email => &draft.email,
            Self::FarmSize => &draft.farm_size,
            Self::MainCrop => &draft.main_crop,
        }
    }

    fn slot(self, draft: &mut ProfileDraft) -> &mut String {
        match self {
            Self::Name => &mut draft.name,
            Self::Phone => &mut draft.phone,
            Self::Email => &mut draft.email,
            Self::FarmSize => &mut draft.farm_size,
            Self::MainCrop => &mut draft.main_crop,
        }
    }
}

fn next_label(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Preferences => "Complete Setup",
        _ => "Next",
    }
}

/// Page message for a failed finish, or `None` when the user may move on.
fn finish_message(err: &WizardError) -> Option<String> {
    match err {
        WizardError::Storage(_) => None,
        other => Some(other.to_string()),
    }
}

pub(crate) fn text_input(wizard: RwSignal<ProfileWizard>, input: TextInput) -> impl IntoView {
    view! {
        <label class="field">
            <span>{input.label()}</span>
            <input
                type=input.input_type()
                prop:value=move || wizard.with(|w| input.value(w.draft()).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| *input.slot(w.draft_mut()) = value);
                }
            />
        </label>
    }
}

pub(crate) fn choice<T>(
    label: &'static str,
    options: &'static [T],
    name: fn(T) -> &'static str,
    wizard: RwSignal<ProfileWizard>,
    get: fn(&ProfileDraft) -> T,
    set: fn(&mut ProfileDraft, T),
) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <label class="field">
            <span>{label}</span>
            <select on:change=move |ev| {
                let picked = event_target_value(&ev).parse::<usize>().ok().and_then(|i| options.get(i).copied());
                if let Some(value) = picked {
                    wizard.update(|w| set(w.draft_mut(), value));
                }
            }>
                {options
                    .iter()
                    .enumerate()
                    .map(|(index, option)| {
                        let option = *option;
                        view! {
                            <option
                                value=index.to_string()
                                prop:selected=move || wizard.with(|w| get(w.draft()) == option)
                            >
                                {name(option)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

fn location_choice(wizard: RwSignal<ProfileWizard>, catalog: StoredValue<LocationCatalog>) -> impl IntoView {
    view! {
        <label class="field">
            <span>"District"</span>
            <select on:change=move |ev| {
                let location = parse_location(&event_target_value(&ev));
                wizard.update(|w| w.draft_mut().location = location);
            }>
                <option value="" prop:selected=move || wizard.with(|w| w.draft().location.is_none())>
                    "Select your district"
                </option>
                {catalog
                    .with_value(|c| c.entries().to_vec())
                    .into_iter()
                    .map(|entry| {
                        let current = entry.clone();
                        let value = entry.clone();
                        view! {
                            <option
                                value=value
                                prop:selected=move || {
                                    wizard.with(|w| w.draft().location == parse_location(&current))
                                }
                            >
                                {entry}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

fn step_fields(
    step: WizardStep,
    wizard: RwSignal<ProfileWizard>,
    catalog: StoredValue<LocationCatalog>,
) -> AnyView {
    match step {
        WizardStep::Personal => view! {
            {text_input(wizard, TextInput::Name)}
            {text_input(wizard, TextInput::Phone)}
            {text_input(wizard, TextInput::Email)}
            {choice("I am a", &UserRole::ALL, UserRole::label, wizard, |d| d.role, |d, v| d.role = v)}
        }
        .into_any(),
        WizardStep::Location => view! {
            {location_choice(wizard, catalog)}
        }
        .into_any(),
        WizardStep::Farm => view! {
            {text_input(wizard, TextInput::FarmSize)}
            {choice("Soil Type", &SoilType::ALL, SoilType::label, wizard, |d| d.soil_type, |d, v| d.soil_type = v)}
            {choice(
                "Water Source",
                &WaterSource::ALL,
                WaterSource::label,
                wizard,
                |d| d.water_source,
                |d, v| d.water_source = v,
            )}
            {text_input(wizard, TextInput::MainCrop)}
        }
        .into_any(),
        WizardStep::Preferences => view! {
            {choice("Language", &Language::ALL, Language::label, wizard, |d| d.language, |d, v| d.language = v)}
            <label class="field">
                <span>"Notifications"</span>
                <input
                    type="checkbox"
                    prop:checked=move || wizard.with(|w| w.draft().notifications_enabled)
                    on:change=move |ev| {
                        let enabled = event_target_checked(&ev);
                        wizard.update(|w| w.draft_mut().notifications_enabled = enabled);
                    }
                />
            </label>
        }
        .into_any(),
    }
}

#[component]
pub fn ProfileSetupPage() -> impl IntoView {
    let prefs = expect_context::<Preferences>();
    let navigate = use_navigate();
    install_unauth_redirect(prefs, navigate.clone());
    let redirect = RwSignal::new(None::<&'static str>);
    install_pending_redirect(redirect, navigate);

    let mut initial = prefs.signup_draft().map_or_else(ProfileWizard::new, |signup| ProfileWizard::prefilled(&signup));
    initial.draft_mut().location = prefs.location.get_untracked().into_option();
    let wizard = RwSignal::new(initial);
    let error = RwSignal::new(None::<String>);
    let catalog = StoredValue::new(LocationCatalog::bundled());

    let on_next = move |_: leptos::ev::MouseEvent| {
        let Some(advanced) = wizard.try_update(ProfileWizard::advance) else {
            return;
        };
        match advanced {
            Ok(Advance::Moved(_)) => error.set(None),
            Ok(Advance::Complete) => match prefs.finish_wizard(&wizard.get_untracked()) {
                Ok(_) => redirect.set(Some(Landing::Dashboard.path())),
                Err(err) => match finish_message(&err) {
                    Some(message) => error.set(Some(message)),
                    None => redirect.set(Some(Landing::Dashboard.path())),
                },
            },
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    let on_back = move |_: leptos::ev::MouseEvent| {
        wizard.update(|w| {
            w.back();
        });
        error.set(None);
    };

    view! {
        <div class="page">
            <StorageBanner/>
            <div class="card">
                <h1>"Complete Your Profile"</h1>
                <p>
                    {move || {
                        let step = wizard.with(ProfileWizard::step);
                        format!("Step {} of {}: {}", step.number(), WizardStep::COUNT, step.title())
                    }}
                </p>
                <div class="progress">
                    <div
                        class="progress__bar"
                        style=move || format!("width: {}%", wizard.with(ProfileWizard::progress_percent))
                    ></div>
                </div>
                {move || step_fields(wizard.with(ProfileWizard::step), wizard, catalog)}
                <Show when=move || error.get().is_some()>
                    <p class="message message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div>
                    <button
                        class="button button--secondary"
                        disabled=move || wizard.with(|w| w.step() == WizardStep::Personal)
                        on:click=on_back
                    >
                        "Back"
                    </button>
                    " "
                    <button class="button" on:click=on_next>
                        {move || next_label(wizard.with(ProfileWizard::step))}
                    </button>
                </div>
            </div>
        </div>
    }
}
