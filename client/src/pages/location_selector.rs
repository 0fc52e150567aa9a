//! Location picker: search the bundled district list and save one entry.

#[cfg(test)]
#[path = "location_selector_test.rs"]
mod location_selector_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use prefs::LocationPreference;
use prefs::catalog::{LocationCatalog, parse_location};
use prefs::session::Landing;

use crate::components::storage_banner::StorageBanner;
use crate::state::preferences::Preferences;
use crate::util::auth::{install_pending_redirect, install_unauth_redirect};

/// Owned `(region, entries)` groups for rendering.
fn matching_groups(catalog: &LocationCatalog, query: &str) -> Vec<(String, Vec<String>)> {
    catalog
        .grouped(query)
        .into_iter()
        .map(|group| (group.region, group.entries.into_iter().map(str::to_owned).collect()))
        .collect()
}

/// The catalog entry a saved location was picked from.
fn catalog_entry(location: &LocationPreference) -> String {
    format!("{}, {}", location.subregion, location.region)
}

#[component]
pub fn LocationSelectorPage() -> impl IntoView {
    let prefs = expect_context::<Preferences>();
    let navigate = use_navigate();
    install_unauth_redirect(prefs, navigate.clone());
    let redirect = RwSignal::new(None::<&'static str>);
    install_pending_redirect(redirect, navigate);

    let catalog = StoredValue::new(LocationCatalog::bundled());
    let query = RwSignal::new(String::new());
    let selected = RwSignal::new(prefs.location.get_untracked().as_option().map(catalog_entry));

    let on_confirm = move |_: leptos::ev::MouseEvent| {
        let Some(location) = selected.get().as_deref().and_then(parse_location) else {
            return;
        };
        prefs.set_location(location);
        redirect.set(Some(Landing::Dashboard.path()));
    };

    let on_clear = move |_: leptos::ev::MouseEvent| {
        prefs.clear_location();
        selected.set(None);
    };

    view! {
        <div class="page">
            <StorageBanner/>
            <div class="card">
                <h1>"Select Your Location"</h1>
                <p>"Choose your district to get advice for your area."</p>
                <label class="field">
                    <input
                        type="search"
                        placeholder="Search district or state"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    let groups = catalog.with_value(|c| matching_groups(c, &query.get()));
                    if groups.is_empty() {
                        return view! { <p class="message">"No locations match your search."</p> }.into_any();
                    }
                    groups
                        .into_iter()
                        .map(|(region, entries)| {
                            view! {
                                <div class="region-group">
                                    <h3>{region}</h3>
                                    {entries
                                        .into_iter()
                                        .map(|entry| {
                                            let pick = entry.clone();
                                            let current = entry.clone();
                                            view! {
                                                <button
                                                    class=move || {
                                                        if selected.get().as_deref() == Some(current.as_str()) {
                                                            "location-option location-option--selected"
                                                        } else {
                                                            "location-option"
                                                        }
                                                    }
                                                    on:click=move |_| selected.set(Some(pick.clone()))
                                                >
                                                    {entry}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
                <button class="button" disabled=move || selected.get().is_none() on:click=on_confirm>
                    "Continue to Dashboard"
                </button>
                <Show when=move || prefs.location.get().is_loaded()>
                    " "
                    <button class="button button--secondary" on:click=on_clear>
                        "Clear Saved Location"
                    </button>
                </Show>
            </div>
        </div>
    }
}
