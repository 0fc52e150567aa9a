//! By-product utilization: find companies near the farm that can use what
//! a crop leaves behind.
//!
//! SYSTEM CONTEXT
//! ==============
//! The district defaults to the selected location's subregion and can be
//! overridden in the form. The search goes to the opportunity service
//! through `net::api`; the answer is either a list of companies or a notice.

#[cfg(test)]
#[path = "byproducts_test.rs"]
mod byproducts_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use prefs::opportunity::{Opportunity, OpportunityRequest, OpportunityResponse};
use prefs::{LocationPreference, PreferenceState};

use crate::net::api::find_opportunities;
use crate::state::preferences::Preferences;
use crate::util::auth::install_unauth_redirect;

pub const CROP_OPTIONS: &[&str] = &[
    "Tur", "Gram", "Rice", "Wheat", "Maize", "Jowar", "Bajra", "Groundnut", "Soybean", "Sugarcane", "Cotton", "Jute",
];

fn default_district(location: &PreferenceState<LocationPreference>) -> String {
    location.as_option().map(|l| l.subregion.clone()).unwrap_or_default()
}

/// Request for the form values, or the message to show instead.
fn search_request(crop: &str, district: &str) -> Result<OpportunityRequest, &'static str> {
    let district = district.trim();
    if crop.is_empty() {
        return Err("Please choose a crop");
    }
    if district.is_empty() {
        return Err("Please enter your district");
    }
    Ok(OpportunityRequest::new(crop, district))
}

fn rating_line(opportunity: &Opportunity) -> String {
    format!("{:.1} km away, rated {:.1}", opportunity.distance, opportunity.rating)
}

#[derive(Clone, Debug)]
enum SearchState {
    Idle,
    Searching,
    Done(OpportunityResponse),
    Failed(String),
}

#[component]
pub fn ByproductsPage() -> impl IntoView {
    let prefs = expect_context::<Preferences>();
    install_unauth_redirect(prefs, use_navigate());

    let crop = RwSignal::new(CROP_OPTIONS[0].to_owned());
    let district = RwSignal::new(prefs.location.with_untracked(default_district));
    let search = RwSignal::new(SearchState::Idle);
    let form_error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match search_request(&crop.get_untracked(), &district.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        form_error.set(None);
        search.set(SearchState::Searching);
        spawn_local(async move {
            let next = match find_opportunities(&request).await {
                Ok(response) => SearchState::Done(response),
                Err(err) => SearchState::Failed(err),
            };
            search.set(next);
        });
    };

    let results = move || match search.get() {
        SearchState::Idle => ().into_any(),
        SearchState::Searching => view! { <p>"Searching..."</p> }.into_any(),
        SearchState::Failed(err) => view! { <p class="message message--error">{err}</p> }.into_any(),
        SearchState::Done(response) => match response.notice() {
            Some(notice) => view! { <p class="message">{notice.to_owned()}</p> }.into_any(),
            None => response
                .recommendations()
                .iter()
                .map(|company| {
                    view! {
                        <div class="card">
                            <h2>{company.company_name.clone()}</h2>
                            <p>{company.address.clone()}</p>
                            <p>{format!("{} ({})", company.domain, company.status)}</p>
                            <p>{rating_line(company)}</p>
                        </div>
                    }
                })
                .collect_view()
                .into_any(),
        },
    };

    view! {
        <div class="page">
            <div class="card">
                <h1>"By-product Utilization"</h1>
                <form on:submit=on_submit>
                    <label class="field">
                        <span>"Crop"</span>
                        <select on:change=move |ev| crop.set(event_target_value(&ev))>
                            {CROP_OPTIONS
                                .iter()
                                .map(|name| {
                                    view! {
                                        <option value=*name prop:selected=move || crop.with(|c| c.as_str() == *name)>
                                            {*name}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="field">
                        <span>"District"</span>
                        <input
                            type="text"
                            prop:value=move || district.get()
                            on:input=move |ev| district.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || form_error.get().is_some()>
                        <p class="message message--error">{move || form_error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="button" type="submit" disabled=move || search.with(|s| matches!(s, SearchState::Searching))>
                        "Find Companies"
                    </button>
                </form>
            </div>
            {results}
        </div>
    }
}
