//! Crop advisor: suggested crops for the selected region.
//!
//! The suggestions are a static table keyed by region. With no location
//! selected the page shows the [`DEFAULT_REGION`] row.

#[cfg(test)]
#[path = "crop_advisor_test.rs"]
mod crop_advisor_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::preferences::Preferences;
use crate::util::auth::install_unauth_redirect;

pub const DEFAULT_REGION: &str = "Maharashtra";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropSuggestion {
    pub name: &'static str,
    pub suitability: u8,
    pub yield_per_acre: &'static str,
    pub season: &'static str,
}

const MAHARASHTRA: &[CropSuggestion] = &[
    CropSuggestion { name: "Cotton", suitability: 85, yield_per_acre: "12-15 quintals", season: "Kharif" },
    CropSuggestion { name: "Tur (Pigeon Pea)", suitability: 72, yield_per_acre: "8-12 quintals", season: "Kharif" },
    CropSuggestion { name: "Soybean", suitability: 80, yield_per_acre: "10-12 quintals", season: "Kharif" },
];

const TELANGANA: &[CropSuggestion] = &[
    CropSuggestion { name: "Rice", suitability: 92, yield_per_acre: "22-28 quintals", season: "Kharif" },
    CropSuggestion { name: "Maize", suitability: 84, yield_per_acre: "25-30 quintals", season: "Rabi" },
    CropSuggestion { name: "Cotton", suitability: 78, yield_per_acre: "10-12 quintals", season: "Kharif" },
];

const MADHYA_PRADESH: &[CropSuggestion] = &[
    CropSuggestion { name: "Wheat", suitability: 88, yield_per_acre: "18-22 quintals", season: "Rabi" },
    CropSuggestion { name: "Soybean", suitability: 86, yield_per_acre: "8-10 quintals", season: "Kharif" },
    CropSuggestion { name: "Gram", suitability: 75, yield_per_acre: "6-8 quintals", season: "Rabi" },
];

/// Table row for `region`; regions without their own row share the default.
pub fn suggestions_for(region: &str) -> &'static [CropSuggestion] {
    match region {
        "Telangana" => TELANGANA,
        "Madhya Pradesh" => MADHYA_PRADESH,
        _ => MAHARASHTRA,
    }
}

#[component]
pub fn CropAdvisorPage() -> impl IntoView {
    let prefs = expect_context::<Preferences>();
    install_unauth_redirect(prefs, use_navigate());

    let region = move || prefs.location.with(|location| location.region_or(DEFAULT_REGION).to_owned());

    view! {
        <div class="page">
            <div class="card">
                <h1>"Crop Advisor"</h1>
                <p>{move || format!("Recommended crops for {}", region())}</p>
            </div>
            {move || {
                suggestions_for(&region())
                    .iter()
                    .map(|crop| {
                        view! {
                            <div class="card">
                                <h2>{crop.name}</h2>
                                <p>{format!("Suitability: {}%", crop.suitability)}</p>
                                <p>{format!("Expected yield: {} per acre", crop.yield_per_acre)}</p>
                                <p>{format!("Season: {}", crop.season)}</p>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
