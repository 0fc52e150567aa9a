//! Root application component with routing and the preference context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Redirect, Route, Router, Routes};

use crate::pages::{
    byproducts::ByproductsPage, crop_advisor::CropAdvisorPage, dashboard::DashboardPage,
    location_selector::LocationSelectorPage, login::LoginPage, profile::ProfilePage,
    profile_setup::ProfileSetupPage,
};
use crate::state::preferences::Preferences;

/// `/` sends the visitor to login, the wizard, or the dashboard.
#[component]
fn EntryRedirect() -> impl IntoView {
    let prefs = expect_context::<Preferences>();
    view! { <Redirect path=prefs.landing().path()/> }
}

/// Root application component.
///
/// Reads browser storage once, provides the [`Preferences`] context and sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Preferences::mount());

    view! {
        <Title text="Krishi"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=EntryRedirect/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("profile-setup") view=ProfileSetupPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("location-selector") view=LocationSelectorPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("crop-advisor") view=CropAdvisorPage/>
                <Route path=StaticSegment("byproduct-utilization") view=ByproductsPage/>
            </Routes>
        </Router>
    }
}
