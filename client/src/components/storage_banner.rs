//! Dismissable banner shown after browser storage rejected a write.

use leptos::prelude::*;

use crate::state::preferences::Preferences;

#[component]
pub fn StorageBanner() -> impl IntoView {
    let prefs = expect_context::<Preferences>();

    view! {
        <Show when=move || prefs.storage_warning.get().is_some()>
            <div class="storage-warning" role="status">
                <span>{move || prefs.storage_warning.get().unwrap_or_default()}</span>
                " "
                <button class="button button--secondary" on:click=move |_| prefs.storage_warning.set(None)>
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
