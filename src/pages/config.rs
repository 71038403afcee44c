//! Configuration page for the backend base URL.

use leptos::prelude::*;

use crate::state::config::{self, ConfigState};

/// Edit-and-save view for the configured base URL.
///
/// Saving persists the value and updates the shared context, which makes
/// every panel refetch against the new address the next time it is mounted.
#[component]
pub fn ConfigPage() -> impl IntoView {
    let config_ctx = expect_context::<RwSignal<ConfigState>>();

    let input = RwSignal::new(config_ctx.get_untracked().base_url);
    let saved = RwSignal::new(false);

    let on_save = move |_| {
        let base_url = input.get_untracked();
        config::save(&base_url);
        config_ctx.set(ConfigState { base_url });
        saved.set(true);
    };

    view! {
        <div class="config-page">
            <h2>"Configuration"</h2>
            <label>
                "API Base URL:"
                <input
                    type="text"
                    placeholder=config::DEFAULT_BASE_URL
                    prop:value=move || input.get()
                    on:input=move |ev| {
                        input.set(event_target_value(&ev));
                        saved.set(false);
                    }
                />
            </label>
            <button on:click=on_save>"Save"</button>
            {move || {
                saved
                    .get()
                    .then(|| view! { <p class="config-page__saved">"API URL saved!"</p> })
            }}
        </div>
    }
}
