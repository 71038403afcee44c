//! Root composer: the panel board or the configuration view, never both.

use leptos::prelude::*;

use crate::pages::config::ConfigPage;
use crate::pages::panels::PanelsPage;
use crate::state::config;

/// Root application component.
///
/// Loads the persisted configuration, provides it as context, and toggles
/// between the panel board and the configuration page. Panels remount and
/// refetch when the board comes back into view.
#[component]
pub fn App() -> impl IntoView {
    let config = RwSignal::new(config::load());
    provide_context(config);

    let show_config = RwSignal::new(false);

    view! {
        <div>
            <h1>"Free-Dispatcher UI"</h1>
            <button on:click=move |_| show_config.update(|v| *v = !*v)>
                {move || if show_config.get() { "Back to App" } else { "Configuration" }}
            </button>
            <Show when=move || show_config.get() fallback=|| view! { <PanelsPage/> }>
                <ConfigPage/>
            </Show>
        </div>
    }
}
