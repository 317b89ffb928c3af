use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::storage;

/// Banner shown while demo mode is active. Dismissal is persisted, so the
/// banner stays hidden across reloads.
#[component]
pub fn DemoBanner() -> impl IntoView {
    let (hidden, set_hidden) = signal(storage::demo_banner_hidden());
    let visible = move || storage::demo_mode_enabled() && !hidden.get();

    let dismiss = move |_| {
        storage::set_demo_banner_hidden(true);
        set_hidden.set(true);
    };

    view! {
        <Show when=visible>
            <div class="demo-banner">
                {icon("info")}
                <span>"Demo mode — all data on this page is simulated."</span>
                <button class="demo-banner__dismiss" on:click=dismiss>
                    {icon("x")}
                </button>
            </div>
        </Show>
    }
}
