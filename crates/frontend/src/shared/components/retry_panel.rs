use leptos::prelude::*;

use crate::shared::icons::icon;

/// Generic failed-load panel: the error text plus a retry button. Every
/// data screen degrades to this instead of an error page.
#[component]
pub fn RetryPanel(
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="retry-panel">
            {icon("alert-triangle")}
            <p class="retry-panel__message">{message}</p>
            <button class="retry-panel__button" on:click=move |_| on_retry.run(())>
                {icon("refresh-cw")}
                "Try again"
            </button>
        </div>
    }
}
