use leptos::prelude::*;

use crate::shared::icons::icon;

/// Placeholder rendered for every route without a finished view. Unmatched
/// navigation lands here instead of an error page.
#[component]
pub fn UnderConstruction(route: String) -> impl IntoView {
    view! {
        <div class="page page--placeholder">
            <div class="placeholder">
                {icon("tool")}
                <h2>"Under construction"</h2>
                <p>
                    "The page "
                    <code>{route}</code>
                    " is not available yet."
                </p>
            </div>
        </div>
    }
}
