pub mod sidebar;

use crate::layout::context::UiContext;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ui = use_context::<UiContext>().expect("UiContext not found");
    let is_open = move || ui.sidebar_open.get();

    view! {
        <div data-zone="left" class="left" class:hidden=move || !is_open()>
            {children()}
        </div>
    }
}
