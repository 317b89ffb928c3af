use leptos::prelude::*;

use crate::routes::router::RouterContext;

/// Sub-view tab strip for a view family. Tab clicks are ordinary
/// navigations, so the URL fragment always names the visible sub-view.
#[component]
pub fn PageTabs(
    /// Route prefix of the family, e.g. "billing"
    family: &'static str,
    /// (sub-view id, label) pairs in display order
    tabs: Vec<(&'static str, &'static str)>,
    /// Currently active sub-view id
    #[prop(into)]
    active: String,
) -> impl IntoView {
    let router = use_context::<RouterContext>().expect("RouterContext not found");

    view! {
        <nav class="page-tabs">
            {tabs
                .into_iter()
                .map(|(id, label)| {
                    let is_active = active == id;
                    view! {
                        <button
                            class="page-tabs__tab"
                            class:page-tabs__tab--active=is_active
                            on:click=move |_| router.navigate(&format!("{}/{}", family, id))
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
