//! Sidebar: role-specific navigation tree with collapsible sections.
//!
//! The tree itself is rebuilt from the active role on every render; which
//! sections are expanded persists across page loads (see
//! `navigation::expansion`).

use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::navigation::expansion::{self, ExpandedSections};
use crate::navigation::tree::{nav_tree, NavItem};
use crate::routes::resolve::canonical;
use crate::routes::router::RouterContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn Sidebar() -> impl IntoView {
    let router = use_context::<RouterContext>().expect("RouterContext not found");
    let (session, _) = use_session();

    let expanded = RwSignal::new(expansion::load());

    // First load seeds an empty persisted set with the role defaults; a
    // role switch unions the new defaults in without collapsing anything.
    Effect::new(move |prev: Option<Option<Role>>| {
        let role = session.get().role();
        if let Some(role) = role {
            if prev.flatten() != Some(role) {
                expanded.update(|set| {
                    if prev.is_none() {
                        set.seed_defaults(role);
                    } else {
                        set.union_defaults(role);
                    }
                });
                expansion::save(&expanded.get_untracked());
            }
        }
        role
    });

    view! {
        <div class="app-sidebar__content">
            {move || {
                nav_tree(session.get().role())
                    .into_iter()
                    .map(|item| {
                        if item.is_section() {
                            section_view(item, expanded, router)
                        } else {
                            leaf_view(item.id.to_string(), item.label, item.icon, router)
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

fn leaf_view(
    route: String,
    label: &'static str,
    icon_name: &'static str,
    router: RouterContext,
) -> AnyView {
    let route_for_active = route.clone();
    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || {
                canonical(&router.current.get()) == route_for_active
            }
            on:click=move |_| router.navigate(&route)
        >
            {icon(icon_name)}
            <span class="app-sidebar__label">{label}</span>
        </div>
    }
    .into_any()
}

fn section_view(
    item: NavItem,
    expanded: RwSignal<ExpandedSections>,
    router: RouterContext,
) -> AnyView {
    let section_id = item.id;
    let is_expanded = move || expanded.get().is_expanded(section_id);

    let on_toggle = move |_| {
        expanded.update(|set| set.toggle(section_id));
        expansion::save(&expanded.get_untracked());
    };

    let children = item.children;
    view! {
        <div class="app-sidebar__section">
            <div class="app-sidebar__item" on:click=on_toggle>
                {icon(item.icon)}
                <span class="app-sidebar__label">{item.label}</span>
                <span class="app-sidebar__chevron">
                    {move || {
                        if is_expanded() { icon("chevron-down") } else { icon("chevron-right") }
                    }}
                </span>
            </div>
            {move || {
                if !is_expanded() {
                    return ().into_any();
                }
                view! {
                    <div class="app-sidebar__children">
                        {children
                            .iter()
                            .map(|child| {
                                leaf_view(
                                    format!("{}/{}", section_id, child.id),
                                    child.label,
                                    child.icon,
                                    router,
                                )
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
    .into_any()
}
