//! Top navigation bar: sidebar toggle, brand, demo role switcher, user
//! info, and logout.

use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::layout::context::UiContext;
use crate::routes::router::{RouterContext, DEFAULT_ROUTE};
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, switch_demo_role, use_session};
use crate::system::auth::storage;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ui = use_context::<UiContext>().expect("UiContext not found");
    let router = use_context::<RouterContext>().expect("RouterContext not found");
    let (session, set_session) = use_session();

    let toggle_sidebar = move |_| {
        ui.toggle_sidebar();
    };

    let logout = move |_| {
        do_logout(set_session);
        router.redirect(DEFAULT_ROUTE);
    };

    let on_role_change = move |ev: leptos::ev::Event| {
        let role = Role::parse(&event_target_value(&ev));
        switch_demo_role(role, set_session);
    };

    let is_sidebar_visible = move || ui.sidebar_open.get();
    let active_role = move || session.get().role().unwrap_or_default();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || {
                        if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                    }
                >
                    {move || {
                        if is_sidebar_visible() {
                            icon("panel-left-close")
                        } else {
                            icon("panel-left-open")
                        }
                    }}
                </button>
                <span class="top-header__title">"Platform Gateway"</span>
            </div>

            <div class="top-header__actions">
                // Demo sessions can switch role on the fly
                <Show when=|| storage::demo_mode_enabled()>
                    <select class="top-header__role-select" on:change=on_role_change>
                        {Role::all()
                            .into_iter()
                            .map(|role| {
                                view! {
                                    <option
                                        value=role.as_str()
                                        selected=move || active_role() == role
                                    >
                                        {role.display_name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </Show>

                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || {
                            session
                                .get()
                                .user
                                .map(|u| u.username)
                                .unwrap_or_else(|| "Guest".to_string())
                        }}
                    </span>
                    <span class="top-header__role-badge">
                        {move || active_role().display_name()}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
