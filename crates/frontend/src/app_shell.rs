//! Application shell.
//!
//! `AppShell` is the session gate: it shows `LoginPage` until a session
//! exists, then the main layout (top header + sidebar + routed content).

use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::routes::RouteView;
use crate::shared::components::demo_banner::DemoBanner;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| {
                view! {
                    <DemoBanner />
                    <RouteView />
                }
                .into_any()
            }
        />
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Show
            when=move || session.get().token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
