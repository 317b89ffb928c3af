use crate::app_shell::AppShell;
use crate::layout::context::UiContext;
use crate::routes::router::RouterContext;
use crate::shared::toast::{ToastService, Toaster};
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Route state lives above the session gate so login/logout redirects work.
    let router = RouterContext::new();
    router.init_history_integration();
    provide_context(router);

    provide_context(UiContext::new());
    provide_context(ToastService::new());

    view! {
        <SessionProvider>
            <AppShell />
            <Toaster />
        </SessionProvider>
    }
}
