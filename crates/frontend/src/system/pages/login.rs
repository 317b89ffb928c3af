use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::router::{RouterContext, DEFAULT_ROUTE};
use crate::shared::toast::use_toasts;
use crate::system::auth::context::{do_login, start_demo, use_session, LoginOutcome};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_session) = use_session();
    let router = use_context::<RouterContext>().expect("RouterContext not found");
    let toasts = use_toasts();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();
        set_is_loading.set(true);

        spawn_local(async move {
            let outcome = do_login(username_val, password_val, set_session).await;
            set_is_loading.set(false);
            if outcome == LoginOutcome::DemoProvisioned {
                toasts.info("Backend unavailable — a demo session was started instead.");
            }
            router.redirect(DEFAULT_ROUTE);
        });
    };

    let enter_demo = move |role: Role| {
        start_demo(role, set_session);
        router.redirect(DEFAULT_ROUTE);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"Platform Gateway"</h1>
                <form on:submit=on_submit>
                    <label class="login-card__field">
                        <span>"Username"</span>
                        <input
                            type="text"
                            prop:value=username
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-card__field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" class="login-card__submit" disabled=is_loading>
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <div class="login-card__demo">
                    <span>"Or explore the demo as:"</span>
                    {Role::all()
                        .into_iter()
                        .map(|role| {
                            view! {
                                <button
                                    class="login-card__demo-role"
                                    on:click=move |_| enter_demo(role)
                                >
                                    {role.display_name()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
