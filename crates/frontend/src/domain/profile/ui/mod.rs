use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::profile::api;
use crate::shared::components::PageTabs;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;

#[component]
pub fn ProfilePage(sub: String) -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Profile"</h1>
            <PageTabs
                family="profile"
                tabs=vec![
                    ("personal", "Personal Info"),
                    ("security", "Security"),
                    ("preferences", "Preferences"),
                ]
                active=sub.clone()
            />
            {match sub.as_str() {
                "security" => view! { <SecurityView /> }.into_any(),
                "preferences" => view! { <PreferencesView /> }.into_any(),
                _ => view! { <PersonalView /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn PersonalView() -> impl IntoView {
    let (session, _) = use_session();
    let toasts = use_toasts();

    let user = session.get_untracked().user;
    let (full_name, set_full_name) =
        signal(user.as_ref().and_then(|u| u.full_name.clone()).unwrap_or_default());
    let (email, set_email) =
        signal(user.as_ref().and_then(|u| u.email.clone()).unwrap_or_default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let full_name = full_name.get();
        let email = email.get();
        spawn_local(async move {
            match api::update_personal(full_name, email).await {
                Ok(()) => toasts.success("Profile saved"),
                Err(e) => toasts.error(format!("Could not save profile: {}", e)),
            }
        });
    };

    view! {
        <form class="page__section form" on:submit=on_submit>
            <label class="form__field">
                <span>"Full name"</span>
                <input
                    type="text"
                    prop:value=full_name
                    on:input=move |ev| set_full_name.set(event_target_value(&ev))
                />
            </label>
            <label class="form__field">
                <span>"Email"</span>
                <input
                    type="email"
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" class="form__submit">"Save"</button>
        </form>
    }
}

#[component]
fn SecurityView() -> impl IntoView {
    let toasts = use_toasts();

    let (current, set_current) = signal(String::new());
    let (replacement, set_replacement) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current_val = current.get();
        let replacement_val = replacement.get();
        spawn_local(async move {
            match api::change_password(current_val, replacement_val).await {
                Ok(()) => {
                    toasts.success("Password changed");
                    set_current.set(String::new());
                    set_replacement.set(String::new());
                }
                Err(e) => toasts.error(format!("Could not change password: {}", e)),
            }
        });
    };

    view! {
        <form class="page__section form" on:submit=on_submit>
            <label class="form__field">
                <span>"Current password"</span>
                <input
                    type="password"
                    prop:value=current
                    on:input=move |ev| set_current.set(event_target_value(&ev))
                />
            </label>
            <label class="form__field">
                <span>"New password"</span>
                <input
                    type="password"
                    prop:value=replacement
                    on:input=move |ev| set_replacement.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" class="form__submit">"Change password"</button>
        </form>
    }
}

#[component]
fn PreferencesView() -> impl IntoView {
    let toasts = use_toasts();

    let (locale, set_locale) = signal("en-US".to_string());
    let (email_digest, set_email_digest) = signal(true);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let locale = locale.get();
        let email_digest = email_digest.get();
        spawn_local(async move {
            match api::update_preferences(locale, email_digest).await {
                Ok(()) => toasts.success("Preferences saved"),
                Err(e) => toasts.error(format!("Could not save preferences: {}", e)),
            }
        });
    };

    view! {
        <form class="page__section form" on:submit=on_submit>
            <label class="form__field">
                <span>"Language"</span>
                <select on:change=move |ev| set_locale.set(event_target_value(&ev))>
                    <option value="en-US" selected=move || locale.get() == "en-US">
                        "English (US)"
                    </option>
                    <option value="en-GB" selected=move || locale.get() == "en-GB">
                        "English (UK)"
                    </option>
                    <option value="de-DE" selected=move || locale.get() == "de-DE">
                        "Deutsch"
                    </option>
                </select>
            </label>
            <label class="form__field form__field--inline">
                <input
                    type="checkbox"
                    prop:checked=email_digest
                    on:change=move |ev| set_email_digest.set(event_target_checked(&ev))
                />
                <span>"Send me a weekly email digest"</span>
            </label>
            <button type="submit" class="form__submit">"Save"</button>
        </form>
    }
}
