use contracts::domain::tenant::{TenantBranding, TenantProfile, TenantSettings};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::tenant::api;
use crate::shared::components::{PageTabs, RetryPanel};
use crate::shared::format::format_date;
use crate::shared::toast::use_toasts;

#[component]
pub fn TenantPage(sub: String) -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Organization"</h1>
            <PageTabs
                family="tenant"
                tabs=vec![
                    ("profile", "Profile"),
                    ("settings", "Settings"),
                    ("branding", "Branding"),
                ]
                active=sub.clone()
            />
            {match sub.as_str() {
                "settings" => view! { <SettingsView /> }.into_any(),
                "branding" => view! { <BrandingView /> }.into_any(),
                _ => view! { <ProfileView /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProfileView() -> impl IntoView {
    let (profile, set_profile) = signal(Option::<TenantProfile>::None);
    let (error, set_error) = signal(Option::<String>::None);
    let (name, set_name) = signal(String::new());
    let (contact_email, set_contact_email) = signal(String::new());
    let toasts = use_toasts();

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_profile().await {
                Ok(p) => {
                    set_name.set(p.name.clone());
                    set_contact_email.set(p.contact_email.clone());
                    set_profile.set(Some(p));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = name.get();
        let contact_email = contact_email.get();
        spawn_local(async move {
            match api::update_profile(name, contact_email).await {
                Ok(()) => toasts.success("Organization profile saved"),
                Err(e) => toasts.error(format!("Could not save profile: {}", e)),
            }
        });
    };

    view! {
        <div class="page__section">
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <RetryPanel
                                message=format!("Could not load organization profile: {}", e)
                                on_retry=Callback::new(move |_| fetch())
                            />
                        }
                    })
            }}
            <form class="form" on:submit=on_submit>
                <label class="form__field">
                    <span>"Name"</span>
                    <input
                        type="text"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span>"Billing contact"</span>
                    <input
                        type="email"
                        prop:value=contact_email
                        on:input=move |ev| set_contact_email.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="form__submit">"Save"</button>
            </form>
            {move || {
                profile
                    .get()
                    .map(|p| {
                        view! {
                            <p class="page__meta">
                                {format!("Tenant {} · created {}", p.slug, format_date(p.created_at))}
                            </p>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn SettingsView() -> impl IntoView {
    let (settings, set_settings) = signal(Option::<TenantSettings>::None);
    let (error, set_error) = signal(Option::<String>::None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_settings().await {
                Ok(s) => {
                    set_settings.set(Some(s));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    view! {
        <div class="page__section">
            {move || match (settings.get(), error.get()) {
                (_, Some(e)) => {
                    view! {
                        <RetryPanel
                            message=format!("Could not load settings: {}", e)
                            on_retry=Callback::new(move |_| fetch())
                        />
                    }
                        .into_any()
                }
                (Some(s), None) => {
                    view! {
                        <dl class="detail-list">
                            <div class="detail-list__row">
                                <dt>"Timezone"</dt>
                                <dd>{s.timezone.clone()}</dd>
                            </div>
                            <div class="detail-list__row">
                                <dt>"Locale"</dt>
                                <dd>{s.locale.clone()}</dd>
                            </div>
                            <div class="detail-list__row">
                                <dt>"Notifications"</dt>
                                <dd>{if s.notifications_enabled { "enabled" } else { "disabled" }}</dd>
                            </div>
                        </dl>
                    }
                        .into_any()
                }
                (None, None) => view! { <p class="page__loading">"Loading..."</p> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn BrandingView() -> impl IntoView {
    let (branding, set_branding) = signal(Option::<TenantBranding>::None);
    let (error, set_error) = signal(Option::<String>::None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_branding().await {
                Ok(b) => {
                    set_branding.set(Some(b));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    view! {
        <div class="page__section">
            {move || match (branding.get(), error.get()) {
                (_, Some(e)) => {
                    view! {
                        <RetryPanel
                            message=format!("Could not load branding: {}", e)
                            on_retry=Callback::new(move |_| fetch())
                        />
                    }
                        .into_any()
                }
                (Some(b), None) => {
                    view! {
                        <dl class="detail-list">
                            <div class="detail-list__row">
                                <dt>"Primary color"</dt>
                                <dd>
                                    <span
                                        class="branding-swatch"
                                        style:background-color=b.primary_color.clone()
                                    ></span>
                                    {b.primary_color.clone()}
                                </dd>
                            </div>
                            <div class="detail-list__row">
                                <dt>"Logo"</dt>
                                <dd>
                                    {b.logo_url.clone().unwrap_or_else(|| "not set".to_string())}
                                </dd>
                            </div>
                            <div class="detail-list__row">
                                <dt>"Custom domain"</dt>
                                <dd>
                                    {b.custom_domain.clone().unwrap_or_else(|| "not set".to_string())}
                                </dd>
                            </div>
                        </dl>
                    }
                        .into_any()
                }
                (None, None) => view! { <p class="page__loading">"Loading..."</p> }.into_any(),
            }}
        </div>
    }
}
