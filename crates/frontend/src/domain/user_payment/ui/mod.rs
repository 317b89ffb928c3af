use contracts::domain::billing::PaymentMethod;
use contracts::domain::payments::{ServiceSubscription, Transaction, UserPaymentOverview};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::user_payment::api;
use crate::shared::components::{PageTabs, RetryPanel, StatCard, TransactionTable, ValueFormat};
use crate::shared::format::{format_date, format_money};
use crate::shared::toast::use_toasts;

#[component]
pub fn UserPaymentPage(sub: String) -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Payments"</h1>
            <PageTabs
                family="user-payment"
                tabs=vec![
                    ("overview", "Overview"),
                    ("methods", "Payment Methods"),
                    ("services", "Services"),
                    ("history", "History"),
                ]
                active=sub.clone()
            />
            {match sub.as_str() {
                "methods" => view! { <MethodsView /> }.into_any(),
                "services" => view! { <ServicesView /> }.into_any(),
                "history" => view! { <HistoryView /> }.into_any(),
                _ => view! { <OverviewView /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn OverviewView() -> impl IntoView {
    let (overview, set_overview) = signal(Option::<UserPaymentOverview>::None);
    let (error, set_error) = signal(Option::<String>::None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_overview().await {
                Ok(v) => {
                    set_overview.set(Some(v));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let spend = Signal::derive(move || overview.get().map(|o| o.monthly_spend));
    let services = Signal::derive(move || overview.get().map(|o| o.active_services as f64));

    view! {
        <div class="page__section">
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <RetryPanel
                                message=format!("Could not load payment overview: {}", e)
                                on_retry=Callback::new(move |_| fetch())
                            />
                        }
                    })
            }}
            <div class="stat-grid">
                <StatCard
                    label="Monthly spend"
                    icon_name="dollar-sign"
                    value=spend
                    format=ValueFormat::Money
                />
                <StatCard
                    label="Active services"
                    icon_name="package"
                    value=services
                    format=ValueFormat::Count
                />
            </div>
            {move || {
                overview
                    .get()
                    .and_then(|o| o.next_renewal_at)
                    .map(|at| {
                        view! {
                            <p class="page__meta">{format!("Next renewal: {}", format_date(at))}</p>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn MethodsView() -> impl IntoView {
    let (methods, set_methods) = signal(Vec::<PaymentMethod>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let toasts = use_toasts();

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_methods().await {
                Ok(v) => {
                    set_methods.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let make_default = move |id: uuid::Uuid| {
        spawn_local(async move {
            match api::set_default_method(id).await {
                Ok(()) => {
                    toasts.success("Default payment method updated");
                    fetch();
                }
                Err(e) => toasts.error(format!("Could not update default method: {}", e)),
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
                                message=format!("Could not load payment methods: {}", e)
                                on_retry=Callback::new(move |_| fetch())
                            />
                        }
                    })
            }}
            <ul class="method-list">
                <For
                    each=move || methods.get()
                    key=|m| (m.id, m.is_default)
                    children=move |m: PaymentMethod| {
                        let id = m.id;
                        view! {
                            <li class="method-list__entry">
                                <span class="method-list__brand">{m.brand.clone()}</span>
                                <span>{format!("\u{2022}\u{2022}\u{2022}\u{2022} {}", m.last4)}</span>
                                <span>{format!("{:02}/{}", m.exp_month, m.exp_year)}</span>
                                {if m.is_default {
                                    view! { <span class="status-badge">"default"</span> }.into_any()
                                } else {
                                    view! {
                                        <button
                                            class="method-list__make-default"
                                            on:click=move |_| make_default(id)
                                        >
                                            "Make default"
                                        </button>
                                    }
                                        .into_any()
                                }}
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

#[component]
fn ServicesView() -> impl IntoView {
    let (services, set_services) = signal(Vec::<ServiceSubscription>::new());
    let (error, set_error) = signal(Option::<String>::None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_services().await {
                Ok(v) => {
                    set_services.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    view! {
        <div class="page__section">
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <RetryPanel
                                message=format!("Could not load services: {}", e)
                                on_retry=Callback::new(move |_| fetch())
                            />
                        }
                    })
            }}
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Service"</th>
                        <th class="data-table__amount">"Price"</th>
                        <th>"Renews"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || services.get()
                        key=|service| service.id
                        children=|service: ServiceSubscription| {
                            view! {
                                <tr>
                                    <td>{service.name.clone()}</td>
                                    <td class="data-table__amount">
                                        {format!(
                                            "{}/mo",
                                            format_money(service.price, &service.currency),
                                        )}
                                    </td>
                                    <td>{format_date(service.renews_at)}</td>
                                    <td>
                                        <span class="status-badge">
                                            {if service.active { "active" } else { "cancelled" }}
                                        </span>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn HistoryView() -> impl IntoView {
    let (history, set_history) = signal(Vec::<Transaction>::new());
    let (error, set_error) = signal(Option::<String>::None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_history().await {
                Ok(v) => {
                    set_history.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    view! {
        <div class="page__section">
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <RetryPanel
                                message=format!("Could not load payment history: {}", e)
                                on_retry=Callback::new(move |_| fetch())
                            />
                        }
                    })
            }}
            <TransactionTable transactions=history />
        </div>
    }
}
