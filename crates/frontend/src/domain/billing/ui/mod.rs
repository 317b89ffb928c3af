use contracts::domain::billing::{BillingOverview, ConnectStatus, Invoice, InvoiceStatus, PaymentMethod};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::billing::api;
use crate::shared::components::{PageTabs, RetryPanel};
use crate::shared::format::{format_date, format_money};
use crate::shared::toast::use_toasts;

#[component]
pub fn BillingPage(sub: String) -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Billing"</h1>
            <PageTabs
                family="billing"
                tabs=vec![
                    ("overview", "Overview"),
                    ("payments", "Payment Methods"),
                    ("invoices", "Invoices"),
                    ("connect", "Payment Connect"),
                ]
                active=sub.clone()
            />
            {match sub.as_str() {
                "payments" => view! { <PaymentMethodsView /> }.into_any(),
                "invoices" => view! { <InvoicesView /> }.into_any(),
                "connect" => view! { <ConnectView /> }.into_any(),
                _ => view! { <OverviewView /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn OverviewView() -> impl IntoView {
    let (overview, set_overview) = signal(Option::<BillingOverview>::None);
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

    view! {
        <div class="page__section">
            {move || match (overview.get(), error.get()) {
                (_, Some(e)) => {
                    view! {
                        <RetryPanel
                            message=format!("Could not load billing overview: {}", e)
                            on_retry=Callback::new(move |_| fetch())
                        />
                    }
                        .into_any()
                }
                (Some(o), None) => {
                    view! {
                        <dl class="detail-list">
                            <div class="detail-list__row">
                                <dt>"Plan"</dt>
                                <dd>{o.plan.clone()}</dd>
                            </div>
                            <div class="detail-list__row">
                                <dt>"Status"</dt>
                                <dd>{o.status.clone()}</dd>
                            </div>
                            <div class="detail-list__row">
                                <dt>"Current period"</dt>
                                <dd>
                                    {format!(
                                        "{} — {}",
                                        format_date(o.period_start),
                                        format_date(o.period_end),
                                    )}
                                </dd>
                            </div>
                            <div class="detail-list__row">
                                <dt>"Amount due"</dt>
                                <dd>{format_money(o.amount_due, &o.currency)}</dd>
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
fn PaymentMethodsView() -> impl IntoView {
    let (methods, set_methods) = signal(Vec::<PaymentMethod>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let toasts = use_toasts();

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_payment_methods().await {
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
            match api::set_default_payment_method(id).await {
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
fn InvoicesView() -> impl IntoView {
    let (invoices, set_invoices) = signal(Vec::<Invoice>::new());
    let (error, set_error) = signal(Option::<String>::None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_invoices().await {
                Ok(v) => {
                    set_invoices.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let status_label = |status: InvoiceStatus| match status {
        InvoiceStatus::Draft => "draft",
        InvoiceStatus::Open => "open",
        InvoiceStatus::Paid => "paid",
        InvoiceStatus::Void => "void",
    };

    view! {
        <div class="page__section">
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <RetryPanel
                                message=format!("Could not load invoices: {}", e)
                                on_retry=Callback::new(move |_| fetch())
                            />
                        }
                    })
            }}
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Number"</th>
                        <th>"Issued"</th>
                        <th class="data-table__amount">"Amount"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || invoices.get()
                        key=|invoice| invoice.id
                        children=move |invoice: Invoice| {
                            view! {
                                <tr>
                                    <td>{invoice.number.clone()}</td>
                                    <td>{format_date(invoice.issued_at)}</td>
                                    <td class="data-table__amount">
                                        {format_money(invoice.amount, &invoice.currency)}
                                    </td>
                                    <td>
                                        <span class="status-badge">
                                            {status_label(invoice.status)}
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
fn ConnectView() -> impl IntoView {
    let (status, set_status) = signal(Option::<ConnectStatus>::None);
    let (error, set_error) = signal(Option::<String>::None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_connect_status().await {
                Ok(v) => {
                    set_status.set(Some(v));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    view! {
        <div class="page__section">
            {move || match (status.get(), error.get()) {
                (_, Some(e)) => {
                    view! {
                        <RetryPanel
                            message=format!("Could not load connect status: {}", e)
                            on_retry=Callback::new(move |_| fetch())
                        />
                    }
                        .into_any()
                }
                (Some(s), None) => {
                    view! {
                        <dl class="detail-list">
                            <div class="detail-list__row">
                                <dt>"Provider"</dt>
                                <dd>{s.provider.clone()}</dd>
                            </div>
                            <div class="detail-list__row">
                                <dt>"Onboarding complete"</dt>
                                <dd>{yes_no(s.onboarded)}</dd>
                            </div>
                            <div class="detail-list__row">
                                <dt>"Charges enabled"</dt>
                                <dd>{yes_no(s.charges_enabled)}</dd>
                            </div>
                            <div class="detail-list__row">
                                <dt>"Payouts enabled"</dt>
                                <dd>{yes_no(s.payouts_enabled)}</dd>
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
