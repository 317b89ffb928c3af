use contracts::domain::payments::{
    FeeConfig, PaymentAnalytics, PayoutFrequency, PayoutSchedule, Transaction,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::admin_payment::api;
use crate::shared::components::{PageTabs, RetryPanel, TransactionTable};
use crate::shared::format::{format_date, format_money};
use crate::shared::toast::use_toasts;

#[component]
pub fn AdminPaymentPage(sub: String) -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Payment Management"</h1>
            <PageTabs
                family="admin-payment"
                tabs=vec![
                    ("schedule", "Payout Schedule"),
                    ("fees", "Platform Fees"),
                    ("transactions", "Transactions"),
                    ("analytics", "Payment Analytics"),
                ]
                active=sub.clone()
            />
            {match sub.as_str() {
                "fees" => view! { <FeesView /> }.into_any(),
                "transactions" => view! { <TransactionsView /> }.into_any(),
                "analytics" => view! { <AnalyticsView /> }.into_any(),
                _ => view! { <ScheduleView /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ScheduleView() -> impl IntoView {
    let (schedule, set_schedule) = signal(Option::<PayoutSchedule>::None);
    let (error, set_error) = signal(Option::<String>::None);
    let (frequency, set_frequency) = signal(PayoutFrequency::Weekly);
    let (minimum, set_minimum) = signal(String::new());
    let toasts = use_toasts();

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_schedule().await {
                Ok(s) => {
                    set_frequency.set(s.frequency);
                    set_minimum.set(format!("{:.2}", s.minimum_amount));
                    set_schedule.set(Some(s));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let parse_frequency = |value: &str| match value {
        "daily" => PayoutFrequency::Daily,
        "monthly" => PayoutFrequency::Monthly,
        _ => PayoutFrequency::Weekly,
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let frequency = frequency.get();
        let minimum_amount = minimum.get().parse::<f64>().unwrap_or(0.0);
        spawn_local(async move {
            match api::update_schedule(frequency, minimum_amount).await {
                Ok(()) => toasts.success("Payout schedule saved"),
                Err(e) => toasts.error(format!("Could not save schedule: {}", e)),
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
                                message=format!("Could not load payout schedule: {}", e)
                                on_retry=Callback::new(move |_| fetch())
                            />
                        }
                    })
            }}
            <form class="form" on:submit=on_submit>
                <label class="form__field">
                    <span>"Frequency"</span>
                    <select on:change=move |ev| {
                        set_frequency.set(parse_frequency(&event_target_value(&ev)))
                    }>
                        <option value="daily" selected=move || frequency.get() == PayoutFrequency::Daily>
                            "Daily"
                        </option>
                        <option value="weekly" selected=move || frequency.get() == PayoutFrequency::Weekly>
                            "Weekly"
                        </option>
                        <option value="monthly" selected=move || frequency.get() == PayoutFrequency::Monthly>
                            "Monthly"
                        </option>
                    </select>
                </label>
                <label class="form__field">
                    <span>"Minimum payout (USD)"</span>
                    <input
                        type="number"
                        step="0.01"
                        prop:value=minimum
                        on:input=move |ev| set_minimum.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="form__submit">"Save"</button>
            </form>
            {move || {
                schedule
                    .get()
                    .map(|s| {
                        view! {
                            <p class="page__meta">
                                {format!("Next payout run: {}", format_date(s.next_payout_at))}
                            </p>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn FeesView() -> impl IntoView {
    let (fees, set_fees) = signal(Option::<FeeConfig>::None);
    let (error, set_error) = signal(Option::<String>::None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_fees().await {
                Ok(f) => {
                    set_fees.set(Some(f));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    view! {
        <div class="page__section">
            {move || match (fees.get(), error.get()) {
                (_, Some(e)) => {
                    view! {
                        <RetryPanel
                            message=format!("Could not load fee configuration: {}", e)
                            on_retry=Callback::new(move |_| fetch())
                        />
                    }
                        .into_any()
                }
                (Some(f), None) => {
                    view! {
                        <dl class="detail-list">
                            <div class="detail-list__row">
                                <dt>"Platform fee"</dt>
                                <dd>{format!("{:.1}%", f.platform_fee_pct)}</dd>
                            </div>
                            <div class="detail-list__row">
                                <dt>"Fixed fee per charge"</dt>
                                <dd>{format_money(f.fixed_fee, &f.currency)}</dd>
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
fn TransactionsView() -> impl IntoView {
    let (transactions, set_transactions) = signal(Vec::<Transaction>::new());
    let (error, set_error) = signal(Option::<String>::None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_transactions().await {
                Ok(v) => {
                    set_transactions.set(v);
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
                                message=format!("Could not load transactions: {}", e)
                                on_retry=Callback::new(move |_| fetch())
                            />
                        }
                    })
            }}
            <TransactionTable transactions=transactions with_tenant=true />
        </div>
    }
}

#[component]
fn AnalyticsView() -> impl IntoView {
    let (rows, set_rows) = signal(Vec::<PaymentAnalytics>::new());
    let (error, set_error) = signal(Option::<String>::None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_analytics().await {
                Ok(v) => {
                    set_rows.set(v);
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
                                message=format!("Could not load payment analytics: {}", e)
                                on_retry=Callback::new(move |_| fetch())
                            />
                        }
                    })
            }}
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Period"</th>
                        <th class="data-table__amount">"Volume"</th>
                        <th class="data-table__amount">"Fee revenue"</th>
                        <th>"Refund rate"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|row| row.period.clone()
                        children=|row: PaymentAnalytics| {
                            view! {
                                <tr>
                                    <td>{row.period.clone()}</td>
                                    <td class="data-table__amount">
                                        {format_money(row.volume, &row.currency)}
                                    </td>
                                    <td class="data-table__amount">
                                        {format_money(row.fee_revenue, &row.currency)}
                                    </td>
                                    <td>{format!("{:.1}%", row.refund_rate_pct)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
