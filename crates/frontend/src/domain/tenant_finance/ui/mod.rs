use contracts::domain::payments::{
    FinanceOverview, PayoutFrequency, PayoutRecord, PayoutSchedule, Transaction,
    TransactionStatus,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::tenant_finance::api;
use crate::shared::components::{PageTabs, RetryPanel, StatCard, TransactionTable, ValueFormat};
use crate::shared::format::{format_date, format_money};

#[component]
pub fn TenantFinancePage(sub: String) -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Finance"</h1>
            <PageTabs
                family="tenant-finance"
                tabs=vec![
                    ("overview", "Overview"),
                    ("transactions", "Transactions"),
                    ("payouts", "Payouts"),
                    ("settings", "Payout Settings"),
                ]
                active=sub.clone()
            />
            {match sub.as_str() {
                "transactions" => view! { <TransactionsView /> }.into_any(),
                "payouts" => view! { <PayoutsView /> }.into_any(),
                "settings" => view! { <SettingsView /> }.into_any(),
                _ => view! { <OverviewView /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn OverviewView() -> impl IntoView {
    let (overview, set_overview) = signal(Option::<FinanceOverview>::None);
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

    let available = Signal::derive(move || overview.get().map(|o| o.available_balance));
    let pending = Signal::derive(move || overview.get().map(|o| o.pending_balance));

    view! {
        <div class="page__section">
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <RetryPanel
                                message=format!("Could not load finance overview: {}", e)
                                on_retry=Callback::new(move |_| fetch())
                            />
                        }
                    })
            }}
            <div class="stat-grid">
                <StatCard
                    label="Available balance"
                    icon_name="dollar-sign"
                    value=available
                    format=ValueFormat::Money
                />
                <StatCard
                    label="Pending balance"
                    icon_name="credit-card"
                    value=pending
                    format=ValueFormat::Money
                />
            </div>
            {move || {
                overview
                    .get()
                    .and_then(|o| o.last_payout_at)
                    .map(|at| {
                        view! {
                            <p class="page__meta">{format!("Last payout: {}", format_date(at))}</p>
                        }
                    })
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
            <TransactionTable transactions=transactions />
        </div>
    }
}

#[component]
fn PayoutsView() -> impl IntoView {
    let (payouts, set_payouts) = signal(Vec::<PayoutRecord>::new());
    let (error, set_error) = signal(Option::<String>::None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_payouts().await {
                Ok(v) => {
                    set_payouts.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let status_label = |status: TransactionStatus| match status {
        TransactionStatus::Pending => "pending",
        TransactionStatus::Succeeded => "succeeded",
        TransactionStatus::Failed => "failed",
        TransactionStatus::Refunded => "refunded",
    };

    view! {
        <div class="page__section">
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <RetryPanel
                                message=format!("Could not load payouts: {}", e)
                                on_retry=Callback::new(move |_| fetch())
                            />
                        }
                    })
            }}
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Initiated"</th>
                        <th class="data-table__amount">"Amount"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || payouts.get()
                        key=|payout| payout.id
                        children=move |payout: PayoutRecord| {
                            view! {
                                <tr>
                                    <td>{format_date(payout.initiated_at)}</td>
                                    <td class="data-table__amount">
                                        {format_money(payout.amount, &payout.currency)}
                                    </td>
                                    <td>
                                        <span class="status-badge">
                                            {status_label(payout.status)}
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
fn SettingsView() -> impl IntoView {
    let (schedule, set_schedule) = signal(Option::<PayoutSchedule>::None);
    let (error, set_error) = signal(Option::<String>::None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_settings().await {
                Ok(s) => {
                    set_schedule.set(Some(s));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let frequency_label = |frequency: PayoutFrequency| match frequency {
        PayoutFrequency::Daily => "daily",
        PayoutFrequency::Weekly => "weekly",
        PayoutFrequency::Monthly => "monthly",
    };

    view! {
        <div class="page__section">
            {move || match (schedule.get(), error.get()) {
                (_, Some(e)) => {
                    view! {
                        <RetryPanel
                            message=format!("Could not load payout settings: {}", e)
                            on_retry=Callback::new(move |_| fetch())
                        />
                    }
                        .into_any()
                }
                (Some(s), None) => {
                    view! {
                        <dl class="detail-list">
                            <div class="detail-list__row">
                                <dt>"Frequency"</dt>
                                <dd>{frequency_label(s.frequency)}</dd>
                            </div>
                            <div class="detail-list__row">
                                <dt>"Next payout"</dt>
                                <dd>{format_date(s.next_payout_at)}</dd>
                            </div>
                            <div class="detail-list__row">
                                <dt>"Minimum amount"</dt>
                                <dd>{format_money(s.minimum_amount, &s.currency)}</dd>
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
