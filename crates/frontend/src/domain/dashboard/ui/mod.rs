use contracts::domain::dashboard::{ActivityEntry, AnalyticsSummary, DashboardStats, ReportListing};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::dashboard::api;
use crate::shared::components::{RetryPanel, StatCard, ValueFormat};
use crate::shared::format::{format_date, format_datetime};

/// Fixed dashboard refresh cadence.
const REFRESH_INTERVAL_MS: u32 = 30_000;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (stats, set_stats) = signal(Option::<DashboardStats>::None);
    let (activity, set_activity) = signal(Vec::<ActivityEntry>::new());
    let (error, set_error) = signal(Option::<String>::None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_stats().await {
                Ok(s) => {
                    set_stats.set(Some(s));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            if let Ok(feed) = api::fetch_activity().await {
                set_activity.set(feed);
            }
        });
    };
    fetch();

    // Fire-and-forget refresh loop; it winds down once the page's signals
    // are gone.
    wasm_bindgen_futures::spawn_local(async move {
        loop {
            TimeoutFuture::new(REFRESH_INTERVAL_MS).await;
            if let Ok(s) = api::fetch_stats().await {
                if set_stats.try_set(Some(s)).is_some() {
                    break;
                }
            }
        }
    });

    let tenants = Signal::derive(move || stats.get().map(|s| s.total_tenants as f64));
    let users = Signal::derive(move || stats.get().map(|s| s.active_users as f64));
    let revenue = Signal::derive(move || stats.get().map(|s| s.monthly_revenue));
    let payouts = Signal::derive(move || stats.get().map(|s| s.pending_payouts));
    let invoices = Signal::derive(move || stats.get().map(|s| s.open_invoices as f64));

    view! {
        <div class="page">
            <h1 class="page__title">"Dashboard"</h1>
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <RetryPanel
                                message=format!("Could not load dashboard data: {}", e)
                                on_retry=Callback::new(move |_| fetch())
                            />
                        }
                    })
            }}
            <div class="stat-grid">
                <StatCard label="Tenants" icon_name="building" value=tenants format=ValueFormat::Count />
                <StatCard label="Active users" icon_name="users" value=users format=ValueFormat::Count />
                <StatCard label="Monthly revenue" icon_name="dollar-sign" value=revenue format=ValueFormat::Money />
                <StatCard label="Pending payouts" icon_name="credit-card" value=payouts format=ValueFormat::Money />
                <StatCard label="Open invoices" icon_name="file-text" value=invoices format=ValueFormat::Count />
            </div>

            <section class="page__section">
                <h2>"Recent activity"</h2>
                <ul class="activity-feed">
                    <For
                        each=move || activity.get()
                        key=|entry| format!("{}-{}", entry.occurred_at, entry.message)
                        children=|entry: ActivityEntry| {
                            view! {
                                <li class="activity-feed__entry">
                                    <span class="activity-feed__time">
                                        {format_datetime(entry.occurred_at)}
                                    </span>
                                    <span>{entry.message}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </section>
        </div>
    }
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let (rows, set_rows) = signal(Vec::<AnalyticsSummary>::new());
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
        <div class="page">
            <h1 class="page__title">"Analytics"</h1>
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <RetryPanel
                                message=format!("Could not load analytics: {}", e)
                                on_retry=Callback::new(move |_| fetch())
                            />
                        }
                    })
            }}
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Period"</th>
                        <th>"Signups"</th>
                        <th>"Churned"</th>
                        <th>"Conversion"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|row| row.period.clone()
                        children=|row: AnalyticsSummary| {
                            view! {
                                <tr>
                                    <td>{row.period.clone()}</td>
                                    <td>{row.signups}</td>
                                    <td>{row.churned}</td>
                                    <td>{format!("{:.1}%", row.conversion_pct)}</td>
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
pub fn ReportsPage() -> impl IntoView {
    let (reports, set_reports) = signal(Vec::<ReportListing>::new());
    let (error, set_error) = signal(Option::<String>::None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_reports().await {
                Ok(v) => {
                    set_reports.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    view! {
        <div class="page">
            <h1 class="page__title">"Reports"</h1>
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <RetryPanel
                                message=format!("Could not load reports: {}", e)
                                on_retry=Callback::new(move |_| fetch())
                            />
                        }
                    })
            }}
            <ul class="report-list">
                <For
                    each=move || reports.get()
                    key=|report| report.id
                    children=|report: ReportListing| {
                        view! {
                            <li class="report-list__entry">
                                <span class="report-list__title">{report.title.clone()}</span>
                                <span class="report-list__date">
                                    {format_date(report.generated_at)}
                                </span>
                                <span
                                    class="status-badge"
                                    class:status-badge--succeeded=report.ready
                                    class:status-badge--pending=!report.ready
                                >
                                    {if report.ready { "ready" } else { "generating" }}
                                </span>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
