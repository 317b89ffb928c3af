use contracts::domain::payments::{Transaction, TransactionStatus};
use leptos::prelude::*;

use crate::shared::format::{format_datetime, format_money};

fn status_label(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Pending => "pending",
        TransactionStatus::Succeeded => "succeeded",
        TransactionStatus::Failed => "failed",
        TransactionStatus::Refunded => "refunded",
    }
}

/// Shared transaction listing used by the admin, tenant-finance, and
/// user-payment screens.
#[component]
pub fn TransactionTable(
    #[prop(into)] transactions: Signal<Vec<Transaction>>,
    /// Show the tenant column (admin view only)
    #[prop(default = false)]
    with_tenant: bool,
) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Description"</th>
                    {with_tenant.then(|| view! { <th>"Tenant"</th> })}
                    <th class="data-table__amount">"Amount"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || transactions.get()
                    key=|tx| tx.id
                    children=move |tx: Transaction| {
                        let status = tx.status;
                        view! {
                            <tr>
                                <td>{format_datetime(tx.created_at)}</td>
                                <td>{tx.description.clone()}</td>
                                {with_tenant
                                    .then(|| {
                                        view! {
                                            <td>
                                                {tx.tenant.clone().unwrap_or_else(|| "\u{2014}".to_string())}
                                            </td>
                                        }
                                    })}
                                <td class="data-table__amount">
                                    {format_money(tx.amount, &tx.currency)}
                                </td>
                                <td>
                                    <span class=format!("status-badge status-badge--{}", status_label(status))>
                                        {status_label(status)}
                                    </span>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
