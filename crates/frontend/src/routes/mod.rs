pub mod resolve;
pub mod router;

use std::collections::HashMap;

use leptos::prelude::*;
use once_cell::sync::Lazy;

use crate::domain::admin_payment::ui::AdminPaymentPage;
use crate::domain::billing::ui::BillingPage;
use crate::domain::dashboard::ui::{AnalyticsPage, DashboardPage, ReportsPage};
use crate::domain::profile::ui::ProfilePage;
use crate::domain::tenant::ui::TenantPage;
use crate::domain::tenant_finance::ui::TenantFinancePage;
use crate::domain::user_payment::ui::UserPaymentPage;
use crate::system::pages::under_construction::UnderConstruction;
use resolve::{resolve, View};
use router::RouterContext;

/// Header title per view family.
static PAGE_TITLES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("dashboard", "Dashboard"),
        ("analytics", "Analytics"),
        ("reports", "Reports"),
        ("billing", "Billing"),
        ("profile", "Profile"),
        ("tenant", "Organization"),
        ("admin-payment", "Payment Management"),
        ("tenant-finance", "Finance"),
        ("user-payment", "Payments"),
    ])
});

pub fn page_title(route: &str) -> &'static str {
    let head = route.split('/').next().unwrap_or_default();
    PAGE_TITLES.get(head).copied().unwrap_or("Under Construction")
}

/// Content panel: re-renders on every route change. A navigation while a
/// view is still loading simply drops that view along with its in-flight
/// work; there is no cancellation protocol.
#[component]
pub fn RouteView() -> impl IntoView {
    let router = use_context::<RouterContext>().expect("RouterContext not found");

    view! {
        <main class="app-content">
            {move || {
                let route = router.current.get();
                match resolve(&route) {
                    View::Dashboard => view! { <DashboardPage /> }.into_any(),
                    View::Analytics => view! { <AnalyticsPage /> }.into_any(),
                    View::Reports => view! { <ReportsPage /> }.into_any(),
                    View::Billing(sub) => view! { <BillingPage sub=sub /> }.into_any(),
                    View::Profile(sub) => view! { <ProfilePage sub=sub /> }.into_any(),
                    View::Tenant(sub) => view! { <TenantPage sub=sub /> }.into_any(),
                    View::AdminPayment(sub) => view! { <AdminPaymentPage sub=sub /> }.into_any(),
                    View::TenantFinance(sub) => {
                        view! { <TenantFinancePage sub=sub /> }.into_any()
                    }
                    View::UserPayment(sub) => view! { <UserPaymentPage sub=sub /> }.into_any(),
                    View::UnderConstruction(route) => {
                        view! { <UnderConstruction route=route /> }.into_any()
                    }
                }
            }}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_cover_all_routable_families() {
        assert_eq!(page_title("billing/payments"), "Billing");
        assert_eq!(page_title("dashboard"), "Dashboard");
        assert_eq!(page_title("tenant-finance/payouts"), "Finance");
        assert_eq!(page_title("monitoring/health"), "Under Construction");
    }
}
