//! Route-string to view dispatch.
//!
//! Dispatch is longest-prefix on the first path segment: `billing/*` selects
//! the billing view and the remainder picks the sub-view, with a per-family
//! default when the remainder is empty. Anything unrecognized resolves to
//! the "under construction" placeholder — never an error page.

/// View family selected for a route, with the sub-view for families that
/// have one.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Analytics,
    Reports,
    Billing(String),
    Profile(String),
    Tenant(String),
    AdminPayment(String),
    TenantFinance(String),
    UserPayment(String),
    UnderConstruction(String),
}

pub fn resolve(route: &str) -> View {
    let trimmed = route.trim_start_matches('#').trim_matches('/');
    let (head, rest) = match trimmed.split_once('/') {
        Some((head, rest)) => (head, Some(rest)),
        None => (trimmed, None),
    };
    let sub = |default: &str| {
        rest.filter(|r| !r.is_empty())
            .unwrap_or(default)
            .to_string()
    };

    match head {
        "" | "dashboard" => View::Dashboard,
        "analytics" => View::Analytics,
        "reports" => View::Reports,
        "billing" => View::Billing(sub("overview")),
        "profile" => View::Profile(sub("personal")),
        "tenant" => View::Tenant(sub("profile")),
        "admin-payment" => View::AdminPayment(sub("schedule")),
        "tenant-finance" => View::TenantFinance(sub("overview")),
        "user-payment" => View::UserPayment(sub("overview")),
        _ => View::UnderConstruction(trimmed.to_string()),
    }
}

/// Canonical form of a route: family plus effective sub-view. Used for
/// active-item highlighting so that e.g. `billing` and `billing/overview`
/// light up the same sidebar entry.
pub fn canonical(route: &str) -> String {
    match resolve(route) {
        View::Dashboard => "dashboard".to_string(),
        View::Analytics => "analytics".to_string(),
        View::Reports => "reports".to_string(),
        View::Billing(sub) => format!("billing/{}", sub),
        View::Profile(sub) => format!("profile/{}", sub),
        View::Tenant(sub) => format!("tenant/{}", sub),
        View::AdminPayment(sub) => format!("admin-payment/{}", sub),
        View::TenantFinance(sub) => format!("tenant-finance/{}", sub),
        View::UserPayment(sub) => format!("user-payment/{}", sub),
        View::UnderConstruction(route) => route,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn billing_subview_is_taken_from_the_remainder() {
        assert_eq!(resolve("billing/payments"), View::Billing("payments".to_string()));
    }

    #[test]
    fn bare_family_gets_its_default_subview() {
        assert_eq!(resolve("billing"), View::Billing("overview".to_string()));
        assert_eq!(resolve("profile"), View::Profile("personal".to_string()));
        assert_eq!(resolve("tenant"), View::Tenant("profile".to_string()));
        assert_eq!(
            resolve("admin-payment"),
            View::AdminPayment("schedule".to_string())
        );
        assert_eq!(
            resolve("tenant-finance"),
            View::TenantFinance("overview".to_string())
        );
        assert_eq!(
            resolve("user-payment"),
            View::UserPayment("overview".to_string())
        );
    }

    #[test]
    fn trailing_slash_is_equivalent_to_bare_family() {
        assert_eq!(resolve("billing/"), View::Billing("overview".to_string()));
    }

    #[test]
    fn deep_remainders_stay_with_the_family() {
        assert_eq!(
            resolve("tenant-finance/payouts"),
            View::TenantFinance("payouts".to_string())
        );
        // longest-prefix: everything after the family segment is the sub-view
        assert_eq!(
            resolve("billing/invoices/2024"),
            View::Billing("invoices/2024".to_string())
        );
    }

    #[test]
    fn unknown_routes_resolve_to_placeholder() {
        assert_eq!(
            resolve("monitoring/health"),
            View::UnderConstruction("monitoring/health".to_string())
        );
        assert_eq!(
            resolve("no-such-page"),
            View::UnderConstruction("no-such-page".to_string())
        );
    }

    #[test]
    fn empty_route_is_the_dashboard() {
        assert_eq!(resolve(""), View::Dashboard);
        assert_eq!(resolve("#/"), View::Dashboard);
    }

    #[test]
    fn canonical_folds_defaults() {
        assert_eq!(canonical("billing"), "billing/overview");
        assert_eq!(canonical("billing/payments"), "billing/payments");
        assert_eq!(canonical(""), "dashboard");
        assert_eq!(canonical("users/directory"), "users/directory");
    }
}
