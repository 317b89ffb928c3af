//! Role-specific navigation trees.
//!
//! A static lookup per role, not computed from permissions data. Trees are
//! rebuilt on every render; nothing here touches the browser.

use contracts::system::auth::Role;

/// One entry in the sidebar. Items with children are expandable sections;
/// leaves map 1:1 to routable pages. `id` is a path segment, unique within
/// the tree; a child's full route is `section/leaf` by convention.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub children: Vec<NavItem>,
}

impl NavItem {
    fn leaf(id: &'static str, label: &'static str, icon: &'static str) -> Self {
        Self {
            id,
            label,
            icon,
            children: Vec::new(),
        }
    }

    fn section(
        id: &'static str,
        label: &'static str,
        icon: &'static str,
        children: Vec<NavItem>,
    ) -> Self {
        Self {
            id,
            label,
            icon,
            children,
        }
    }

    pub fn is_section(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Build the navigation tree for a role. `None` (no signed-in user yet)
/// yields the minimal dashboard-only tree.
pub fn nav_tree(role: Option<Role>) -> Vec<NavItem> {
    match role {
        Some(Role::SuperAdmin) => super_admin_tree(),
        Some(Role::TenantOwner) => tenant_owner_tree(),
        Some(Role::RegularUser) => regular_user_tree(),
        None => vec![NavItem::leaf("dashboard", "Dashboard", "layout-dashboard")],
    }
}

fn super_admin_tree() -> Vec<NavItem> {
    vec![
        NavItem::leaf("dashboard", "Dashboard", "layout-dashboard"),
        NavItem::leaf("analytics", "Analytics", "bar-chart"),
        NavItem::leaf("reports", "Reports", "file-text"),
        NavItem::section(
            "admin-payment",
            "Payment Management",
            "credit-card",
            vec![
                NavItem::leaf("schedule", "Payout Schedule", "calendar"),
                NavItem::leaf("fees", "Platform Fees", "percent"),
                NavItem::leaf("transactions", "Transactions", "credit-card"),
                NavItem::leaf("analytics", "Payment Analytics", "activity"),
            ],
        ),
        NavItem::section(
            "users",
            "Users",
            "users",
            vec![
                NavItem::leaf("directory", "Directory", "users"),
                NavItem::leaf("invitations", "Invitations", "user"),
            ],
        ),
        NavItem::section(
            "monitoring",
            "Monitoring",
            "activity",
            vec![
                NavItem::leaf("health", "Service Health", "activity"),
                NavItem::leaf("logs", "Audit Log", "file-text"),
            ],
        ),
        NavItem::section(
            "settings",
            "Settings",
            "settings",
            vec![
                NavItem::leaf("general", "General", "settings"),
                NavItem::leaf("api-keys", "API Keys", "shield"),
            ],
        ),
    ]
}

fn tenant_owner_tree() -> Vec<NavItem> {
    vec![
        NavItem::leaf("dashboard", "Dashboard", "layout-dashboard"),
        NavItem::leaf("analytics", "Analytics", "bar-chart"),
        NavItem::leaf("reports", "Reports", "file-text"),
        NavItem::section(
            "billing",
            "Billing",
            "credit-card",
            vec![
                NavItem::leaf("overview", "Overview", "layout-dashboard"),
                NavItem::leaf("payments", "Payment Methods", "credit-card"),
                NavItem::leaf("invoices", "Invoices", "file-text"),
                NavItem::leaf("connect", "Payment Connect", "plug"),
            ],
        ),
        NavItem::section(
            "tenant",
            "Organization",
            "building",
            vec![
                NavItem::leaf("profile", "Profile", "building"),
                NavItem::leaf("settings", "Settings", "settings"),
                NavItem::leaf("branding", "Branding", "palette"),
            ],
        ),
        NavItem::section(
            "tenant-finance",
            "Finance",
            "dollar-sign",
            vec![
                NavItem::leaf("overview", "Overview", "dollar-sign"),
                NavItem::leaf("transactions", "Transactions", "credit-card"),
                NavItem::leaf("payouts", "Payouts", "dollar-sign"),
                NavItem::leaf("settings", "Payout Settings", "settings"),
            ],
        ),
        NavItem::section(
            "integrations",
            "Integrations",
            "plug",
            vec![
                NavItem::leaf("webhooks", "Webhooks", "plug"),
                NavItem::leaf("api", "API Access", "shield"),
            ],
        ),
    ]
}

fn regular_user_tree() -> Vec<NavItem> {
    vec![
        NavItem::leaf("dashboard", "Dashboard", "layout-dashboard"),
        NavItem::section(
            "profile",
            "Profile",
            "user",
            vec![
                NavItem::leaf("personal", "Personal Info", "user"),
                NavItem::leaf("security", "Security", "shield"),
                NavItem::leaf("preferences", "Preferences", "settings"),
            ],
        ),
        NavItem::section(
            "user-payment",
            "Payments",
            "credit-card",
            vec![
                NavItem::leaf("overview", "Overview", "layout-dashboard"),
                NavItem::leaf("methods", "Payment Methods", "credit-card"),
                NavItem::leaf("services", "Services", "package"),
                NavItem::leaf("history", "History", "file-text"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section_ids(tree: &[NavItem]) -> Vec<&'static str> {
        tree.iter()
            .filter(|item| item.is_section())
            .map(|item| item.id)
            .collect()
    }

    #[test]
    fn every_role_has_a_dashboard_leaf() {
        for role in Role::all() {
            let tree = nav_tree(Some(role));
            assert!(!tree.is_empty());
            assert!(
                tree.iter().any(|i| i.id == "dashboard" && !i.is_section()),
                "no dashboard leaf for {:?}",
                role
            );
        }
    }

    #[test]
    fn absent_role_gets_dashboard_only_tree() {
        let tree = nav_tree(None);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].id, "dashboard");
        assert!(!tree[0].is_section());
    }

    #[test]
    fn ids_are_unique_within_each_tree() {
        for role in Role::all() {
            let tree = nav_tree(Some(role));
            let mut seen = std::collections::HashSet::new();
            for item in &tree {
                assert!(seen.insert(item.id), "duplicate id {}", item.id);
                let mut child_seen = std::collections::HashSet::new();
                for child in &item.children {
                    assert!(child_seen.insert(child.id), "duplicate child id {}", child.id);
                }
            }
        }
    }

    #[test]
    fn trees_differ_per_role() {
        let admin = nav_tree(Some(Role::SuperAdmin));
        let owner = nav_tree(Some(Role::TenantOwner));
        let user = nav_tree(Some(Role::RegularUser));
        assert_ne!(admin, owner);
        assert_ne!(owner, user);
        assert_ne!(admin, user);
    }

    #[test]
    fn role_defaults_are_sections_of_that_roles_tree() {
        use crate::navigation::expansion::default_sections;
        for role in Role::all() {
            let ids = section_ids(&nav_tree(Some(role)));
            for default in default_sections(role) {
                assert!(
                    ids.contains(default),
                    "{} is not a section of the {:?} tree",
                    default,
                    role
                );
            }
        }
    }
}
