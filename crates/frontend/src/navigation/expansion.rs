//! Sidebar expansion state, persisted across page loads.
//!
//! The set of expanded section ids lives in localStorage under
//! `expandedNavSections` as a JSON list of strings, read and written as a
//! unit. A single tab is the only writer, so last-writer-wins is fine.
//!
//! Seeding: an empty persisted set is filled with the active role's
//! defaults before first render. Switching role does not clear sections
//! expanded under the previous role; the new role's defaults are unioned in.

use contracts::system::auth::Role;
use web_sys::window;

const STORAGE_KEY: &str = "expandedNavSections";

/// Ordered set of expanded section ids. Pure; persistence goes through
/// [`load`] and [`save`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpandedSections {
    ids: Vec<String>,
}

impl ExpandedSections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids(ids: Vec<String>) -> Self {
        let mut set = Self::new();
        for id in ids {
            if !set.is_expanded(&id) {
                set.ids.push(id);
            }
        }
        set
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_expanded(&self, section_id: &str) -> bool {
        self.ids.iter().any(|id| id == section_id)
    }

    pub fn toggle(&mut self, section_id: &str) {
        if let Some(pos) = self.ids.iter().position(|id| id == section_id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(section_id.to_string());
        }
    }

    /// First-load seeding: only an empty set receives the role defaults.
    pub fn seed_defaults(&mut self, role: Role) {
        if self.ids.is_empty() {
            self.union_defaults(role);
        }
    }

    /// Role-switch path: union the new role's defaults, keeping whatever was
    /// already expanded.
    pub fn union_defaults(&mut self, role: Role) {
        for id in default_sections(role) {
            if !self.is_expanded(id) {
                self.ids.push(id.to_string());
            }
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

/// Sections expanded by default on a fresh profile, per role.
pub fn default_sections(role: Role) -> &'static [&'static str] {
    match role {
        Role::SuperAdmin => &["admin-payment"],
        Role::TenantOwner => &["billing", "tenant-finance"],
        Role::RegularUser => &["user-payment"],
    }
}

/// Read the persisted set. Missing or malformed values yield an empty set.
pub fn load() -> ExpandedSections {
    let raw = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
    match raw {
        Some(text) => match serde_json::from_str::<Vec<String>>(&text) {
            Ok(ids) => ExpandedSections::from_ids(ids),
            Err(_) => {
                log::warn!("discarding malformed {} value", STORAGE_KEY);
                ExpandedSections::new()
            }
        },
        None => ExpandedSections::new(),
    }
}

/// Write the whole set back.
pub fn save(sections: &ExpandedSections) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let text = serde_json::to_string(sections.ids()).unwrap_or_else(|_| "[]".to_string());
        let _ = storage.set_item(STORAGE_KEY, &text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_membership() {
        let mut set = ExpandedSections::from_ids(vec!["billing".to_string()]);
        let before = set.clone();
        set.toggle("tenant-finance");
        assert!(set.is_expanded("tenant-finance"));
        set.toggle("tenant-finance");
        assert_eq!(set, before);
    }

    #[test]
    fn toggle_collapses_an_expanded_section() {
        let mut set = ExpandedSections::from_ids(vec!["billing".to_string()]);
        set.toggle("billing");
        assert!(!set.is_expanded("billing"));
        assert!(set.is_empty());
    }

    #[test]
    fn seeding_only_fills_an_empty_set() {
        let mut empty = ExpandedSections::new();
        empty.seed_defaults(Role::TenantOwner);
        assert!(empty.is_expanded("billing"));
        assert!(empty.is_expanded("tenant-finance"));

        let mut nonempty = ExpandedSections::from_ids(vec!["users".to_string()]);
        nonempty.seed_defaults(Role::TenantOwner);
        assert_eq!(nonempty.ids(), ["users".to_string()]);
    }

    #[test]
    fn role_switch_unions_without_clearing() {
        let mut set = ExpandedSections::new();
        set.seed_defaults(Role::TenantOwner);
        set.toggle("integrations");

        // switch to another role: previous sections survive
        set.union_defaults(Role::SuperAdmin);
        assert!(set.is_expanded("billing"));
        assert!(set.is_expanded("integrations"));
        assert!(set.is_expanded("admin-payment"));
    }

    #[test]
    fn from_ids_deduplicates_preserving_order() {
        let set = ExpandedSections::from_ids(vec![
            "a".to_string(),
            "b".to_string(),
            "a".to_string(),
        ]);
        assert_eq!(set.ids(), ["a".to_string(), "b".to_string()]);
    }
}
