//! Hash-fragment router.
//!
//! Route state is a single current-page string mirrored into the URL
//! fragment. Transitions fire on user navigation, browser back/forward
//! (`hashchange`), and programmatic redirects after login/logout. History
//! pushes are suppressed for back/forward so the stack never gets duplicate
//! entries; the planning step is pure and tested below.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

pub const DEFAULT_ROUTE: &str = "dashboard";

/// What triggered a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSource {
    /// Click on a sidebar or tab link.
    UserAction,
    /// Browser back/forward, observed as `hashchange`.
    PopState,
    /// Programmatic redirect (after login/logout).
    Redirect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub target: String,
    /// Whether the fragment should be written (which creates a history
    /// entry). Always false for back/forward.
    pub push: bool,
}

/// Strip the `#` and surrounding slashes; empty means the default route.
pub fn normalize(route: &str) -> String {
    let trimmed = route.trim_start_matches('#').trim_matches('/');
    if trimmed.is_empty() {
        DEFAULT_ROUTE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Pure transition planning. `None` means the navigation is a no-op (same
/// route) — this is also what breaks the echo when a programmatic fragment
/// write comes back around as a `hashchange` event.
pub fn plan_transition(current: &str, target: &str, source: NavSource) -> Option<Transition> {
    let target = normalize(target);
    if current == target {
        return None;
    }
    Some(Transition {
        target,
        push: source != NavSource::PopState,
    })
}

/// Context owning the current route. Cheap to copy; provided once at the
/// application root.
#[derive(Clone, Copy)]
pub struct RouterContext {
    pub current: RwSignal<String>,
}

impl RouterContext {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(read_fragment()),
        }
    }

    /// Register the `hashchange` listener. The listener lives as long as the
    /// page; there is no teardown path.
    pub fn init_history_integration(&self) {
        let this = *self;
        let on_hashchange = Closure::<dyn FnMut()>::new(move || {
            let route = read_fragment();
            this.apply(&route, NavSource::PopState);
        });
        if let Some(w) = window() {
            let _ = w.add_event_listener_with_callback(
                "hashchange",
                on_hashchange.as_ref().unchecked_ref(),
            );
        }
        on_hashchange.forget();
    }

    pub fn navigate(&self, target: &str) {
        self.apply(target, NavSource::UserAction);
    }

    pub fn redirect(&self, target: &str) {
        self.apply(target, NavSource::Redirect);
    }

    fn apply(&self, target: &str, source: NavSource) {
        let current = self.current.get_untracked();
        if let Some(transition) = plan_transition(&current, target, source) {
            leptos::logging::log!("route: {} -> {}", current, transition.target);
            self.current.set(transition.target.clone());
            if transition.push {
                write_fragment(&transition.target);
            }
        }
    }
}

impl Default for RouterContext {
    fn default() -> Self {
        Self::new()
    }
}

fn read_fragment() -> String {
    let hash = window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    normalize(&hash)
}

fn write_fragment(route: &str) {
    if let Some(w) = window() {
        let _ = w.location().set_hash(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal model of the browser history stack: a push truncates the
    /// forward tail, back/forward only move the cursor.
    struct FakeHistory {
        entries: Vec<String>,
        pos: usize,
    }

    impl FakeHistory {
        fn new(initial: &str) -> Self {
            Self {
                entries: vec![initial.to_string()],
                pos: 0,
            }
        }

        fn apply(&mut self, transition: &Transition) {
            if transition.push {
                self.entries.truncate(self.pos + 1);
                self.entries.push(transition.target.clone());
                self.pos += 1;
            }
        }

        fn back(&mut self) -> String {
            self.pos -= 1;
            self.entries[self.pos].clone()
        }
    }

    #[test]
    fn user_navigation_pushes_a_history_entry() {
        let transition =
            plan_transition("dashboard", "billing/overview", NavSource::UserAction).unwrap();
        assert!(transition.push);
        assert_eq!(transition.target, "billing/overview");
    }

    #[test]
    fn navigating_to_the_current_route_is_a_noop() {
        assert_eq!(
            plan_transition("billing/overview", "billing/overview", NavSource::UserAction),
            None
        );
        // the hashchange echo of a programmatic write hits this same path
        assert_eq!(
            plan_transition("billing/overview", "#billing/overview", NavSource::PopState),
            None
        );
    }

    #[test]
    fn back_after_two_forward_navigations_restores_the_first_route() {
        let mut history = FakeHistory::new("dashboard");
        let mut current = "dashboard".to_string();

        for target in ["billing/overview", "billing/payments"] {
            let transition = plan_transition(&current, target, NavSource::UserAction).unwrap();
            history.apply(&transition);
            current = transition.target;
        }
        assert_eq!(history.entries.len(), 3);

        // browser back: state follows, no new entry
        let restored = history.back();
        let transition = plan_transition(&current, &restored, NavSource::PopState).unwrap();
        assert!(!transition.push);
        history.apply(&transition);
        current = transition.target;
        assert_eq!(current, "billing/overview");
        assert_eq!(history.entries.len(), 3);

        let restored = history.back();
        let transition = plan_transition(&current, &restored, NavSource::PopState).unwrap();
        assert!(!transition.push);
        assert_eq!(transition.target, "dashboard");
    }

    #[test]
    fn redirects_push_like_user_actions() {
        let transition = plan_transition("billing/payments", "dashboard", NavSource::Redirect).unwrap();
        assert!(transition.push);
    }

    #[test]
    fn normalize_handles_fragment_noise() {
        assert_eq!(normalize("#billing/overview"), "billing/overview");
        assert_eq!(normalize("#/billing/overview/"), "billing/overview");
        assert_eq!(normalize(""), DEFAULT_ROUTE);
        assert_eq!(normalize("#"), DEFAULT_ROUTE);
    }
}
