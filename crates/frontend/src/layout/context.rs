use leptos::prelude::*;

/// Chrome-level UI state shared across layout components.
#[derive(Clone, Copy)]
pub struct UiContext {
    pub sidebar_open: RwSignal<bool>,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}
