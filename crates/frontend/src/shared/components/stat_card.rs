use leptos::prelude::*;

use crate::shared::format::{format_money, format_thousands};
use crate::shared::icons::icon;

/// How a stat card renders its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Money,
    Count,
    Percent,
}

fn format_value(value: f64, format: ValueFormat) -> String {
    match format {
        ValueFormat::Money => format_money(value, "USD"),
        ValueFormat::Count => format_thousands(value as i64),
        ValueFormat::Percent => format!("{:.1}%", value),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Primary numeric value (None = still loading)
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: ValueFormat,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__header">
                <span class="stat-card__label">{label}</span>
                {icon(icon_name)}
            </div>
            <div class="stat-card__value">
                {move || match value.get() {
                    Some(v) => format_value(v, format),
                    None => "\u{2014}".to_string(),
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_formats() {
        assert_eq!(format_value(48250.75, ValueFormat::Money), "$48,250.75");
        assert_eq!(format_value(1318.0, ValueFormat::Count), "1,318");
        assert_eq!(format_value(4.35, ValueFormat::Percent), "4.3%");
    }
}
