//! Date and money formatting shared across screens.

/// Format a UTC timestamp as `YYYY-MM-DD HH:MM`.
pub fn format_datetime(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Format a UTC timestamp as `YYYY-MM-DD`.
pub fn format_date(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Format an amount with its currency, e.g. `-$1,250.00` for USD.
/// Unknown currencies fall back to the code as a suffix.
pub fn format_money(amount: f64, currency: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();
    let int_part = abs.trunc() as i64;
    let cents = (abs.fract() * 100.0).round() as i64;
    let grouped = format_thousands(int_part);
    match currency {
        "USD" => format!("{}${}.{:02}", sign, grouped, cents),
        "EUR" => format!("{}\u{20ac}{}.{:02}", sign, grouped, cents),
        other => format!("{}{}.{:02} {}", sign, grouped, cents, other),
    }
}

/// Group an integer with comma separators.
pub fn format_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if n < 0 {
        grouped.push('-');
    }
    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(48250), "48,250");
        assert_eq!(format_thousands(1_000_000), "1,000,000");
        assert_eq!(format_thousands(-1234), "-1,234");
    }

    #[test]
    fn money_formatting() {
        assert_eq!(format_money(499.0, "USD"), "$499.00");
        assert_eq!(format_money(48250.75, "USD"), "$48,250.75");
        assert_eq!(format_money(-129.0, "USD"), "-$129.00");
        assert_eq!(format_money(10.5, "GBP"), "10.50 GBP");
    }

    #[test]
    fn cents_rounding_does_not_drift() {
        assert_eq!(format_money(0.1 + 0.2, "USD"), "$0.30");
    }

    #[test]
    fn datetime_formatting() {
        let dt: chrono::DateTime<chrono::Utc> = "2025-06-12T09:14:00Z".parse().unwrap();
        assert_eq!(format_datetime(dt), "2025-06-12 09:14");
        assert_eq!(format_date(dt), "2025-06-12");
    }
}
