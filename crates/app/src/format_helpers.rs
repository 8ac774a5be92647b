/// Shared formatting utilities for the UI layer.
use chrono::{DateTime, Utc};

/// Format a timestamp as "Mar 20, 2024". Missing dates render "N/A".
pub fn format_date(date: Option<&DateTime<Utc>>) -> String {
    match date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// Convert a SCREAMING_SNAKE or snake_case code to Title Case
/// (e.g. "PAID_HELD_BY_PLATFORM" → "Paid Held By Platform").
pub fn format_snake_case_title(s: &str) -> String {
    s.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// "180 GSM", or "GSM n/a" when unknown.
pub fn format_gsm(gsm: Option<f64>) -> String {
    match gsm {
        Some(g) if g.fract() == 0.0 => format!("{g:.0} GSM"),
        Some(g) => format!("{g:.1} GSM"),
        None => "GSM n/a".to_string(),
    }
}

/// Text for an optional field, falling back to "-".
pub fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "-",
    }
}
