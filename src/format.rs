//! Display helpers for currency and dates, en-US conventions.

use chrono::{DateTime, Utc};

/// Format an amount in cents as US dollars, e.g. `15795` → `$157.95`.
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = group_thousands(abs / 100);

    format!("{sign}${dollars}.{:02}", abs % 100)
}

/// Format a date the way the dashboard tables show it, e.g. `Dec 6, 2022`.
pub fn format_date_to_local(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
