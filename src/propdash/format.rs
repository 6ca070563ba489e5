//! Display formatting helpers shared by the table renderers, the CSV
//! exporter and receipt generation.

use chrono::NaiveDate;

/// Whole-dollar currency with thousands separators, e.g. `$28,800`.
pub fn format_currency(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// One decimal place with an explicit sign, e.g. `+12.5%` / `-2.1%`.
pub fn format_percent(delta: f64) -> String {
    format!("{:+.1}%", delta)
}

/// `Jan 15, 2024` style dates.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
