/// Formats an amount for a currency metric card, e.g. `₹1,234.50`.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;
    let sign = if negative { "-" } else { "" };
    format!("{}₹{}.{:02}", sign, group_thousands(whole), fraction)
}

/// Formats a 0-100 rate with one decimal, e.g. `48.2%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Formats a count with thousands separators, e.g. `1,234`.
pub fn format_count(value: u64) -> String {
    group_thousands(value)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
