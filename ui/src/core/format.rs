//! Formatting helpers for presenting amounts and account numbers.

/// `1234.5` -> `$1,234.50`; negative values keep the sign in front.
pub fn format_amount(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);
    format!("{sign}${}.{frac:02}", group_thousands(whole))
}

/// Last four digits behind a mask, e.g. `•••••• 1234`.
pub fn format_account_number(number: u32) -> String {
    format!("•••••• {:04}", number % 10_000)
}

/// Share of `part` in `total` as a percentage in `0.0..=100.0`.
pub fn proportion(part: f64, total: f64) -> f64 {
    if total <= 0.0 || !total.is_finite() {
        return 0.0;
    }
    (part / total * 100.0).clamp(0.0, 100.0)
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
