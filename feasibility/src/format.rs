//! Number formatting for the summary narrative

/// Format `value` with `decimals` fraction digits and comma thousands separators
///
/// ```
/// use feasibility::format::format_number;
///
/// assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
/// assert_eq!(format_number(-950.0, 0), "-950");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // A value that rounds to zero is printed without a sign
    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format a currency amount with two decimals, e.g. `Rp 1,500.00`
pub fn format_currency(symbol: &str, amount: f64) -> String {
    let number = format_number(amount.abs(), 2);
    if amount < 0.0 && number.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("-{} {}", symbol, number)
    } else {
        format!("{} {}", symbol, number)
    }
}
