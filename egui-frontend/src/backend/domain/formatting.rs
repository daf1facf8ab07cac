//! Display formatting for dashboard values.

/// Format an amount as dollars with thousands separators, e.g. `$6,000.00` or `-$450.00`
pub fn format_currency(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    // Negative values that round to zero print without a sign
    let sign = if amount < 0.0 && formatted.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };

    format!("{}${}.{}", sign, group_thousands(whole), cents)
}

/// Format a percentage with a fixed number of decimals, e.g. `62.5%`
pub fn format_percent(percent: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, percent)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(6000.0), "$6,000.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(999.5), "$999.50");
    }

    #[test]
    fn test_format_currency_small_and_zero() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(7.0), "$7.00");
        assert_eq!(format_currency(100000.0), "$100,000.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-450.0), "-$450.00");
        assert_eq!(format_currency(-1500.25), "-$1,500.25");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(100.0, 1), "100.0%");
        assert_eq!(format_percent(62.54, 1), "62.5%");
        assert_eq!(format_percent(62.4, 0), "62%");
        assert_eq!(format_percent(0.0, 0), "0%");
    }
}
