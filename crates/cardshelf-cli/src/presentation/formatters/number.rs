/// `$1,234.50` style price text.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "-".to_string();
    }

    let cents = (price.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let sign = if price < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, whole, cents % 100)
}

/// Whole quantities print without a fraction.
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.is_finite() {
        format!("{}", quantity as i64)
    } else {
        format!("{}", quantity)
    }
}

pub fn format_extent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(2.0), "$2.00");
        assert_eq!(format_price(4.5), "$4.50");
        assert_eq!(format_price(1200.0), "$1,200.00");
        assert_eq!(format_price(1234567.891), "$1,234,567.89");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(-3.0), "-$3.00");
        assert_eq!(format_price(f64::NAN), "-");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(3.0), "3");
        assert_eq!(format_quantity(2.5), "2.5");
    }
}
