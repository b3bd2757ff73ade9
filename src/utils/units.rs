//! Display formatting helpers for prices and capacities

/// Format an amount in yuan with two decimals and thousands separators,
/// e.g. `16750.8` -> `"¥16,750.80"`.
pub fn format_yuan(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let cents = (rounded.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-¥{grouped}.{frac:02}")
    } else {
        format!("¥{grouped}.{frac:02}")
    }
}

/// Format a capacity in GB, switching to TB above 1024.
pub fn format_gb(gb: u64) -> String {
    if gb >= 1024 {
        format!("{:.1}TB", gb as f64 / 1024.0)
    } else {
        format!("{gb}GB")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_yuan() {
        assert_eq!(format_yuan(25.85), "¥25.85");
        assert_eq!(format_yuan(16750.8), "¥16,750.80");
        assert_eq!(format_yuan(0.0), "¥0.00");
        assert_eq!(format_yuan(1234567.891), "¥1,234,567.89");
    }

    #[test]
    fn test_format_yuan_rounds_half_up() {
        assert_eq!(format_yuan(0.005), "¥0.01");
        assert_eq!(format_yuan(2.499), "¥2.50");
    }

    #[test]
    fn test_format_gb() {
        assert_eq!(format_gb(50), "50GB");
        assert_eq!(format_gb(1024), "1.0TB");
        assert_eq!(format_gb(1536), "1.5TB");
    }
}
