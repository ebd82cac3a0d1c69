/// Utility functions

/// Round to a fixed number of decimal digits
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

/// Present only when set and nonzero, the way the detail view treats "Unknown"
pub fn known(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// Present only when set and not blank
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Format a number with comma thousands separators, keeping up to three decimals
pub fn group_thousands(value: f64) -> String {
    let rounded = round_to(value, 3);
    let sign = if rounded < 0.0 { "-" } else { "" };
    let text = format!("{}", rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Kilometres to "x.xx million km"
pub fn million_km(km: f64) -> String {
    format!("{:.2} million km", km / 1_000_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_two_digits() {
        assert_eq!(round_to(1.004, 2), 1.0);
        assert_eq!(round_to(149.598, 2), 149.6);
        assert_eq!(round_to(39.4821, 2), 39.48);
    }

    #[test]
    fn test_round_to_one_digit() {
        assert_eq!(round_to(287.26, 1), 287.3);
        assert_eq!(round_to(-3.14, 1), -3.1);
    }

    #[test]
    fn test_known_filters_zero() {
        assert_eq!(known(Some(0.0)), None);
        assert_eq!(known(None), None);
        assert_eq!(known(Some(3.7)), Some(3.7));
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(Some("1930")), Some("1930"));
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(6371.0084), "6,371.008");
        assert_eq!(group_thousands(69911.0), "69,911");
        assert_eq!(group_thousands(687.0), "687");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
        assert_eq!(group_thousands(-5832.5), "-5,832.5");
    }

    #[test]
    fn test_million_km() {
        assert_eq!(million_km(149598023.0), "149.60 million km");
        assert_eq!(million_km(57909050.0), "57.91 million km");
    }
}
