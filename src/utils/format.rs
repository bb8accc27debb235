/// Comma-grouped decimal rendering, e.g. 1234567 -> "1,234,567".
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// "$X.XX Trillion" with two decimals; the caller decides when a value is N/A.
pub fn usd_trillions(trillions: f64) -> String {
    format!("${:.2} Trillion", trillions)
}

/// Page slug for a country name: lowercased, spaces to hyphens, suffixed
/// "-population". An empty name degenerates to "-population".
pub fn page_slug(name: &str) -> String {
    format!("{}-population", name.to_lowercase().replace(' ', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_commas() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(7), "7");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_234), "1,234");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(50_000_000), "50,000,000");
        assert_eq!(group_thousands(1_409_670_000), "1,409,670,000");
    }

    #[test]
    fn groups_negative_values() {
        assert_eq!(group_thousands(-5_000), "-5,000");
    }

    #[test]
    fn renders_trillions_with_two_decimals() {
        assert_eq!(usd_trillions(2.5), "$2.50 Trillion");
        assert_eq!(usd_trillions(3.0), "$3.00 Trillion");
        assert_eq!(usd_trillions(14.722731), "$14.72 Trillion");
    }

    #[test]
    fn slugifies_country_names() {
        assert_eq!(page_slug("Testland"), "testland-population");
        assert_eq!(page_slug("United States"), "united-states-population");
        assert_eq!(page_slug(""), "-population");
    }
}
