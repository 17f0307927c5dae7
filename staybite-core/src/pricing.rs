//! Price handling for the booking card.
//!
//! Two different figures exist side by side and must not be conflated:
//! the on-screen total is scaled by the selected night count, while the
//! amount actually submitted with a booking is the listing's flat price.

/// How a listing's price is quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateBasis {
    /// PG rent, quoted per month.
    Monthly,
    /// Room rate, quoted per night.
    Nightly,
}

/// Pull the numeric value out of a display-formatted price such as "₹6,527".
/// Returns None when the string carries no digits at all.
pub fn parse_display_price(display: &str) -> Option<i64> {
    let digits: String = display.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// The amount submitted with a booking: the canonical numeric field when the
/// server provides one, otherwise the digits of the display string. Flat per
/// listing, independent of night count.
pub fn flat_amount(numeric: Option<i64>, display: &str) -> Option<i64> {
    numeric.or_else(|| parse_display_price(display))
}

/// Estimated stay total shown under the date pickers. Display only; never
/// sent to the server.
pub fn estimate_total(price: i64, basis: RateBasis, nights: i64) -> i64 {
    match basis {
        RateBasis::Monthly => (price as f64 / 30.0 * nights as f64).round() as i64,
        RateBasis::Nightly => price * nights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rupee_display_strings() {
        assert_eq!(parse_display_price("₹6,527"), Some(6527));
        assert_eq!(parse_display_price("₹6,527/month"), Some(6527));
        assert_eq!(parse_display_price("6000"), Some(6000));
        assert_eq!(parse_display_price("price on request"), None);
        assert_eq!(parse_display_price(""), None);
    }

    #[test]
    fn numeric_field_wins_over_display_string() {
        assert_eq!(flat_amount(Some(7000), "₹6,527"), Some(7000));
        assert_eq!(flat_amount(None, "₹6,527"), Some(6527));
        assert_eq!(flat_amount(None, "call us"), None);
    }

    #[test]
    fn monthly_estimate_is_prorated_per_night() {
        // ₹6,000/month over 3 nights -> 6000 / 30 * 3 = 600
        assert_eq!(estimate_total(6000, RateBasis::Monthly, 3), 600);
        // Rounded, not truncated: 6500 / 30 * 7 = 1516.66...
        assert_eq!(estimate_total(6500, RateBasis::Monthly, 7), 1517);
    }

    #[test]
    fn nightly_estimate_multiplies_straight_through() {
        assert_eq!(estimate_total(1200, RateBasis::Nightly, 5), 6000);
        assert_eq!(estimate_total(1200, RateBasis::Nightly, 0), 0);
    }

    #[test]
    fn flat_amount_ignores_night_count() {
        // A "₹6,000" listing with a 5-night selection still submits 6000.
        let submitted = flat_amount(None, "₹6,000").unwrap();
        assert_eq!(submitted, 6000);
        assert_ne!(submitted, estimate_total(6000, RateBasis::Nightly, 5));
    }
}
