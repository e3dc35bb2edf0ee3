//! Money helpers shared by label rendering and catalog import

use rust_decimal::prelude::*;

/// Label prices always carry 2 fractional digits
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Round a price to 2 decimal places, half-up (midpoint away from zero)
pub fn round_price(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(PRICE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(PRICE_DECIMAL_PLACES);
    rounded
}

/// Format a price as `12.30`
pub fn format_price(value: Decimal) -> String {
    round_price(value).to_string()
}

/// Parse a price string as entered by an operator or exported by the catalog
///
/// Returns `None` for unparseable or non-finite input.
pub fn parse_price(input: &str) -> Option<Decimal> {
    let trimmed = input.trim().trim_start_matches('$');
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_half_up_rounding() {
        assert_eq!(format_price(dec("19.995")), "20.00");
        assert_eq!(format_price(dec("19.994")), "19.99");
        assert_eq!(format_price(dec("0.005")), "0.01");
        assert_eq!(format_price(dec("2.675")), "2.68");
    }

    #[test]
    fn test_always_two_digits() {
        assert_eq!(format_price(dec("5")), "5.00");
        assert_eq!(format_price(dec("5.1")), "5.10");
        assert_eq!(format_price(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("$12.50"), Some(dec("12.50")));
        assert_eq!(parse_price(" 3 "), Some(dec("3")));
        assert_eq!(parse_price("1e2"), Some(dec("100")));
        assert_eq!(parse_price("twelve"), None);
    }
}
