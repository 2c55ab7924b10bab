//! Helpers for the free-text amount field.
//!
//! The amount field stores whatever the user typed after it has been run
//! through [`sanitize_amount_input`]. Parsing is lenient: anything that isn't
//! a usable number reads as zero, which keeps the send button disabled
//! without ever surfacing a parse error.

/// Keeps ASCII digits and `.`, dropping everything else.
pub fn sanitize_amount_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Parses a sanitized amount, returning `0.0` for empty or malformed input.
///
/// Digit-only strings too long for an `f64` parse to infinity; those are kept
/// so they read as more than any balance.
pub fn parse_amount(input: &str) -> f64 {
    match input.parse::<f64>() {
        Ok(amount) if amount.is_nan() || amount < 0.0 => 0.0,
        Ok(amount) => amount,
        Err(_) => 0.0,
    }
}

pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_drops_everything_but_digits_and_dots() {
        assert_eq!(sanitize_amount_input("abc"), "");
        assert_eq!(sanitize_amount_input("12a.5b"), "12.5");
        assert_eq!(sanitize_amount_input("-100"), "100");
        assert_eq!(sanitize_amount_input("1,000"), "1000");
        assert_eq!(sanitize_amount_input(" 42 "), "42");
        assert_eq!(sanitize_amount_input("1e5"), "15");
        // Non-ASCII digits are dropped too
        assert_eq!(sanitize_amount_input("٣7"), "7");
    }

    #[test]
    fn sanitize_keeps_multiple_dots() {
        // Filtering is per character, the parser deals with the shape
        assert_eq!(sanitize_amount_input("1.2.3"), "1.2.3");
    }

    #[test]
    fn parse_is_lenient() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("."), 0.0);
        assert_eq!(parse_amount("1.2.3"), 0.0);
        assert_eq!(parse_amount("100"), 100.0);
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("7."), 7.0);
        assert_eq!(parse_amount("0"), 0.0);
    }

    #[test]
    fn parse_never_goes_negative() {
        for input in ["", "0", "00.00", "...", "5", "0.01", "999999"] {
            let amount = parse_amount(&sanitize_amount_input(input));
            assert!(amount >= 0.0, "{input} parsed to {amount}");
        }
    }

    #[test]
    fn huge_amounts_parse_to_infinity() {
        let digits = "9".repeat(400);
        assert!(parse_amount(&digits).is_infinite());
    }

    #[test]
    fn format_uses_two_decimals() {
        assert_eq!(format_amount(100.0), "100.00");
        assert_eq!(format_amount(0.5), "0.50");
        assert_eq!(format_amount(4899.999), "4900.00");
    }
}
