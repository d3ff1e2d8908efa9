//! Amount field parsing
//!
//! Amount fields are read with a leading-numeric-prefix parse: whatever
//! decimal number starts the input is taken and the remainder is ignored.
//! `"12.5x"` reads as 12.5. This is deliberately not a strict parser.

/// Parse the longest leading decimal number in `input`
///
/// Leading whitespace and a single sign are accepted, as are a fractional part
/// and an exponent. Returns `None` when no digits start the input.
pub fn parse_leading_decimal(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let sign = if s.starts_with('-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].trim_end_matches('.').parse::<f64>().ok()
}

/// Whether a major-unit value can be held as whole cents without saturating
pub fn fits_in_cents(value: f64) -> bool {
    value.is_finite() && (value * 100.0).round().abs() < i64::MAX as f64
}

/// Guard shared by every amount step: non-empty, strictly positive and
/// representable in cents
pub fn is_positive_amount(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }
    matches!(parse_leading_decimal(input), Some(v) if fits_in_cents(v) && v > 0.0)
}

/// Parse the leading integer in `input`, yielding 0 when there is none
///
/// `"12.9"` reads as 12 and `"abc"` as 0. Values past the `i64` range also
/// read as 0.
pub fn parse_leading_int_or_zero(input: &str) -> i64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return 0;
    }

    s[..end].parse::<i64>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_leading_decimal("5"), Some(5.0));
        assert_eq!(parse_leading_decimal("5.00"), Some(5.0));
        assert_eq!(parse_leading_decimal("-5"), Some(-5.0));
        assert_eq!(parse_leading_decimal("  42"), Some(42.0));
        assert_eq!(parse_leading_decimal(".5"), Some(0.5));
        assert_eq!(parse_leading_decimal("5."), Some(5.0));
    }

    #[test]
    fn test_trailing_garbage_is_ignored() {
        assert_eq!(parse_leading_decimal("5x"), Some(5.0));
        assert_eq!(parse_leading_decimal("12.5x"), Some(12.5));
        assert_eq!(parse_leading_decimal("1,000"), Some(1.0));
        assert_eq!(parse_leading_decimal("3.2.1"), Some(3.2));
    }

    #[test]
    fn test_exponent() {
        assert_eq!(parse_leading_decimal("1e3"), Some(1000.0));
        assert_eq!(parse_leading_decimal("2E-1"), Some(0.2));
        // Dangling exponent marker is garbage
        assert_eq!(parse_leading_decimal("7e"), Some(7.0));
        assert_eq!(parse_leading_decimal("7e+"), Some(7.0));
    }

    #[test]
    fn test_no_numeric_prefix() {
        assert_eq!(parse_leading_decimal(""), None);
        assert_eq!(parse_leading_decimal("abc"), None);
        assert_eq!(parse_leading_decimal("-"), None);
        assert_eq!(parse_leading_decimal("."), None);
        assert_eq!(parse_leading_decimal("$5"), None);
    }

    #[test]
    fn test_infinity() {
        assert_eq!(parse_leading_decimal("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_leading_decimal("-Infinityx"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_positive_amount_guard() {
        assert!(!is_positive_amount(""));
        assert!(!is_positive_amount("0"));
        assert!(!is_positive_amount("-5"));
        assert!(!is_positive_amount("abc"));
        assert!(!is_positive_amount("Infinity"));
        assert!(!is_positive_amount("1e300"));
        assert!(!is_positive_amount("92233720368547758.08"));
        assert!(is_positive_amount("5"));
        assert!(is_positive_amount("5.00"));
        // Inherited laxity: the numeric prefix is enough
        assert!(is_positive_amount("5x"));
        assert!(is_positive_amount("1e9"));
    }

    #[test]
    fn test_cents_range() {
        assert!(fits_in_cents(1e15));
        assert!(fits_in_cents(-1e15));
        assert!(!fits_in_cents(1e300));
        assert!(!fits_in_cents(f64::NAN));
    }

    #[test]
    fn test_leading_int_or_zero() {
        assert_eq!(parse_leading_int_or_zero("5000"), 5000);
        assert_eq!(parse_leading_int_or_zero("12.9"), 12);
        assert_eq!(parse_leading_int_or_zero(" 250x"), 250);
        assert_eq!(parse_leading_int_or_zero("-5"), -5);
        assert_eq!(parse_leading_int_or_zero("abc"), 0);
        assert_eq!(parse_leading_int_or_zero(""), 0);
        assert_eq!(parse_leading_int_or_zero("1e3"), 1);
        assert_eq!(parse_leading_int_or_zero("99999999999999999999"), 0);
    }
}
