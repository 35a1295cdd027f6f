//! Floor-division helpers and fixed-width digit codecs.
//!
//! Calendar carries depend on floor semantics: for a positive divisor the
//! remainder is always in `[0, divisor)`, even for negative dividends.
//! Truncating division would corrupt carries of negative durations.

use crate::lexer::LexicalError;
use crate::types::{Fraction, MAX_FRACTION_DIGITS};

/// Largest magnitude accepted for an integer component of a literal.
pub const MAX_COMPONENT: i64 = i32::MAX as i64;

/// Floor of `dividend / divisor`. `divisor` must be positive.
pub fn fquotient(dividend: i64, divisor: i64) -> i64 {
    dividend.div_euclid(divisor)
}

/// Remainder matching [`fquotient`], always in `[0, divisor)`.
pub fn modulo(dividend: i64, divisor: i64) -> i64 {
    dividend.rem_euclid(divisor)
}

/// Quotient for a value cycling through `[low, high)`.
pub fn fquotient_range(value: i64, low: i64, high: i64) -> i64 {
    fquotient(value - low, high - low)
}

/// `value` wrapped into `[low, high)`.
pub fn modulo_range(value: i64, low: i64, high: i64) -> i64 {
    modulo(value - low, high - low) + low
}

/// Decodes `bytes[start..end]`, which must be a non-empty run of digits.
pub fn parse_digits(bytes: &[u8], start: usize, end: usize) -> Result<i64, LexicalError> {
    if start >= end || end > bytes.len() {
        return Err(LexicalError::new("expected digits", start));
    }
    let mut value: i64 = 0;
    for (i, &byte) in bytes[start..end].iter().enumerate() {
        if !byte.is_ascii_digit() {
            return Err(LexicalError::new("expected a digit", start + i));
        }
        value = value * 10 + i64::from(byte - b'0');
        if value > MAX_COMPONENT {
            return Err(LexicalError::new("numeric component out of range", start));
        }
    }
    Ok(value)
}

/// Decodes the digits after a decimal point.
pub fn parse_fraction(bytes: &[u8], start: usize, end: usize) -> Result<Fraction, LexicalError> {
    if start >= end || end > bytes.len() {
        return Err(LexicalError::new("expected fractional digits", start));
    }
    if end - start > MAX_FRACTION_DIGITS {
        return Err(LexicalError::new("too many fractional digits", start));
    }
    let mut numerator: i64 = 0;
    for (i, &byte) in bytes[start..end].iter().enumerate() {
        if !byte.is_ascii_digit() {
            return Err(LexicalError::new("expected a digit", start + i));
        }
        numerator = numerator * 10 + i64::from(byte - b'0');
    }
    Ok(Fraction::new(numerator, (end - start) as u8))
}

/// Appends `value` zero-padded to `width` digits, with a leading `-` when
/// negative.
pub fn append_padded(buf: &mut String, value: i64, width: usize) {
    if value < 0 {
        buf.push('-');
    }
    buf.push_str(&format!("{:0width$}", value.unsigned_abs()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn floor_division_on_negative_dividends() {
        assert_eq!(fquotient(-1, 60), -1);
        assert_eq!(modulo(-1, 60), 59);
        assert_eq!(fquotient(-60, 60), -1);
        assert_eq!(modulo(-60, 60), 0);
        assert_eq!(fquotient(59, 60), 0);
    }

    #[test]
    fn month_range_wraps_cyclically() {
        assert_eq!(modulo_range(13, 1, 13), 1);
        assert_eq!(fquotient_range(13, 1, 13), 1);
        assert_eq!(modulo_range(0, 1, 13), 12);
        assert_eq!(fquotient_range(0, 1, 13), -1);
        assert_eq!(modulo_range(-11, 1, 13), 1);
        assert_eq!(fquotient_range(-11, 1, 13), -1);
        assert_eq!(modulo_range(12, 1, 13), 12);
        assert_eq!(fquotient_range(12, 1, 13), 0);
    }

    #[test]
    fn parse_digits_rejects_empty_and_overflow() {
        assert_eq!(parse_digits(b"P12Y", 1, 3).unwrap(), 12);
        assert!(parse_digits(b"PY", 1, 1).is_err());
        assert!(parse_digits(b"1a", 0, 2).is_err());
        assert_eq!(parse_digits(b"2147483647", 0, 10).unwrap(), MAX_COMPONENT);
        assert!(parse_digits(b"2147483648", 0, 10).is_err());
        assert!(parse_digits(b"99999999999999999999999", 0, 23).is_err());
    }

    #[test]
    fn parse_fraction_limits_precision() {
        assert_eq!(parse_fraction(b"0500", 0, 4).unwrap(), Fraction::new(5, 1));
        assert!(parse_fraction(b"1234567890123456789", 0, 19).is_err());
        assert_eq!(
            parse_fraction(b"123456789012345678", 0, 18).unwrap().scale(),
            18
        );
    }

    #[test]
    fn append_padded_handles_sign() {
        let mut buf = String::new();
        append_padded(&mut buf, 5, 2);
        buf.push(' ');
        append_padded(&mut buf, -45, 4);
        buf.push(' ');
        append_padded(&mut buf, 123456, 4);
        assert_eq!(buf, "05 -0045 123456");
    }

    proptest! {
        #[test]
        fn prop_floor_division_identity(d in -1_000_000_000i64..1_000_000_000, r in 1i64..100_000) {
            let q = fquotient(d, r);
            let m = modulo(d, r);
            prop_assert!((0..r).contains(&m));
            prop_assert_eq!(d, q * r + m);
        }

        #[test]
        fn prop_ranged_modulo_stays_in_range(v in -100_000i64..100_000, low in -50i64..50, span in 1i64..50) {
            let high = low + span;
            let m = modulo_range(v, low, high);
            prop_assert!(m >= low && m < high);
            prop_assert_eq!(v, fquotient_range(v, low, high) * span + m);
        }
    }
}
