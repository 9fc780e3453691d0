use tracing::debug;

use crate::error::{CurrencyError, CurrencyResult};

/// Group the digits of a decimal string the Indian way.
///
/// Accepts an optional leading `+` or `-`, an integer part of ASCII digits
/// and an optional `.`-separated fractional part, which is kept verbatim.
/// An empty fractional part (`"12."`) is dropped. Leading zeros are kept.
pub fn format_indian(input: &str) -> CurrencyResult<String> {
    let trimmed = input.trim();
    let (sign, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("+", &trimmed[1..]),
        _ => ("", trimmed),
    };

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (unsigned, ""),
    };

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if integer.is_empty() || !is_digits(integer) || !is_digits(fraction) {
        debug!(input, "rejected non-numeric input");
        return Err(CurrencyError::InvalidNumber(input.to_string()));
    }

    let mut out = String::with_capacity(trimmed.len() + integer.len() / 2);
    out.push_str(sign);
    out.push_str(&group_integer(integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    Ok(out)
}

/// Format a float using its shortest round-trip decimal representation.
pub fn format_indian_f64(value: f64) -> CurrencyResult<String> {
    if !value.is_finite() {
        return Err(CurrencyError::NonFinite(value.to_string()));
    }
    format_indian(&value.to_string())
}

/// Format an integer.
pub fn format_indian_int(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}{}", group_integer(&digits))
}

// Last three digits, then pairs.
fn group_integer(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::with_capacity(head.len() / 2 + 2);

    let mut start = head.len() % 2;
    if start == 1 {
        groups.push(&head[..1]);
    }
    while start < head.len() {
        groups.push(&head[start..start + 2]);
        start += 2;
    }
    groups.push(last_three);

    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn lakh_with_fraction() {
        assert_eq!(format_indian("123456.7891").unwrap(), "1,23,456.7891");
    }

    #[test]
    fn short_numbers_unchanged() {
        assert_eq!(format_indian("0").unwrap(), "0");
        assert_eq!(format_indian("999").unwrap(), "999");
        assert_eq!(format_indian("12.5").unwrap(), "12.5");
    }

    #[test]
    fn thousands_and_crores() {
        assert_eq!(format_indian("1000").unwrap(), "1,000");
        assert_eq!(format_indian("12345").unwrap(), "12,345");
        assert_eq!(format_indian("1234567").unwrap(), "12,34,567");
        assert_eq!(format_indian("123456789").unwrap(), "12,34,56,789");
        assert_eq!(format_indian("1234567890").unwrap(), "1,23,45,67,890");
    }

    #[test]
    fn sign_stays_in_front() {
        assert_eq!(format_indian("-12345").unwrap(), "-12,345");
        assert_eq!(format_indian("-123").unwrap(), "-123");
        assert_eq!(format_indian("+100000").unwrap(), "+1,00,000");
    }

    #[test]
    fn empty_fraction_dropped() {
        assert_eq!(format_indian("1234.").unwrap(), "1,234");
    }

    #[test]
    fn leading_zeros_kept() {
        assert_eq!(format_indian("0001234").unwrap(), "00,01,234");
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert_eq!(format_indian("  123456 ").unwrap(), "1,23,456");
    }

    #[test]
    fn invalid_inputs() {
        for bad in ["", "-", ".5", "12a4", "1.2.3", "1,000", "1e6", "--1"] {
            assert_eq!(
                format_indian(bad),
                Err(CurrencyError::InvalidNumber(bad.to_string())),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn from_float() {
        assert_eq!(format_indian_f64(123456.7891).unwrap(), "1,23,456.7891");
        assert_eq!(format_indian_f64(-1500000.0).unwrap(), "-15,00,000");
        assert_eq!(format_indian_f64(0.25).unwrap(), "0.25");
    }

    #[test]
    fn non_finite_float_rejected() {
        assert!(matches!(
            format_indian_f64(f64::NAN),
            Err(CurrencyError::NonFinite(_))
        ));
        assert!(format_indian_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn from_int() {
        assert_eq!(format_indian_int(0), "0");
        assert_eq!(format_indian_int(10_000_000), "1,00,00,000");
        assert_eq!(format_indian_int(-987_654_321), "-98,76,54,321");
        assert_eq!(
            format_indian_int(i128::MIN),
            format!("-{}", group_integer(&i128::MIN.unsigned_abs().to_string()))
        );
    }

    proptest! {
        #[test]
        fn stripping_commas_restores_digits(n in any::<u64>()) {
            let formatted = format_indian_int(i128::from(n));
            prop_assert_eq!(formatted.replace(',', ""), n.to_string());
        }

        #[test]
        fn groups_have_indian_widths(n in 1_000u64..) {
            let formatted = format_indian_int(i128::from(n));
            let groups: Vec<&str> = formatted.split(',').collect();
            let (last, rest) = groups.split_last().unwrap();
            prop_assert_eq!(last.len(), 3);
            prop_assert!(rest[0].len() == 1 || rest[0].len() == 2);
            prop_assert!(rest[1..].iter().all(|g| g.len() == 2));
        }
    }
}
