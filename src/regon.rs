//! REGON (Polish national business registry number) validation.
//!
//! A REGON is 9 digits, or 14 digits for local units. The 14-digit form is
//! the 9-digit number plus a 5-digit extension; its control digit is computed
//! over the first 13 digits, so both checks must pass.

use crate::normalize::strip_dashes_and_whitespace;

const REGON_WEIGHTS_9: [u32; 8] = [8, 9, 2, 3, 4, 5, 6, 7];
const REGON_WEIGHTS_14: [u32; 13] = [2, 4, 8, 5, 0, 9, 7, 3, 6, 1, 2, 4, 8];

/// Validate a REGON number (9- or 14-digit form).
///
/// Dashes and whitespace are ignored. An all-zero number is invalid.
pub fn is_regon_valid(regon: &str) -> bool {
    let regon = strip_dashes_and_whitespace(regon);
    if !(regon.len() == 9 || regon.len() == 14) || !regon.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if regon.bytes().all(|b| b == b'0') {
        return false;
    }

    if !weighted_check(&regon, &REGON_WEIGHTS_9) {
        return false;
    }
    if regon.len() == 9 {
        return true;
    }
    weighted_check(&regon, &REGON_WEIGHTS_14)
}

/// Logical negation of [`is_regon_valid`].
pub fn is_regon_invalid(regon: &str) -> bool {
    !is_regon_valid(regon)
}

/// Weighted sum over the leading digits, reduced `mod 11 mod 10` and compared
/// against the digit right after the weighted positions.
fn weighted_check(digits: &str, weights: &[u32]) -> bool {
    let bytes = digits.as_bytes();
    let sum: u32 = weights
        .iter()
        .zip(bytes)
        .map(|(weight, b)| weight * u32::from(b - b'0'))
        .sum();
    let control = u32::from(bytes[weights.len()] - b'0');

    sum % 11 % 10 == control
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_9_digit_regon() {
        assert!(is_regon_valid("123456785"));
    }

    #[test]
    fn valid_14_digit_regon() {
        assert!(is_regon_valid("12345678512347"));
    }

    #[test]
    fn separators_ignored() {
        assert!(is_regon_valid("123-456-785"));
        assert!(is_regon_valid("123-456-785 123 47"));
    }

    #[test]
    fn wrong_control_digit_9_rejected() {
        assert!(!is_regon_valid("123456786"));
    }

    #[test]
    fn wrong_control_digit_14_rejected() {
        // The 9-digit prefix is still valid on its own.
        assert!(!is_regon_valid("12345678512348"));
        assert!(is_regon_valid("123456785"));
    }

    #[test]
    fn extension_of_invalid_prefix_rejected() {
        // Extension control digit alone cannot rescue a bad 9-digit check.
        assert!(!is_regon_valid("12345678612347"));
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(!is_regon_valid("12345678"));
        assert!(!is_regon_valid("123456785123"));
        assert!(!is_regon_valid("1234567851234789"));
        assert!(!is_regon_valid(""));
    }

    #[test]
    fn all_zeros_rejected() {
        assert!(!is_regon_valid("000000000"));
        assert!(!is_regon_valid("00000000000000"));
    }

    #[test]
    fn non_digits_rejected() {
        assert!(!is_regon_valid("12345678A"));
        assert!(!is_regon_valid("1234-5678A5"));
    }

    #[test]
    fn invalid_is_negation() {
        assert!(!is_regon_invalid("123456785"));
        assert!(is_regon_invalid("123456786"));
    }
}
