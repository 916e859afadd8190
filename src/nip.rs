//! NIP (Polish tax identification number) validation and formatting.

use crate::normalize::strip_dashes_and_whitespace;

const NIP_WEIGHTS: [u32; 9] = [6, 5, 7, 2, 3, 4, 5, 6, 7];

/// Common display groupings for a 10-digit NIP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NipFormat {
    /// `123-45-67-890`
    #[default]
    Groups3223,
    /// `123-456-78-90`
    Groups3322,
}

/// Validate a NIP number.
///
/// Accepts 10 to 13 digits (the 13-digit form carries a 3-digit suffix that
/// is not checksum-significant), rejects an all-zero number, and verifies the
/// control digit at position 9. Dashes and whitespace are ignored.
pub fn is_nip_valid(nip: &str) -> bool {
    let nip = strip_dashes_and_whitespace(nip);
    if !(10..=13).contains(&nip.len()) || !nip.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if nip.bytes().all(|b| b == b'0') {
        return false;
    }

    let sum: u32 = NIP_WEIGHTS
        .iter()
        .zip(nip.bytes())
        .map(|(weight, b)| weight * u32::from(b - b'0'))
        .sum();
    let control = u32::from(nip.as_bytes()[9] - b'0');

    sum % 11 % 10 == control
}

/// Logical negation of [`is_nip_valid`].
pub fn is_nip_invalid(nip: &str) -> bool {
    !is_nip_valid(nip)
}

/// Format a valid NIP with the given grouping, using the first 10 digits.
///
/// Returns `None` for anything [`is_nip_valid`] rejects.
pub fn format_nip(nip: &str, format: NipFormat) -> Option<String> {
    if !is_nip_valid(nip) {
        return None;
    }
    let nip = strip_dashes_and_whitespace(nip);
    let (a, b, c) = match format {
        NipFormat::Groups3223 => (3, 5, 7),
        NipFormat::Groups3322 => (3, 6, 8),
    };
    Some(format!(
        "{}-{}-{}-{}",
        &nip[..a],
        &nip[a..b],
        &nip[b..c],
        &nip[c..10]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_10_digit_nip() {
        assert!(is_nip_valid("1234563218"));
    }

    #[test]
    fn valid_13_digit_nip() {
        assert!(is_nip_valid("1234563218123"));
    }

    #[test]
    fn separators_ignored() {
        assert!(is_nip_valid("123-456-32 18"));
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(!is_nip_valid("123456789"));
        assert!(!is_nip_valid("12345678901234"));
        assert!(!is_nip_valid(""));
    }

    #[test]
    fn all_zeros_rejected() {
        assert!(!is_nip_valid("0000000000"));
        assert!(!is_nip_valid("0000000000000"));
    }

    #[test]
    fn non_digits_rejected() {
        assert!(!is_nip_valid("12345678AB"));
        assert!(!is_nip_valid("12345-678C"));
    }

    #[test]
    fn wrong_control_digit_rejected() {
        assert!(!is_nip_valid("1234563219"));
    }

    #[test]
    fn invalid_is_negation() {
        assert!(!is_nip_invalid("1234563218"));
        assert!(is_nip_invalid("1234563219"));
    }

    #[test]
    fn format_default_grouping() {
        assert_eq!(
            format_nip("1234563218", NipFormat::default()).as_deref(),
            Some("123-45-63-218")
        );
    }

    #[test]
    fn format_3322_grouping() {
        assert_eq!(
            format_nip("123-456-32 18", NipFormat::Groups3322).as_deref(),
            Some("123-456-32-18")
        );
    }

    #[test]
    fn format_invalid_nip_is_none() {
        assert_eq!(format_nip("1234563219", NipFormat::default()), None);
    }
}
