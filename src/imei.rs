//! IMEI (International Mobile Equipment Identity) validation.

use crate::luhn::luhn_checksum;
use crate::normalize::strip_dashes_slashes_and_whitespace;

/// Validate a 15-digit IMEI with the Luhn algorithm.
///
/// Dashes, slashes, backslashes, and whitespace are ignored. IMEI doubles
/// the odd-indexed digits; the final (15th) digit is the check digit.
pub fn is_imei_valid(imei: &str) -> bool {
    let imei = strip_dashes_slashes_and_whitespace(imei);
    if imei.len() != 15 || !imei.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    luhn_checksum(&imei, 1) % 10 == 0
}

/// Logical negation of [`is_imei_valid`].
pub fn is_imei_invalid(imei: &str) -> bool {
    !is_imei_valid(imei)
}
