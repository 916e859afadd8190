//! Luhn digit-doubling checksum, shared by the credit card and IMEI
//! validators.
//!
//! The two identifier types double digits at opposite parities of position.
//! That asymmetry is part of each format and must not be unified.

/// Sum of all digits after doubling those at `i % 2 == doubled_parity`,
/// where a doubled two-digit result contributes the sum of its own digits.
///
/// The input must be ASCII digits only; callers check shape first.
pub(crate) fn luhn_checksum(digits: &str, doubled_parity: usize) -> u32 {
    digits
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let mut v = u32::from(b - b'0');
            if i % 2 == doubled_parity {
                v *= 2;
            }
            // A doubled digit is at most 18, so one reduction suffices.
            v / 10 + v % 10
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_parity_matters() {
        assert_ne!(luhn_checksum("18", 0), luhn_checksum("18", 1));
    }

    #[test]
    fn doubled_digits_reduce_to_digit_sum() {
        // 9 doubled is 18, which contributes 1 + 8.
        assert_eq!(luhn_checksum("9", 0), 9);
        assert_eq!(luhn_checksum("9", 1), 9);
        assert_eq!(luhn_checksum("90", 0), 9);
    }

    #[test]
    fn empty_input_sums_to_zero() {
        assert_eq!(luhn_checksum("", 0), 0);
    }
}
