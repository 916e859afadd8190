//! PESEL (Polish national identification number) validation and decoding.
//!
//! A PESEL is 11 digits. Digits 0–5 encode the birthdate with the century
//! folded into the month field, digit 9 encodes the sex, digit 10 is the
//! control digit.
//!
//! The checksum cannot catch everything: swapping the year and day digit
//! pairs (for dates where both readings are calendar-valid) or certain
//! same-weight digit transpositions still yields a passing number. That is
//! inherent to the encoding; only a registry lookup could do better.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PESEL_WEIGHTS: [u32; 10] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];

/// Error returned when decoding is attempted on an invalid PESEL.
///
/// Decoding operations require a fully valid PESEL; calling them with
/// anything else is a caller contract violation, not a data-quality outcome.
#[derive(Debug, Clone, Error)]
#[error("cannot decode '{value}': not a valid PESEL")]
pub struct InvalidPeselError {
    /// The offending input.
    pub value: String,
}

/// Sex encoded in digit 9 of a PESEL (even → female, odd → male).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

/// Validate a PESEL number.
///
/// Checks the 11-digit shape, the control digit, and that the embedded
/// birthdate is a real calendar date. No separators are tolerated.
pub fn is_pesel_valid(pesel: &str) -> bool {
    if pesel.len() != 11 || !pesel.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if pesel.bytes().all(|b| b == b'0') {
        return false;
    }

    let digits: Vec<u32> = pesel.bytes().map(|b| u32::from(b - b'0')).collect();
    let sum: u32 = PESEL_WEIGHTS
        .iter()
        .zip(&digits)
        .map(|(weight, digit)| weight * digit)
        .sum();
    if (10 - sum % 10) % 10 != digits[10] {
        return false;
    }

    birthdate_parts(&digits).is_some()
}

/// Logical negation of [`is_pesel_valid`].
pub fn is_pesel_invalid(pesel: &str) -> bool {
    !is_pesel_valid(pesel)
}

/// Extract the birthdate from a valid PESEL.
///
/// Fails with [`InvalidPeselError`] if the PESEL does not pass
/// [`is_pesel_valid`] — decoding is never attempted on unvalidated input.
pub fn birthdate_from_pesel(pesel: &str) -> Result<NaiveDate, InvalidPeselError> {
    if !is_pesel_valid(pesel) {
        return Err(InvalidPeselError {
            value: pesel.into(),
        });
    }
    let digits: Vec<u32> = pesel.bytes().map(|b| u32::from(b - b'0')).collect();
    // is_pesel_valid already proved the date exists.
    birthdate_parts(&digits).ok_or_else(|| InvalidPeselError {
        value: pesel.into(),
    })
}

/// Extract the sex from a valid PESEL.
///
/// Fails with [`InvalidPeselError`] if the PESEL does not pass
/// [`is_pesel_valid`].
pub fn sex_from_pesel(pesel: &str) -> Result<Sex, InvalidPeselError> {
    if !is_pesel_valid(pesel) {
        return Err(InvalidPeselError {
            value: pesel.into(),
        });
    }
    let sex_digit = pesel.as_bytes()[9] - b'0';
    Ok(if sex_digit % 2 == 0 {
        Sex::Female
    } else {
        Sex::Male
    })
}

/// Decode the (century-disambiguated) birthdate, or `None` if the encoded
/// fields do not form a real calendar date.
fn birthdate_parts(digits: &[u32]) -> Option<NaiveDate> {
    let year_part = digits[0] * 10 + digits[1];
    let month_part = digits[2] * 10 + digits[3];
    let day = digits[4] * 10 + digits[5];

    // The month field carries the century: each band of 20 shifts it.
    let (century, month) = match month_part {
        81..=92 => (1800, month_part - 80),
        21..=32 => (2000, month_part - 20),
        41..=52 => (2100, month_part - 40),
        61..=72 => (2200, month_part - 60),
        _ => (1900, month_part),
    };
    let year = century + year_part;

    NaiveDate::from_ymd_opt(year as i32, month, day)
}
