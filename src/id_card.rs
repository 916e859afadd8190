//! Polish ID card number validation.
//!
//! The number is three letters followed by six digits (`AAA XXXXXX`). The
//! control digit is not appended at the end — it sits at position 3, right
//! after the letters, and is excluded from the weighted sum it must match.

use crate::normalize::letters_and_digits;

const ID_CARD_WEIGHTS: [u32; 9] = [7, 3, 1, 9, 7, 3, 1, 7, 3];

/// Validate a Polish ID card number.
///
/// The pattern is three ASCII letters, optional whitespace, six digits, in
/// either case. Letters weigh in as A=10 … Z=35.
pub fn is_id_card_number_valid(number: &str) -> bool {
    if !matches_shape(number) {
        return false;
    }
    // The shape check leaves only letters, digits, and whitespace.
    let number = letters_and_digits(number).to_uppercase();
    let bytes = number.as_bytes();

    let mut sum = 0u32;
    for (i, &weight) in ID_CARD_WEIGHTS.iter().enumerate() {
        if i == 3 {
            continue;
        }
        sum += character_value(bytes[i]) * weight;
    }
    let control = u32::from(bytes[3] - b'0');

    sum % 10 == control
}

/// Logical negation of [`is_id_card_number_valid`].
pub fn is_id_card_number_invalid(number: &str) -> bool {
    !is_id_card_number_valid(number)
}

/// `^[A-Za-z]{3}\s*[0-9]{6}$`
fn matches_shape(number: &str) -> bool {
    let mut chars = number.chars();
    for _ in 0..3 {
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() => {}
            _ => return false,
        }
    }
    let rest: Vec<char> = chars.skip_while(|c| c.is_whitespace()).collect();
    rest.len() == 6 && rest.iter().all(|c| c.is_ascii_digit())
}

fn character_value(b: u8) -> u32 {
    if b.is_ascii_digit() {
        u32::from(b - b'0')
    } else {
        u32::from(b - b'A') + 10
    }
}
