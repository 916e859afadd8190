//! Credit card number validation and category lookup.

use serde::{Deserialize, Serialize};

use crate::luhn::luhn_checksum;
use crate::normalize::strip_dashes_and_whitespace;

/// Card category derived from the leading digit of the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditCardType {
    Airline,
    ClubCard,
    Visa,
    MasterCard,
    Finances,
    Fuel,
    Telecommunication,
    Other,
}

/// Validate a 16-digit credit card number with the Luhn algorithm.
///
/// Dashes and whitespace are ignored. Card numbers double the even-indexed
/// digits — the opposite parity from IMEI.
pub fn is_credit_card_number_valid(number: &str) -> bool {
    let number = strip_dashes_and_whitespace(number);
    if number.len() != 16 || !number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    luhn_checksum(&number, 0) % 10 == 0
}

/// Logical negation of [`is_credit_card_number_valid`].
pub fn is_credit_card_number_invalid(number: &str) -> bool {
    !is_credit_card_number_valid(number)
}

/// Classify a card number by its leading character.
///
/// Works on the raw input without validation; a leading `0` or non-digit
/// yields `None`.
pub fn credit_card_type(number: &str) -> Option<CreditCardType> {
    match number.chars().next()? {
        '1' | '2' => Some(CreditCardType::Airline),
        '3' => Some(CreditCardType::ClubCard),
        '4' => Some(CreditCardType::Visa),
        '5' => Some(CreditCardType::MasterCard),
        '6' => Some(CreditCardType::Finances),
        '7' => Some(CreditCardType::Fuel),
        '8' => Some(CreditCardType::Telecommunication),
        '9' => Some(CreditCardType::Other),
        _ => None,
    }
}
