//! Polish postal code validation.

/// Validate a postal code: exactly two digits, an optional dash, exactly
/// three digits, nothing else.
///
/// No registry of real codes is consulted; this is a pure shape check.
pub fn is_postal_code_valid(code: &str) -> bool {
    let bytes = code.as_bytes();
    match bytes.len() {
        5 => bytes.iter().all(|b| b.is_ascii_digit()),
        6 => {
            bytes[2] == b'-'
                && bytes[..2].iter().all(|b| b.is_ascii_digit())
                && bytes[3..].iter().all(|b| b.is_ascii_digit())
        }
        _ => false,
    }
}

/// Logical negation of [`is_postal_code_valid`].
pub fn is_postal_code_invalid(code: &str) -> bool {
    !is_postal_code_valid(code)
}
