//! Input normalization helpers shared by the validators.
//!
//! Every identifier type tolerates a different set of separators, so each
//! validator picks the filter matching its own rule. All functions are total:
//! they accept any string, including the empty one.

/// Keep ASCII digits only.
pub(crate) fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Keep ASCII letters and digits only.
pub(crate) fn letters_and_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// Remove all whitespace.
pub(crate) fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Remove dashes and whitespace.
pub(crate) fn strip_dashes_and_whitespace(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

/// Remove dashes, slashes, backslashes, and whitespace.
pub(crate) fn strip_dashes_slashes_and_whitespace(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '-' | '/' | '\\') && !c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_filters() {
        assert_eq!(digits_only("12a-3 4/5"), "12345");
        assert_eq!(digits_only(""), "");
        assert_eq!(digits_only("abc"), "");
    }

    #[test]
    fn letters_and_digits_filters() {
        assert_eq!(letters_and_digits("AB-12 c3"), "AB12c3");
        assert_eq!(letters_and_digits("!@#"), "");
    }

    #[test]
    fn strip_whitespace_keeps_other_separators() {
        assert_eq!(strip_whitespace(" 1 2\t3\n4 "), "1234");
        assert_eq!(strip_whitespace("1-2/3"), "1-2/3");
    }

    #[test]
    fn strip_dashes_and_whitespace_keeps_slashes() {
        assert_eq!(strip_dashes_and_whitespace("1-2 3-4"), "1234");
        assert_eq!(strip_dashes_and_whitespace("1/2"), "1/2");
    }

    #[test]
    fn strip_dashes_slashes_and_whitespace_filters_all() {
        assert_eq!(strip_dashes_slashes_and_whitespace("1-2/3\\4 5"), "12345");
    }
}
