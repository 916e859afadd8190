//! ISBN-10 / ISBN-13 validation and registrant-region lookup.

use crate::normalize::{digits_only, strip_dashes_and_whitespace};

const ISBN10_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];

/// ISBN registrant prefix → region/language-area name (Polish-language, as
/// published by the source dataset). Prefixes are 1–5 digits and overlap
/// across lengths, so lookups must try the longest prefix first. Sorted for
/// binary search.
static ISBN_REGION_CODES: &[(&str, &str)] = &[
    ("0", "Angielski (Wielka Brytania, USA, Australia, Nowa Zelandia, Kanada)"),
    ("1", "Angielski (Republika Południowej Afryki, Zimbabwe)"),
    ("2", "Francuski (Francja, Belgia, Kanada, Szwajcaria)"),
    ("3", "Niemiecki (Niemcy, Austria, Szwajcaria)"),
    ("4", "Japonia"),
    ("5", "ZSRR"),
    ("7", "Chiny"),
    ("80", "Czechosłowacja"),
    ("81", "Indie"),
    ("82", "Norwegia"),
    ("83", "Polska"),
    ("84", "Hiszpania"),
    ("85", "Brazylia"),
    ("86", "Jugosławia"),
    ("87", "Dania"),
    ("88", "Włoski (Włochy, Szwajcaria)"),
    ("89", "Korea Południowa"),
    ("90", "Holenderski/Flemish"),
    ("91", "Szwecja"),
    ("92", "Międzynarodowy (UNESCO)"),
    ("93", "Indie"),
    ("950", "Argentyna"),
    ("951", "Finlandia"),
    ("952", "Finlandia"),
    ("953", "Chorwacja"),
    ("954", "Bułgaria"),
    ("955", "Sri Lanka"),
    ("956", "Chile"),
    ("957", "Tajwan"),
    ("958", "Kolumbia"),
    ("959", "Kuba"),
    ("960", "Grecja"),
    ("961", "Słowenia"),
    ("962", "Hongkong"),
    ("963", "Węgry"),
    ("964", "Iran"),
    ("965", "Izrael"),
    ("967", "Malezja"),
    ("968", "Meksyk"),
    ("969", "Pakistan"),
    ("970", "Meksyk"),
    ("971", "Filipiny"),
    ("972", "Portugalia"),
    ("973", "Rumunia"),
    ("974", "Tajlandia"),
    ("975", "Turcja"),
    ("976", "Karaiby: AG, BS, BB, BZ, DM, GD, GY, JM, MS, KN, LC, VC, TT"),
    ("977", "Egipt"),
    ("978", "Nigeria"),
    ("979", "Indonezja"),
    ("980", "Wenezuela"),
    ("981", "Singapur"),
    ("982", "Pacyfik: CK, FJ, KI, NR, NU, SB, TK, TO, TV, VU, WS"),
    ("983", "Malezja"),
    ("984", "Bangladesz"),
    ("985", "Białoruś"),
    ("987", "Argentyna"),
    ("9960", "Arabia Saudyjska"),
    ("9963", "Cypr"),
    ("9964", "Ghana"),
    ("9966", "Kenia"),
    ("9968", "Kostaryka"),
    ("9970", "Uganda"),
    ("9971", "Singapur"),
    ("9972", "Syria"),
    ("9973", "Tunezja"),
    ("9974", "Urugwaj"),
    ("9976", "Tanzania"),
    ("9977", "Kostaryka"),
    ("9978", "Ekwador"),
    ("9979", "Islandia"),
    ("9980", "Papua-Nowa Gwinea"),
    ("9981", "Maroko"),
    ("9982", "Zambia"),
    ("9983", "Gambia"),
    ("9984", "Łotwa"),
    ("9985", "Estonia"),
    ("9986", "Litwa"),
    ("9987", "Tanzania"),
    ("9988", "Ghana"),
    ("9989", "Macedonia"),
    ("99903", "Mauritius"),
    ("99904", "Antyle Holenderskie"),
    ("99908", "Malawi"),
    ("99909", "Malta"),
    ("99911", "Lesotho"),
    ("99912", "Botswana"),
    ("99913", "Andora"),
    ("99914", "Surinam"),
    ("99915", "Malediwy"),
    ("99916", "Namibia"),
    ("99917", "Brunei"),
    ("99920", "Andora"),
    ("99921", "Katar"),
];

/// Validate an ISBN, accepting both the 10- and 13-character forms.
///
/// Dashes and whitespace are ignored; the ISBN-10 check character may be a
/// lowercase `x`. The 13-digit form must start with 978 or 979.
pub fn is_isbn_valid(isbn: &str) -> bool {
    let isbn = strip_dashes_and_whitespace(isbn).to_uppercase();
    let bytes = isbn.as_bytes();
    match bytes.len() {
        10 => {
            bytes[..9].iter().all(|b| b.is_ascii_digit())
                && (bytes[9].is_ascii_digit() || bytes[9] == b'X')
                && is_isbn10_checksum_valid(bytes)
        }
        13 => {
            (isbn.starts_with("978") || isbn.starts_with("979"))
                && bytes.iter().all(|b| b.is_ascii_digit())
                && is_isbn13_checksum_valid(bytes)
        }
        _ => false,
    }
}

/// Logical negation of [`is_isbn_valid`].
pub fn is_isbn_invalid(isbn: &str) -> bool {
    !is_isbn_valid(isbn)
}

fn is_isbn10_checksum_valid(bytes: &[u8]) -> bool {
    let sum: u32 = ISBN10_WEIGHTS
        .iter()
        .zip(bytes)
        .map(|(weight, b)| weight * u32::from(b - b'0'))
        .sum();
    let check = if bytes[9] == b'X' {
        10
    } else {
        u32::from(bytes[9] - b'0')
    };

    (11 - sum % 11) % 11 == check
}

fn is_isbn13_checksum_valid(bytes: &[u8]) -> bool {
    let sum: u32 = bytes[..12]
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let weight = if i % 2 == 0 { 1 } else { 3 };
            weight * u32::from(b - b'0')
        })
        .sum();

    (10 - sum % 10) % 10 == u32::from(bytes[12] - b'0')
}

/// Region name for a valid ISBN's registrant prefix.
///
/// Tries prefixes of 5 digits down to 1, starting after the `978`/`979`
/// prefix for ISBN-13, and returns the longest match. Returns `None` for an
/// invalid ISBN or an unknown prefix.
pub fn region_name_for_isbn(isbn: &str) -> Option<&'static str> {
    if is_isbn_invalid(isbn) {
        return None;
    }
    // A valid ISBN-13 is 13 digits; an ISBN-10 keeps 9 or 10 after dropping
    // a possible X check character. The registrant prefix is digits either way.
    let isbn = digits_only(isbn);
    let start = if isbn.len() == 13 { 3 } else { 0 };

    for len in (1..=5).rev() {
        let prefix = &isbn[start..start + len];
        if let Ok(i) = ISBN_REGION_CODES.binary_search_by_key(&prefix, |entry| entry.0) {
            return Some(ISBN_REGION_CODES[i].1);
        }
    }
    None
}
