//! # polid
//!
//! Validation and decoding of Polish and international structured
//! identifiers: PESEL, NIP, REGON, IBAN, ISBN, IMEI, credit card numbers,
//! ID card numbers, physician licence numbers, and postal codes.
//!
//! Every check is a pure function over the input string and static lookup
//! tables: no I/O, no shared mutable state, safe to call from any number of
//! threads. Validators answer structure-and-checksum questions only — a
//! passing PESEL is self-consistent, not necessarily assigned to a real
//! person.
//!
//! ## Quick Start
//!
//! ```rust
//! use polid::*;
//!
//! assert!(is_pesel_valid("44051401359"));
//! let birthdate = birthdate_from_pesel("44051401359").unwrap();
//! assert_eq!(birthdate.to_string(), "1944-05-14");
//! assert_eq!(sex_from_pesel("44051401359").unwrap(), Sex::Male);
//!
//! assert!(is_iban_valid("PL47 1140 2004 0000 3312 1564 8766"));
//! assert_eq!(
//!     bank_name_for_iban("PL47 1140 2004 0000 3312 1564 8766"),
//!     Some("mBank")
//! );
//!
//! assert!(is_isbn_valid("978-0-306-40615-7"));
//! assert!(is_nip_invalid("1234563219"));
//! ```
//!
//! ## Error contract
//!
//! Validators never fail: malformed input is simply invalid, and every
//! `is_*_valid` has an `is_*_invalid` exact negation. Enrichment lookups
//! return `None` for anything they cannot answer. Only the PESEL decoding
//! operations return an error, and only when called on a PESEL that is not
//! valid in the first place — that is a caller contract violation, not a
//! data-quality outcome.

pub mod credit_card;
pub mod doctor;
pub mod iban;
pub mod id_card;
pub mod imei;
pub mod isbn;
mod luhn;
pub mod nip;
mod normalize;
pub mod pesel;
pub mod postal_code;
pub mod regon;

// Re-export the full surface at the crate root for convenience
pub use credit_card::{
    CreditCardType, credit_card_type, is_credit_card_number_invalid, is_credit_card_number_valid,
};
pub use doctor::{is_doctor_number_invalid, is_doctor_number_valid};
pub use iban::{
    IbanCountryData, IbanPolicy, IbanPolicyViolation, bank_full_name_for_iban, bank_name_for_iban,
    country_data_for_iban, is_iban_invalid, is_iban_valid,
};
pub use id_card::{is_id_card_number_invalid, is_id_card_number_valid};
pub use imei::{is_imei_invalid, is_imei_valid};
pub use isbn::{is_isbn_invalid, is_isbn_valid, region_name_for_isbn};
pub use nip::{NipFormat, format_nip, is_nip_invalid, is_nip_valid};
pub use pesel::{
    InvalidPeselError, Sex, birthdate_from_pesel, is_pesel_invalid, is_pesel_valid, sex_from_pesel,
};
pub use postal_code::{is_postal_code_invalid, is_postal_code_valid};
pub use regon::{is_regon_invalid, is_regon_valid};
