//! Property-based tests for the validator surface.

use proptest::prelude::*;

use polid::*;

// ── Strategies ──────────────────────────────────────────────────────────────

/// Arbitrary input, biased towards identifier-looking strings.
fn arb_input() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{0,20}",
        "[0-9 /\\-]{0,20}",
        "[A-Za-z0-9 \\-]{0,20}",
        ".{0,20}",
    ]
}

fn arb_digits(len: usize) -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..10, len)
}

fn digits_to_string(digits: &[u32]) -> String {
    digits.iter().map(|d| char::from(b'0' + *d as u8)).collect()
}

/// Append the PESEL control digit to 10 payload digits.
fn with_pesel_control(payload: &[u32]) -> String {
    const WEIGHTS: [u32; 10] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];
    let sum: u32 = WEIGHTS.iter().zip(payload).map(|(w, d)| w * d).sum();
    let mut digits = payload.to_vec();
    digits.push((10 - sum % 10) % 10);
    digits_to_string(&digits)
}

/// Append a Luhn check digit so the finished number sums to 0 mod 10.
/// `doubled_parity` is the index parity that gets doubled.
fn with_luhn_check(payload: &[u32], doubled_parity: usize) -> String {
    let sum: u32 = payload
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let v = if i % 2 == doubled_parity { d * 2 } else { d };
            v / 10 + v % 10
        })
        .sum();
    // The check digit position is of the non-doubled parity for both the
    // 16-digit card and the 15-digit IMEI layouts used here.
    let mut digits = payload.to_vec();
    digits.push((10 - sum % 10) % 10);
    digits_to_string(&digits)
}

// ── Negation and idempotence over arbitrary input ───────────────────────────

proptest! {
    #[test]
    fn is_invalid_is_exact_negation(input in arb_input()) {
        prop_assert_eq!(is_pesel_invalid(&input), !is_pesel_valid(&input));
        prop_assert_eq!(is_nip_invalid(&input), !is_nip_valid(&input));
        prop_assert_eq!(is_regon_invalid(&input), !is_regon_valid(&input));
        prop_assert_eq!(is_id_card_number_invalid(&input), !is_id_card_number_valid(&input));
        prop_assert_eq!(is_imei_invalid(&input), !is_imei_valid(&input));
        prop_assert_eq!(
            is_credit_card_number_invalid(&input),
            !is_credit_card_number_valid(&input)
        );
        prop_assert_eq!(is_iban_invalid(&input), !is_iban_valid(&input));
        prop_assert_eq!(is_isbn_invalid(&input), !is_isbn_valid(&input));
        prop_assert_eq!(is_postal_code_invalid(&input), !is_postal_code_valid(&input));
        prop_assert_eq!(is_doctor_number_invalid(&input), !is_doctor_number_valid(&input));
    }

    #[test]
    fn validators_never_drift(input in arb_input()) {
        prop_assert_eq!(is_pesel_valid(&input), is_pesel_valid(&input));
        prop_assert_eq!(is_iban_valid(&input), is_iban_valid(&input));
        prop_assert_eq!(region_name_for_isbn(&input), region_name_for_isbn(&input));
        prop_assert_eq!(bank_name_for_iban(&input), bank_name_for_iban(&input));
        prop_assert_eq!(country_data_for_iban(&input), country_data_for_iban(&input));
    }
}

// ── Constructed-valid identifiers ───────────────────────────────────────────

proptest! {
    #[test]
    fn constructed_pesel_validates(
        year in 0u32..100,
        month_band in prop_oneof![Just(0u32), Just(20), Just(40), Just(60), Just(80)],
        month in 1u32..13,
        day in 1u32..29,
        serial in arb_digits(4),
    ) {
        let mut payload = vec![
            year / 10,
            year % 10,
            (month_band + month) / 10,
            (month_band + month) % 10,
            day / 10,
            day % 10,
        ];
        payload.extend_from_slice(&serial);
        let pesel = with_pesel_control(&payload);

        prop_assert!(is_pesel_valid(&pesel), "{}", pesel);
        let expected_sex = if serial[3] % 2 == 0 { Sex::Female } else { Sex::Male };
        prop_assert_eq!(sex_from_pesel(&pesel).unwrap(), expected_sex);
    }

    #[test]
    fn constructed_nip_validates(payload in arb_digits(9)) {
        const WEIGHTS: [u32; 9] = [6, 5, 7, 2, 3, 4, 5, 6, 7];
        prop_assume!(payload.iter().any(|&d| d != 0));
        let sum: u32 = WEIGHTS.iter().zip(&payload).map(|(w, d)| w * d).sum();
        let mut digits = payload.clone();
        digits.push(sum % 11 % 10);
        let nip = digits_to_string(&digits);

        prop_assert!(is_nip_valid(&nip), "{}", nip);
    }

    #[test]
    fn constructed_regon_validates_and_extends(payload in arb_digits(8), extension in arb_digits(4)) {
        const WEIGHTS_9: [u32; 8] = [8, 9, 2, 3, 4, 5, 6, 7];
        const WEIGHTS_14: [u32; 13] = [2, 4, 8, 5, 0, 9, 7, 3, 6, 1, 2, 4, 8];
        prop_assume!(payload.iter().any(|&d| d != 0));

        let sum: u32 = WEIGHTS_9.iter().zip(&payload).map(|(w, d)| w * d).sum();
        let mut digits = payload.clone();
        digits.push(sum % 11 % 10);
        let regon9 = digits_to_string(&digits);
        prop_assert!(is_regon_valid(&regon9), "{}", regon9);

        digits.extend_from_slice(&extension);
        let sum14: u32 = WEIGHTS_14.iter().zip(&digits).map(|(w, d)| w * d).sum();
        digits.push(sum14 % 11 % 10);
        let regon14 = digits_to_string(&digits);
        prop_assert!(is_regon_valid(&regon14), "{}", regon14);

        // Corrupting the extension control digit breaks only the long form.
        let mut corrupted = regon14.into_bytes();
        corrupted[13] = b'0' + (corrupted[13] - b'0' + 1) % 10;
        let corrupted = String::from_utf8(corrupted).unwrap();
        prop_assert!(is_regon_invalid(&corrupted), "{}", corrupted);
        prop_assert!(is_regon_valid(&regon9), "{}", regon9);
    }

    #[test]
    fn constructed_credit_card_validates_until_a_digit_flips(
        payload in arb_digits(15),
        flip_at in 0usize..16,
        bump in 1u32..10,
    ) {
        let card = with_luhn_check(&payload, 0);
        prop_assert!(is_credit_card_number_valid(&card), "{}", card);

        // Luhn catches every single-digit substitution: the doubled-digit
        // contribution map is a permutation of 0..=9.
        let mut corrupted = card.into_bytes();
        corrupted[flip_at] = b'0' + (corrupted[flip_at] - b'0' + bump as u8) % 10;
        let corrupted = String::from_utf8(corrupted).unwrap();
        prop_assert!(is_credit_card_number_invalid(&corrupted), "{}", corrupted);
    }

    #[test]
    fn constructed_imei_validates(payload in arb_digits(14)) {
        let imei = with_luhn_check(&payload, 1);
        prop_assert!(is_imei_valid(&imei), "{}", imei);
    }

    #[test]
    fn five_digit_postal_codes_validate(digits in arb_digits(5)) {
        let code = digits_to_string(&digits);
        prop_assert!(is_postal_code_valid(&code));
        let dashed = format!("{}-{}", &code[..2], &code[2..]);
        prop_assert!(is_postal_code_valid(&dashed));
    }
}
