#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — arbitrary input is simply invalid.
        let _ = polid::is_pesel_valid(s);
        let _ = polid::is_nip_valid(s);
        let _ = polid::is_regon_valid(s);
        let _ = polid::is_id_card_number_valid(s);
        let _ = polid::is_imei_valid(s);
        let _ = polid::is_credit_card_number_valid(s);
        let _ = polid::is_isbn_valid(s);
        let _ = polid::is_postal_code_valid(s);
        let _ = polid::is_doctor_number_valid(s);
    }
});
