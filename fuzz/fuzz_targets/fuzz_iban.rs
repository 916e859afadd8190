#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = polid::is_iban_valid(s);
        let _ = polid::country_data_for_iban(s);
        // Enrichment works on merely well-formed input, so it must hold up
        // against anything.
        let _ = polid::bank_name_for_iban(s);
        let _ = polid::bank_full_name_for_iban(s);
    }
});
