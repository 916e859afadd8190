#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Decoding must return Err on invalid input, never panic, and must
        // succeed exactly when validation passes.
        let valid = polid::is_pesel_valid(s);
        assert_eq!(polid::birthdate_from_pesel(s).is_ok(), valid);
        assert_eq!(polid::sex_from_pesel(s).is_ok(), valid);
    }
});
