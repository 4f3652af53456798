#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Arbitrary rule tables must load or be rejected, never panic.
        let _ = vatfeld::CountryRegistry::from_json(s);
    }
});
