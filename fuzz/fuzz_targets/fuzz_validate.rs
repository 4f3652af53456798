#![no_main]

use std::sync::LazyLock;

use libfuzzer_sys::fuzz_target;
use vatfeld::CountryRegistry;
use vatfeld::vat::validate;

static REGISTRY: LazyLock<Option<CountryRegistry>> =
    LazyLock::new(|| CountryRegistry::reference().ok());

fuzz_target!(|data: &[u8]| {
    if let (Ok(s), Some(registry)) = (std::str::from_utf8(data), REGISTRY.as_ref()) {
        // Must not panic; Invalid outcomes are fine.
        for rule in registry {
            let _ = validate(rule, s);
        }
        let _ = registry.search(s);
        let _ = registry.validate_prefixed(s);
    }
});
