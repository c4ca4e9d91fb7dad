#![no_main]

use brdoc::{cnpj, cpf, normalize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let digits = normalize(s);
        assert_eq!(normalize(&digits), digits);

        // Formatting either fails or preserves every digit.
        if let Ok(f) = cpf::format(s) {
            assert_eq!(normalize(&f), digits);
        }
        if let Ok(f) = cnpj::format(s) {
            assert_eq!(normalize(&f), digits);
        }
    }
});
