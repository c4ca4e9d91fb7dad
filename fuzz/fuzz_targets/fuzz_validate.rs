#![no_main]

use brdoc::{Cnpj, Cpf};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic, and the strict path must agree with is_valid.
        let cpf = Cpf::new(s);
        assert_eq!(cpf.is_valid(), Cpf::parse(s).is_ok());

        let cnpj = Cnpj::new(s);
        assert_eq!(cnpj.is_valid(), Cnpj::parse(s).is_ok());
    }
});
