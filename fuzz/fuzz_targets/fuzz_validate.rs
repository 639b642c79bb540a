#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic, and both APIs must agree.
        let valid = brdoc::is_valid(s);
        assert_eq!(valid, brdoc::validate(s).is_ok());
        assert_eq!(valid, brdoc::Document::parse(s).is_ok());
    }
});
