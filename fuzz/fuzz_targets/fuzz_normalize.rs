#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let once = brdoc::text::normalize_diacritics(s);
        assert_eq!(brdoc::text::normalize_diacritics(&once), once);
        let _ = brdoc::text::strip_punctuation_except_dot_dash_space(&once);
    }
});
