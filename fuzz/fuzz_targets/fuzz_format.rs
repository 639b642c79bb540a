#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Formatting is best-effort: it may return the input, never panic.
        let once = brdoc::format(s);
        let _ = brdoc::format_any(&once);
        let _ = brdoc::complete(s);
    }
});
