#![no_main]

use libfuzzer_sys::fuzz_target;

use decint::{Signed, Unsigned};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing must either fail cleanly or round-trip to the normalized
    // digit string.
    if let Ok(value) = text.parse::<Unsigned>() {
        let trimmed = text.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        assert_eq!(value.to_string(), expected);
    }

    if let Ok(value) = text.parse::<Signed>() {
        let unsigned = text.strip_prefix('-').unwrap_or(text);
        let trimmed = unsigned.trim_start_matches('0');
        if trimmed.is_empty() {
            assert_eq!(value.to_string(), "0");
        } else if text.starts_with('-') {
            assert_eq!(value.to_string(), format!("-{trimmed}"));
        } else {
            assert_eq!(value.to_string(), trimmed);
        }
    }
});
