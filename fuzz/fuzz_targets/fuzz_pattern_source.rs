#![no_main]

use hyphenkit::{LanguageKey, parse_pattern_source};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let key = LanguageKey::language_only("xx");
    if let Ok(table) = parse_pattern_source(key, text) {
        // Any table that parses must answer lookups without panicking.
        for word in text.split_whitespace().take(16) {
            let weights = table.weights(word);
            assert_eq!(weights.len(), word.chars().count() + 1);
            let _ = table.exception(word);
        }
    }
});
