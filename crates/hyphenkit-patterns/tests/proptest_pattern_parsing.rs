//! Property tests for pattern and exception parsing.
//!
//! 1. A compiled pattern prints back to text that compiles to the same pattern.
//! 2. Exception entries survive print-and-parse.
//! 3. Parsers never panic on arbitrary input.
//! 4. Source errors point at a line that exists.
//! 5. Weight vectors always have one slot per gap.
//! 6. Language keys survive print-and-parse.

use hyphenkit_patterns::{
    BuiltinSource, LanguageKey, PatternError, PatternSource, compile_pattern, parse_exception,
    parse_pattern_source,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn tex_pattern() -> impl Strategy<Value = String> {
    let letter = proptest::sample::select(vec!['a', 'e', 'h', 'n', 'y', 'é', 'ß']);
    (
        any::<bool>(),
        proptest::collection::vec((proptest::option::of(0u8..=9), letter), 1..=6),
        proptest::option::of(0u8..=9),
        any::<bool>(),
    )
        .prop_map(|(lead, body, tail, trail)| {
            let mut out = String::new();
            if lead {
                out.push('.');
            }
            for (digit, ch) in body {
                if let Some(d) = digit {
                    out.push(char::from(b'0' + d));
                }
                out.push(ch);
            }
            if let Some(d) = tail {
                out.push(char::from(b'0' + d));
            }
            if trail {
                out.push('.');
            }
            out
        })
}

fn tex_exception() -> impl Strategy<Value = String> {
    let syllable = proptest::collection::vec(
        proptest::sample::select(vec!['a', 'b', 'o', 't', 'ü']),
        1..=4,
    )
    .prop_map(|chars| chars.into_iter().collect::<String>());
    proptest::collection::vec(syllable, 1..=5).prop_map(|parts| parts.join("-"))
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Print and parse agree
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pattern_display_recompiles(text in tex_pattern()) {
        let pattern = compile_pattern(&text).unwrap();
        let reparsed = compile_pattern(&pattern.to_string()).unwrap();
        prop_assert_eq!(reparsed, pattern);
    }

    #[test]
    fn exception_display_reparses(text in tex_exception()) {
        let entry = parse_exception(&text).unwrap();
        prop_assert_eq!(entry.to_string(), text.to_lowercase());
        prop_assert_eq!(parse_exception(&entry.to_string()).unwrap(), entry);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-4. Arbitrary input
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn compile_never_panics(text in "\\PC{0,16}") {
        let _ = compile_pattern(&text);
        let _ = parse_exception(&text);
    }

    #[test]
    fn source_errors_name_an_existing_line(text in "[\\\\{}a-c1-3.% \n-]{0,64}") {
        let lines = text.lines().count();
        if let Err(PatternError::AtLine { line, .. }) =
            parse_pattern_source(LanguageKey::language_only("xx"), &text)
        {
            prop_assert!(line >= 1 && line <= lines, "line {} of {}", line, lines);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Weight vector shape
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn weights_have_one_slot_per_gap(word in "\\PC{0,24}") {
        let table = BuiltinSource
            .load(&LanguageKey::language_only("en"))
            .unwrap()
            .unwrap();
        let weights = table.weights(&word);
        prop_assert_eq!(weights.len(), word.chars().count() + 1);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Language keys
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn language_key_display_parses(
        language in "[a-zA-Z]{2,3}",
        country in proptest::option::of("[a-zA-Z]{2}"),
    ) {
        let key = LanguageKey::new(&language, country.as_deref());
        let parsed: LanguageKey = key.to_string().parse().unwrap();
        prop_assert_eq!(parsed, key);
    }
}
