#![no_main]

use std::sync::{Arc, OnceLock};

use arbitrary::Arbitrary;
use hyphenkit::{BuiltinSource, Hyphenator, LanguageKey, PatternSource};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    word: String,
    left_min: u8,
    right_min: u8,
    with_table: bool,
}

fn english() -> &'static Hyphenator {
    static EN: OnceLock<Hyphenator> = OnceLock::new();
    EN.get_or_init(|| {
        let table = BuiltinSource
            .load(&LanguageKey::language_only("en"))
            .ok()
            .flatten();
        table.map_or_else(Hyphenator::without_language, |t| Hyphenator::new(Arc::new(t)))
    })
}

fuzz_target!(|input: Input| {
    let fallback = Hyphenator::without_language();
    let h = if input.with_table { english() } else { &fallback };
    let left = usize::from(input.left_min);
    let right = usize::from(input.right_min);

    let Ok(Some(result)) = h.hyphenate(&input.word, left, right) else {
        return;
    };
    let len = input.word.chars().count();
    let points = result.points();
    assert!(!points.is_empty());
    assert!(points.windows(2).all(|w| w[0] < w[1]));
    assert!(points.iter().all(|&o| o >= left && o <= len));
    for i in 0..points.len() {
        let pre = result.pre_hyphen_text(i).unwrap_or_default();
        let post = result.post_hyphen_text(i).unwrap_or_default();
        assert_eq!(format!("{pre}{post}"), input.word);
    }
});
