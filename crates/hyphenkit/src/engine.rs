//! The hyphenation engine.
//!
//! # Algorithm
//!
//! ```text
//! word ── empty / min < 1 ──────────────────────▶ Err
//!      ── fewer than left+right visible chars ──▶ None
//!      ── contains U+00AD ──▶ marker positions within bounds, if any
//!      ── no table ─────────▶ None
//!      ── drop markers, fold case ── exception? ──▶ entry offsets within bounds
//!                                └── pad edges ─▶ trie max-merge ─▶ odd gaps within bounds
//! ```
//!
//! "Within bounds" means `left_min <= offset <= len - right_min`, counting
//! visible characters. Offsets outside are dropped, never clamped.

use std::sync::Arc;

use hyphenkit_patterns::{
    LanguageKey, PatternRegistry, PatternSource, PatternTable, fold_char,
};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::error::{HyphenError, Result, check_minimum};
use crate::hyphenation::{BreakSource, Hyphenation};

/// U+00AD SOFT HYPHEN, the in-word marker for an author-chosen break.
pub const SOFT_HYPHEN: char = '\u{AD}';

/// Computes hyphenation points, optionally backed by a language table.
///
/// Cheap to clone; the table is shared. Without a table only soft hyphens
/// produce break points.
#[derive(Debug, Clone, Default)]
pub struct Hyphenator {
    table: Option<Arc<PatternTable>>,
}

impl Hyphenator {
    #[must_use]
    pub fn new(table: Arc<PatternTable>) -> Self {
        Self { table: Some(table) }
    }

    /// A hyphenator that only honours soft hyphens.
    #[must_use]
    pub fn without_language() -> Self {
        Self { table: None }
    }

    /// Resolves `key` through `registry`, loading from `source` on a miss.
    ///
    /// An unknown language is not an error: the result works in
    /// soft-hyphen-only mode. A source that fails to parse is.
    pub fn for_language(
        registry: &PatternRegistry,
        source: &dyn PatternSource,
        key: &LanguageKey,
    ) -> Result<Self> {
        match registry.get_or_load(key, source)? {
            Some(table) => Ok(Self::new(table)),
            None => {
                debug!(language = %key, "no pattern table, only soft hyphens apply");
                Ok(Self::without_language())
            }
        }
    }

    #[must_use]
    pub fn table(&self) -> Option<&Arc<PatternTable>> {
        self.table.as_ref()
    }

    #[must_use]
    pub fn has_language(&self) -> bool {
        self.table.is_some()
    }

    /// Finds the break points of `word`.
    ///
    /// At least `left_min` characters must precede a break and `right_min`
    /// follow it. Returns `Ok(None)` when no break qualifies, and an error for
    /// an empty word or a zero minimum.
    pub fn hyphenate(
        &self,
        word: &str,
        left_min: usize,
        right_min: usize,
    ) -> Result<Option<Hyphenation>> {
        if word.is_empty() {
            return Err(HyphenError::EmptyWord);
        }
        check_minimum("left_min", left_min)?;
        check_minimum("right_min", right_min)?;

        let chars: SmallVec<[char; 32]> = word.chars().collect();
        let visible = chars.iter().filter(|&&c| c != SOFT_HYPHEN).count();
        if visible < left_min.saturating_add(right_min) {
            trace!(len = visible, left_min, right_min, "word too short");
            return Ok(None);
        }

        // Markers that survive the run-length filter win; otherwise the
        // table decides as if the markers were absent.
        let marked = if chars.contains(&SOFT_HYPHEN) {
            Hyphenation::from_points(
                word,
                soft_hyphen_points(&chars, left_min, right_min),
                BreakSource::SoftHyphen,
            )
        } else {
            None
        };
        let result = marked.or_else(|| {
            self.table
                .as_deref()
                .and_then(|table| table_points(table, word, &chars, left_min, right_min))
        });

        trace!(
            len = chars.len(),
            points = result.as_ref().map_or(0, Hyphenation::len),
            source = result.as_ref().map_or("none", |h| h.source().as_str()),
            "hyphenated"
        );
        Ok(result)
    }
}

/// Positions of soft hyphens with enough visible characters on each side.
///
/// A marker's offset is its own index, so the text before it is exactly the
/// visible prefix. Other markers do not count toward run lengths.
fn soft_hyphen_points(chars: &[char], left_min: usize, right_min: usize) -> SmallVec<[usize; 8]> {
    let total = chars.iter().filter(|&&c| c != SOFT_HYPHEN).count();
    let mut before = 0;
    let mut points = SmallVec::new();
    for (i, &ch) in chars.iter().enumerate() {
        if ch == SOFT_HYPHEN {
            if before >= left_min && total - before >= right_min {
                points.push(i);
            }
        } else {
            before += 1;
        }
    }
    points
}

/// Exception entry if the word has one, otherwise odd pattern weights.
///
/// Soft hyphens are skipped for matching. Offsets are computed over the
/// visible characters and mapped back to the index of the character that
/// follows the break in `chars`.
fn table_points(
    table: &PatternTable,
    word: &str,
    chars: &[char],
    left_min: usize,
    right_min: usize,
) -> Option<Hyphenation> {
    let visible: SmallVec<[usize; 32]> = chars
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c != SOFT_HYPHEN)
        .map(|(i, _)| i)
        .collect();
    let folded: SmallVec<[char; 32]> = visible.iter().map(|&i| fold_char(chars[i])).collect();
    let bounds = left_min..=folded.len().saturating_sub(right_min);
    let to_char_index = |offset: usize| visible.get(offset).copied();

    let folded_word: String = folded.iter().collect();
    if let Some(entry) = table.exception(&folded_word) {
        let points = entry
            .breaks()
            .iter()
            .copied()
            .filter(|p| bounds.contains(p))
            .filter_map(to_char_index);
        return Hyphenation::from_points(word, points, BreakSource::Exception);
    }

    let weights = table.weights_for(&folded);
    let points = weights
        .odd_gaps()
        .filter(|p| bounds.contains(p))
        .filter_map(to_char_index);
    Hyphenation::from_points(word, points, BreakSource::Patterns)
}
