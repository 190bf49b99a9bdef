//! Immutable per-language pattern tables.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::error::{PatternError, Result};
use crate::key::LanguageKey;
use crate::pattern::{ExceptionEntry, Pattern, compile_pattern, fold_char, parse_exception};
use crate::trie::PatternTrie;
use crate::weights::WeightVector;

/// The patterns and exceptions of one language.
///
/// Read-only once built. Every lookup allocates its own [`WeightVector`], so
/// one table can serve any number of threads at once.
#[derive(Debug, Clone)]
pub struct PatternTable {
    key: LanguageKey,
    trie: PatternTrie,
    /// Keyed by the case-folded word.
    exceptions: FxHashMap<String, ExceptionEntry>,
}

impl PatternTable {
    #[must_use]
    pub fn builder(key: LanguageKey) -> PatternTableBuilder {
        PatternTableBuilder::new(key)
    }

    /// Builds a table from TeX-notation patterns (`"hy3ph"`) and
    /// hyphen-delimited exceptions (`"ta-ble"`).
    pub fn from_tex(key: LanguageKey, patterns: &[&str], exceptions: &[&str]) -> Result<Self> {
        let mut builder = PatternTableBuilder::new(key);
        for text in patterns {
            builder.push_pattern(compile_pattern(text)?);
        }
        for text in exceptions {
            builder.push_exception(parse_exception(text)?);
        }
        builder.build()
    }

    #[must_use]
    pub fn key(&self) -> &LanguageKey {
        &self.key
    }

    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.trie.pattern_count()
    }

    #[must_use]
    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    /// Case-insensitive exact lookup of a whole-word exception.
    #[must_use]
    pub fn exception(&self, word: &str) -> Option<&ExceptionEntry> {
        if word.chars().all(|c| fold_char(c) == c) {
            self.exceptions.get(word)
        } else {
            let folded: String = word.chars().map(fold_char).collect();
            self.exceptions.get(&folded)
        }
    }

    /// Gap weights for `word`, folding case first.
    #[must_use]
    pub fn weights(&self, word: &str) -> WeightVector {
        let folded: SmallVec<[char; 32]> = word.chars().map(fold_char).collect();
        self.weights_for(&folded)
    }

    /// Gap weights for an already case-folded word.
    ///
    /// Every substring of the word padded with a word edge on both sides is
    /// run through the trie. A [`BOUNDARY`](crate::BOUNDARY) in a pattern
    /// matches only those edges, never a literal `.` in the word.
    #[must_use]
    pub fn weights_for(&self, folded: &[char]) -> WeightVector {
        let mut out = WeightVector::zeroed(folded.len());
        for start in 0..folded.len() + 2 {
            self.trie.apply_at(folded, start, &mut out);
        }
        out
    }
}

/// Collects patterns and exceptions, then validates them as a whole.
#[derive(Debug, Clone)]
pub struct PatternTableBuilder {
    key: LanguageKey,
    patterns: Vec<Pattern>,
    exceptions: Vec<ExceptionEntry>,
}

impl PatternTableBuilder {
    #[must_use]
    pub fn new(key: LanguageKey) -> Self {
        Self {
            key,
            patterns: Vec::new(),
            exceptions: Vec::new(),
        }
    }

    #[must_use]
    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.push_pattern(pattern);
        self
    }

    #[must_use]
    pub fn exception(mut self, entry: ExceptionEntry) -> Self {
        self.push_exception(entry);
        self
    }

    pub fn push_pattern(&mut self, pattern: Pattern) {
        self.patterns.push(pattern);
    }

    pub fn push_exception(&mut self, entry: ExceptionEntry) {
        self.exceptions.push(entry);
    }

    /// Builds the table, failing on the first conflicting entry.
    pub fn build(self) -> Result<PatternTable> {
        let mut trie = PatternTrie::new();
        for pattern in &self.patterns {
            trie.insert(pattern)?;
        }

        let mut exceptions = FxHashMap::default();
        for entry in self.exceptions {
            match exceptions.entry(entry.word().to_string()) {
                Entry::Occupied(slot) => {
                    if slot.get() != &entry {
                        return Err(PatternError::ConflictingException {
                            word: entry.word().to_string(),
                        });
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
            }
        }

        debug!(
            language = %self.key,
            patterns = trie.pattern_count(),
            exceptions = exceptions.len(),
            "pattern table built"
        );

        Ok(PatternTable {
            key: self.key,
            trie,
            exceptions,
        })
    }
}
