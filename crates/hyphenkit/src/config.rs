//! Per-document hyphenation settings.

use hyphenkit_patterns::{LanguageKey, PatternRegistry, PatternSource};

use crate::engine::{Hyphenator, SOFT_HYPHEN};
use crate::error::{Result, check_minimum};
use crate::hyphenation::Hyphenation;

/// Symbol shown at break points when rendering a [`Hyphenation`].
pub const DEFAULT_HYPHEN_SYMBOL: char = '-';

/// A hyphenator bundled with the minimum run lengths to apply and the
/// symbol a renderer should draw at a break.
///
/// The symbol is carried for callers; the engine never inserts it.
#[derive(Debug, Clone)]
pub struct HyphenationConfig {
    hyphenator: Hyphenator,
    left_min: usize,
    right_min: usize,
    hyphen_symbol: char,
}

impl HyphenationConfig {
    /// Settings that only honour soft hyphens already in the text.
    pub fn without_language(left_min: usize, right_min: usize) -> Result<Self> {
        Self::from_hyphenator(Hyphenator::without_language(), left_min, right_min)
    }

    pub fn from_hyphenator(hyphenator: Hyphenator, left_min: usize, right_min: usize) -> Result<Self> {
        check_minimum("left_min", left_min)?;
        check_minimum("right_min", right_min)?;
        Ok(Self {
            hyphenator,
            left_min,
            right_min,
            hyphen_symbol: DEFAULT_HYPHEN_SYMBOL,
        })
    }

    /// Settings for `language` and optional `country`, resolved through
    /// `registry`. Falls back to soft-hyphen-only mode for unknown languages.
    pub fn for_language(
        registry: &PatternRegistry,
        source: &dyn PatternSource,
        language: &str,
        country: Option<&str>,
        left_min: usize,
        right_min: usize,
    ) -> Result<Self> {
        let key = LanguageKey::new(language, country);
        let hyphenator = Hyphenator::for_language(registry, source, &key)?;
        Self::from_hyphenator(hyphenator, left_min, right_min)
    }

    #[must_use]
    pub fn with_hyphen_symbol(mut self, symbol: char) -> Self {
        self.hyphen_symbol = symbol;
        self
    }

    #[must_use]
    pub fn hyphen_symbol(&self) -> char {
        self.hyphen_symbol
    }

    pub fn set_hyphen_symbol(&mut self, symbol: char) {
        self.hyphen_symbol = symbol;
    }

    #[must_use]
    pub fn left_min(&self) -> usize {
        self.left_min
    }

    #[must_use]
    pub fn right_min(&self) -> usize {
        self.right_min
    }

    #[must_use]
    pub fn hyphenator(&self) -> &Hyphenator {
        &self.hyphenator
    }

    /// Break points of `word` under these settings.
    pub fn hyphenate(&self, word: &str) -> Result<Option<Hyphenation>> {
        self.hyphenator.hyphenate(word, self.left_min, self.right_min)
    }

    /// `word` with the configured symbol at every break point, or the word
    /// unchanged (soft hyphens removed) when it has none.
    pub fn render(&self, word: &str) -> Result<String> {
        Ok(match self.hyphenate(word)? {
            Some(hyphenation) => hyphenation.display_with(self.hyphen_symbol),
            None => word.chars().filter(|&c| c != SOFT_HYPHEN).collect(),
        })
    }
}
