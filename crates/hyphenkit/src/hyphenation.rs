//! Hyphenation results.

use std::fmt;

use smallvec::SmallVec;

use crate::config::DEFAULT_HYPHEN_SYMBOL;
use crate::engine::SOFT_HYPHEN;

/// Which rule produced a set of break points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakSource {
    /// Soft hyphens embedded in the word.
    SoftHyphen,
    /// A whole-word exception entry.
    Exception,
    /// Liang pattern weights.
    Patterns,
}

impl BreakSource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SoftHyphen => "soft-hyphen",
            Self::Exception => "exception",
            Self::Patterns => "patterns",
        }
    }
}

impl fmt::Display for BreakSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate break points of one word.
///
/// Points are character offsets into the original word, strictly increasing,
/// and never empty: a word without breaks yields no `Hyphenation` at all.
/// The word itself is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyphenation {
    word: String,
    points: SmallVec<[usize; 8]>,
    source: BreakSource,
}

impl Hyphenation {
    /// `None` when `points` is empty.
    pub(crate) fn from_points(
        word: &str,
        points: impl IntoIterator<Item = usize>,
        source: BreakSource,
    ) -> Option<Self> {
        let points: SmallVec<[usize; 8]> = points.into_iter().collect();
        if points.is_empty() {
            return None;
        }
        debug_assert!(points.windows(2).all(|w| w[0] < w[1]));
        Some(Self {
            word: word.to_string(),
            points,
            source,
        })
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn points(&self) -> &[usize] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn source(&self) -> BreakSource {
        self.source
    }

    /// Text before the `index`-th break point.
    #[must_use]
    pub fn pre_hyphen_text(&self, index: usize) -> Option<&str> {
        let point = *self.points.get(index)?;
        Some(&self.word[..byte_offset(&self.word, point)])
    }

    /// Text from the `index`-th break point to the end of the word.
    ///
    /// A soft hyphen that marks the break stays at the start of this text,
    /// so the pre and post text always join back into [`word`](Self::word).
    /// Use [`display_with`](Self::display_with) for marker-free output.
    #[must_use]
    pub fn post_hyphen_text(&self, index: usize) -> Option<&str> {
        let point = *self.points.get(index)?;
        Some(&self.word[byte_offset(&self.word, point)..])
    }

    /// The word with `symbol` inserted at every break point and soft
    /// hyphens removed.
    #[must_use]
    pub fn display_with(&self, symbol: char) -> String {
        let mut out = String::with_capacity(self.word.len() + self.points.len() * symbol.len_utf8());
        let mut next = self.points.iter().copied().peekable();
        for (i, ch) in self.word.chars().enumerate() {
            if next.next_if_eq(&i).is_some() {
                out.push(symbol);
            }
            if ch != SOFT_HYPHEN {
                out.push(ch);
            }
        }
        out
    }
}

impl fmt::Display for Hyphenation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(DEFAULT_HYPHEN_SYMBOL))
    }
}

/// Byte index of the character at `char_offset`, or the word length.
fn byte_offset(word: &str, char_offset: usize) -> usize {
    word.char_indices()
        .nth(char_offset)
        .map_or(word.len(), |(byte, _)| byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Hyphenation {
        Hyphenation::from_points("hyphenation", [2, 6], BreakSource::Patterns).unwrap()
    }

    #[test]
    fn empty_points_yield_none() {
        assert!(Hyphenation::from_points("word", std::iter::empty(), BreakSource::Patterns).is_none());
    }

    #[test]
    fn accessors() {
        let h = sample();
        assert_eq!(h.word(), "hyphenation");
        assert_eq!(h.points(), &[2, 6]);
        assert_eq!(h.len(), 2);
        assert!(!h.is_empty());
        assert_eq!(h.source(), BreakSource::Patterns);
    }

    #[test]
    fn pre_and_post_text() {
        let h = sample();
        assert_eq!(h.pre_hyphen_text(0), Some("hy"));
        assert_eq!(h.post_hyphen_text(0), Some("phenation"));
        assert_eq!(h.pre_hyphen_text(1), Some("hyphen"));
        assert_eq!(h.post_hyphen_text(1), Some("ation"));
        assert_eq!(h.pre_hyphen_text(2), None);
    }

    #[test]
    fn text_split_uses_char_offsets() {
        let h = Hyphenation::from_points("grüßen", [3], BreakSource::Patterns).unwrap();
        assert_eq!(h.pre_hyphen_text(0), Some("grü"));
        assert_eq!(h.post_hyphen_text(0), Some("ßen"));
    }

    #[test]
    fn display_inserts_symbol() {
        let h = sample();
        assert_eq!(h.to_string(), "hy-phen-ation");
        assert_eq!(h.display_with('\u{2010}'), "hy\u{2010}phen\u{2010}ation");
    }

    #[test]
    fn display_drops_soft_hyphens() {
        let h = Hyphenation::from_points("ab\u{AD}cd", [2], BreakSource::SoftHyphen).unwrap();
        assert_eq!(h.to_string(), "ab-cd");
    }

    #[test]
    fn marker_stays_with_post_text() {
        let h = Hyphenation::from_points("ab\u{AD}cd", [2], BreakSource::SoftHyphen).unwrap();
        assert_eq!(h.pre_hyphen_text(0), Some("ab"));
        assert_eq!(h.post_hyphen_text(0), Some("\u{AD}cd"));
        let joined = format!("{}{}", h.pre_hyphen_text(0).unwrap(), h.post_hyphen_text(0).unwrap());
        assert_eq!(joined, h.word());
    }

    #[test]
    fn source_names() {
        assert_eq!(BreakSource::SoftHyphen.to_string(), "soft-hyphen");
        assert_eq!(BreakSource::Exception.as_str(), "exception");
    }
}
