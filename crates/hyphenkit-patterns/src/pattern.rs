//! Patterns and exception entries.
//!
//! TeX patterns interleave single-digit weights with letters. `"hy3ph"` puts
//! weight 3 on the gap between `y` and `p`; a missing digit means weight 0.
//! A leading or trailing `.` anchors the pattern to the start or end of a
//! word.
//!
//! Exceptions are whole words with their breaks spelled out with `-`, as in
//! `"as-so-ciate"`.

use std::fmt;

use smallvec::SmallVec;

use crate::error::{PatternError, Result};

/// Word-boundary marker in pattern text. It matches only the start or end of
/// a word; a `.` inside a word is an ordinary character.
pub const BOUNDARY: char = '.';

/// Character used to mark breaks inside exception entries.
const EXCEPTION_BREAK: char = '-';

/// Folds a character for case-insensitive matching.
///
/// Characters whose lowercase form expands to more than one character are
/// returned unchanged, so folding never changes a word's character count.
#[must_use]
pub fn fold_char(ch: char) -> char {
    if ch.is_ascii() {
        return ch.to_ascii_lowercase();
    }
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

/// Characters that may appear as letters in patterns and exceptions.
fn is_word_char(ch: char) -> bool {
    !(ch.is_whitespace()
        || ch.is_control()
        || ch.is_ascii_digit()
        || matches!(ch, BOUNDARY | EXCEPTION_BREAK | '{' | '}' | '\\' | '%'))
}

// ---------------------------------------------------------------------------
// Pattern
// ---------------------------------------------------------------------------

/// A compiled hyphenation pattern.
///
/// Holds `n` characters and exactly `n + 1` weights: index 0 is the gap
/// before the first character and index `n` the gap after the last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    chars: Box<[char]>,
    weights: SmallVec<[u8; 8]>,
}

impl Pattern {
    /// Builds a pattern from its characters and per-gap weights.
    ///
    /// Characters are case-folded. Fails when there are no letters, when the
    /// weight count is not `chars + 1`, or when a boundary marker sits
    /// anywhere but the first or last position.
    pub fn new(
        chars: impl IntoIterator<Item = char>,
        weights: impl IntoIterator<Item = u8>,
    ) -> Result<Self> {
        let chars: Box<[char]> = chars.into_iter().map(fold_char).collect();
        let weights: SmallVec<[u8; 8]> = weights.into_iter().collect();
        let spelled = || chars.iter().collect::<String>();

        if chars.iter().all(|&c| c == BOUNDARY) {
            return Err(PatternError::EmptyPattern);
        }
        if weights.len() != chars.len() + 1 {
            return Err(PatternError::WeightCountMismatch {
                pattern: spelled(),
                expected: chars.len() + 1,
                found: weights.len(),
            });
        }
        if let Some(&ch) = chars.iter().find(|&&c| c != BOUNDARY && !is_word_char(c)) {
            return Err(PatternError::IllegalCharacter {
                entry: spelled(),
                ch,
            });
        }
        let last = chars.len() - 1;
        if chars
            .iter()
            .enumerate()
            .any(|(i, &c)| c == BOUNDARY && i != 0 && i != last)
        {
            return Err(PatternError::MisplacedBoundary { pattern: spelled() });
        }

        Ok(Self { chars, weights })
    }

    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    #[must_use]
    pub fn weights(&self) -> &[u8] {
        &self.weights
    }

    /// The pattern's characters without weights, e.g. `"hyph"` for `hy3ph`.
    #[must_use]
    pub fn letters(&self) -> String {
        self.chars.iter().collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for (i, &ch) in self.chars.iter().enumerate() {
            if self.weights[i] != 0 {
                write!(f, "{}", self.weights[i])?;
            }
            f.write_char(ch)?;
        }
        match self.weights[self.chars.len()] {
            0 => Ok(()),
            w => write!(f, "{w}"),
        }
    }
}

/// Parses a TeX pattern such as `"hy3ph"`, `".ex5am"` or `"4ism."`.
pub fn compile_pattern(text: &str) -> Result<Pattern> {
    let mut chars = Vec::with_capacity(text.len());
    let mut weights: SmallVec<[u8; 8]> = SmallVec::new();
    let mut pending_digit: Option<u8> = None;

    for ch in text.chars() {
        if let Some(digit) = ch.to_digit(10) {
            if pending_digit.is_some() {
                return Err(PatternError::MultiDigitWeight {
                    pattern: text.to_string(),
                });
            }
            pending_digit = Some(digit as u8);
        } else if ch == BOUNDARY || is_word_char(ch) {
            weights.push(pending_digit.take().unwrap_or(0));
            chars.push(ch);
        } else {
            return Err(PatternError::IllegalCharacter {
                entry: text.to_string(),
                ch,
            });
        }
    }
    // Trailing weight after the last character.
    weights.push(pending_digit.unwrap_or(0));

    Pattern::new(chars, weights)
}

// ---------------------------------------------------------------------------
// Exceptions
// ---------------------------------------------------------------------------

/// A whole word with explicit break offsets.
///
/// The word is stored case-folded; offsets count characters and are strictly
/// increasing, each strictly inside the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionEntry {
    word: String,
    breaks: SmallVec<[usize; 4]>,
}

impl ExceptionEntry {
    pub fn new(word: &str, breaks: impl IntoIterator<Item = usize>) -> Result<Self> {
        let folded: String = word.chars().map(fold_char).collect();
        let breaks: SmallVec<[usize; 4]> = breaks.into_iter().collect();
        let len = folded.chars().count();

        let malformed = || PatternError::MalformedException {
            entry: word.to_string(),
        };
        if len == 0 || !folded.chars().all(is_word_char) {
            return Err(malformed());
        }
        if breaks.iter().any(|&b| b == 0 || b >= len) || breaks.windows(2).any(|w| w[0] >= w[1])
        {
            return Err(malformed());
        }

        Ok(Self {
            word: folded,
            breaks,
        })
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn breaks(&self) -> &[usize] {
        &self.breaks
    }
}

impl fmt::Display for ExceptionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        let mut next = self.breaks.iter().peekable();
        for (i, ch) in self.word.chars().enumerate() {
            if next.peek() == Some(&&i) {
                next.next();
                f.write_char(EXCEPTION_BREAK)?;
            }
            f.write_char(ch)?;
        }
        Ok(())
    }
}

/// Parses an exception such as `"hy-phen-ation"` into `hyphenation` with
/// breaks `[2, 6]`.
pub fn parse_exception(text: &str) -> Result<ExceptionEntry> {
    let malformed = || PatternError::MalformedException {
        entry: text.to_string(),
    };
    let mut word = String::with_capacity(text.len());
    let mut breaks: SmallVec<[usize; 4]> = SmallVec::new();
    let mut char_count = 0usize;
    let mut after_break = false;

    for ch in text.chars() {
        if ch == EXCEPTION_BREAK {
            if char_count == 0 || after_break {
                return Err(malformed());
            }
            breaks.push(char_count);
            after_break = true;
        } else {
            word.push(ch);
            char_count += 1;
            after_break = false;
        }
    }
    if after_break {
        return Err(malformed());
    }

    ExceptionEntry::new(&word, breaks).map_err(|_| malformed())
}
