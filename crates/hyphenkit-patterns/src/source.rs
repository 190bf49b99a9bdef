//! Pattern sources: TeX pattern files and the embedded sample data.
//!
//! The accepted layout is the one used by the `hyph-*.tex` files:
//!
//! ```text
//! % comment
//! \patterns{
//! .ach4 .ad4der .af1t
//! }
//! \hyphenation{
//! as-so-ciate
//! }
//! ```
//!
//! Entries are whitespace separated and both groups may appear any number
//! of times. Anything else (stray entries, unknown control words, unclosed
//! groups) rejects the whole source.

use std::fmt;

use crate::error::{PatternError, Result};
use crate::key::LanguageKey;
use crate::pattern::{compile_pattern, parse_exception};
use crate::table::{PatternTable, PatternTableBuilder};

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// Something that can produce the pattern table for a language key.
///
/// Implementations load exactly the key they are given; falling back from a
/// regional key to the language default is the registry's job.
pub trait PatternSource {
    /// `Ok(None)` means the source has no data for `key`.
    fn load(&self, key: &LanguageKey) -> Result<Option<PatternTable>>;
}

impl<F> PatternSource for F
where
    F: Fn(&LanguageKey) -> Result<Option<PatternTable>>,
{
    fn load(&self, key: &LanguageKey) -> Result<Option<PatternTable>> {
        self(key)
    }
}

/// Pattern data compiled into the binary.
const BUILTIN: &[(&str, &str)] = &[("en", include_str!("../data/hyph-en.tex"))];

/// Source backed by the sample pattern files embedded in this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl BuiltinSource {
    /// Keys for which embedded data exists.
    pub fn languages() -> impl Iterator<Item = LanguageKey> {
        BUILTIN
            .iter()
            .map(|(language, _)| LanguageKey::language_only(language))
    }

    /// Raw TeX text for `key`, if embedded.
    #[must_use]
    pub fn text(key: &LanguageKey) -> Option<&'static str> {
        if !key.is_language_default() {
            return None;
        }
        BUILTIN
            .iter()
            .find(|(language, _)| *language == key.language())
            .map(|(_, text)| *text)
    }
}

impl PatternSource for BuiltinSource {
    fn load(&self, key: &LanguageKey) -> Result<Option<PatternTable>> {
        match Self::text(key) {
            Some(text) => parse_pattern_source(key.clone(), text).map(Some),
            None => Ok(None),
        }
    }
}

// ---------------------------------------------------------------------------
// TeX parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Control(&'a str),
    Open,
    Close,
    Entry(&'a str),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Control(name) => write!(f, "\\{name}"),
            Self::Open => f.write_str("{"),
            Self::Close => f.write_str("}"),
            Self::Entry(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    Patterns,
    Hyphenation,
}

impl Group {
    fn from_control(name: &str) -> Option<Self> {
        match name {
            "patterns" => Some(Self::Patterns),
            "hyphenation" => Some(Self::Hyphenation),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Patterns => "patterns",
            Self::Hyphenation => "hyphenation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    /// Saw `\patterns` or `\hyphenation`, waiting for `{`.
    Expecting(Group),
    Inside(Group),
}

fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '{' | '}' | '\\')
}

fn lex_line(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = line;
    loop {
        rest = rest.trim_start();
        let Some(first) = rest.chars().next() else {
            break;
        };
        match first {
            '{' => {
                tokens.push(Token::Open);
                rest = &rest[1..];
            }
            '}' => {
                tokens.push(Token::Close);
                rest = &rest[1..];
            }
            '\\' => {
                let body = &rest[1..];
                let end = body
                    .find(|c: char| !c.is_ascii_alphabetic())
                    .unwrap_or(body.len());
                tokens.push(Token::Control(&body[..end]));
                rest = &body[end..];
            }
            _ => {
                let end = rest.find(is_delimiter).unwrap_or(rest.len());
                tokens.push(Token::Entry(&rest[..end]));
                rest = &rest[end..];
            }
        }
    }
    tokens
}

fn step(state: State, token: Token<'_>, builder: &mut PatternTableBuilder) -> Result<State> {
    match (state, token) {
        (State::Outside, Token::Control(name)) => Group::from_control(name)
            .map(State::Expecting)
            .ok_or_else(|| PatternError::UnknownGroup {
                group: name.to_string(),
            }),
        (State::Outside, other) => Err(PatternError::StrayEntry {
            entry: other.to_string(),
        }),
        (State::Expecting(group), Token::Open) => Ok(State::Inside(group)),
        (State::Expecting(group), _) => Err(PatternError::MissingBrace {
            group: group.name().to_string(),
        }),
        (State::Inside(_), Token::Close) => Ok(State::Outside),
        (State::Inside(Group::Patterns), Token::Entry(text)) => {
            builder.push_pattern(compile_pattern(text)?);
            Ok(state)
        }
        (State::Inside(Group::Hyphenation), Token::Entry(text)) => {
            builder.push_exception(parse_exception(text)?);
            Ok(state)
        }
        (State::Inside(_), other) => Err(PatternError::StrayEntry {
            entry: other.to_string(),
        }),
    }
}

/// Parses a TeX pattern file into a table for `key`.
///
/// Errors carry the 1-based line they were found on, except for conflicts
/// between entries, which are only detected once every entry is read.
pub fn parse_pattern_source(key: LanguageKey, text: &str) -> Result<PatternTable> {
    let mut builder = PatternTableBuilder::new(key);
    let mut state = State::Outside;
    let mut line_no = 0;

    for (idx, raw) in text.lines().enumerate() {
        line_no = idx + 1;
        let line = raw.split('%').next().unwrap_or_default();
        for token in lex_line(line) {
            state = step(state, token, &mut builder).map_err(|err| err.at_line(line_no))?;
        }
    }

    match state {
        State::Outside => builder.build(),
        State::Expecting(group) | State::Inside(group) => Err(PatternError::UnterminatedGroup {
            group: group.name().to_string(),
        }
        .at_line(line_no)),
    }
}
