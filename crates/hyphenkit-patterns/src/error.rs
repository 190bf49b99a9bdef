use thiserror::Error;

pub type Result<T> = std::result::Result<T, PatternError>;

/// Reasons a pattern source or a single entry is rejected.
///
/// Any of these aborts the construction of the whole table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern has no letters")]
    EmptyPattern,

    #[error("pattern `{pattern}` has {found} weights for {expected} gaps")]
    WeightCountMismatch {
        pattern: String,
        expected: usize,
        found: usize,
    },

    #[error("pattern `{pattern}` has a multi-digit weight")]
    MultiDigitWeight { pattern: String },

    #[error("`{entry}` contains illegal character {ch:?}")]
    IllegalCharacter { entry: String, ch: char },

    #[error("pattern `{pattern}` has a word boundary away from its ends")]
    MisplacedBoundary { pattern: String },

    #[error("pattern `{pattern}` is defined twice with different weights")]
    ConflictingPattern { pattern: String },

    #[error("malformed exception `{entry}`")]
    MalformedException { entry: String },

    #[error("exception `{word}` is defined twice with different breaks")]
    ConflictingException { word: String },

    #[error("expected `{{` after `\\{group}`")]
    MissingBrace { group: String },

    #[error("unterminated `\\{group}` group")]
    UnterminatedGroup { group: String },

    #[error("unknown group `\\{group}`")]
    UnknownGroup { group: String },

    #[error("entry outside of any group: `{entry}`")]
    StrayEntry { entry: String },

    #[error("invalid language key `{key}`")]
    InvalidLanguageKey { key: String },

    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<PatternError>,
    },
}

impl PatternError {
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        match self {
            already @ Self::AtLine { .. } => already,
            other => Self::AtLine {
                line,
                source: Box::new(other),
            },
        }
    }

    /// The error with any line information stripped.
    #[must_use]
    pub fn kind(&self) -> &PatternError {
        match self {
            Self::AtLine { source, .. } => source.kind(),
            other => other,
        }
    }
}
