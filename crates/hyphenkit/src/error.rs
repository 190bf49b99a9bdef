use hyphenkit_patterns::PatternError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HyphenError>;

/// Precondition violations and table failures reported by the engine.
///
/// Finding no break point is not an error; it is `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HyphenError {
    #[error("cannot hyphenate an empty word")]
    EmptyWord,

    #[error("{name} must be at least 1, got {value}")]
    InvalidMinimum { name: &'static str, value: usize },

    #[error("pattern table: {0}")]
    Patterns(#[from] PatternError),
}

pub(crate) fn check_minimum(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        Err(HyphenError::InvalidMinimum { name, value })
    } else {
        Ok(())
    }
}
