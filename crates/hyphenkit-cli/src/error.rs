use std::path::PathBuf;

use hyphenkit::{HyphenError, PatternError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read {}: {source}", path.display())]
    ReadPatterns {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    InvalidPatterns {
        path: PathBuf,
        #[source]
        source: PatternError,
    },

    #[error("{0}")]
    Hyphen(#[from] HyphenError),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl CliError {
    /// 2 for bad input (arguments or pattern data), 1 for everything else.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidPatterns { .. } | Self::Hyphen(_) | Self::InvalidArgument { .. } => 2,
            Self::Io(_) | Self::Json(_) | Self::ReadPatterns { .. } => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
