use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use hyphenkit::{LanguageKey, PatternTable, parse_pattern_source};
use tracing::debug;

use crate::cli::LanguageArgs;
use crate::error::{CliError, Result};

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// TeX pattern file (`\patterns{...}` / `\hyphenation{...}`).
    pub path: PathBuf,

    #[command(flatten)]
    pub language: LanguageArgs,
}

/// Reads and parses a pattern file, tagging errors with its path.
pub(crate) fn load_pattern_file(path: &Path, key: LanguageKey) -> Result<PatternTable> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadPatterns {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read pattern file");
    parse_pattern_source(key, &text).map_err(|source| CliError::InvalidPatterns {
        path: path.to_path_buf(),
        source,
    })
}

pub fn run_check(args: &CheckArgs, out: &mut dyn Write) -> Result<()> {
    let table = load_pattern_file(&args.path, args.language.key()?)?;
    writeln!(
        out,
        "{}: {} patterns, {} exceptions",
        args.path.display(),
        table.pattern_count(),
        table.exception_count()
    )?;
    Ok(())
}
