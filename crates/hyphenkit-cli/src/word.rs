use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use hyphenkit::{
    BuiltinSource, DEFAULT_HYPHEN_SYMBOL, Hyphenation, HyphenationConfig, Hyphenator,
    PatternRegistry, SOFT_HYPHEN,
};
use serde::Serialize;

use crate::check::load_pattern_file;
use crate::cli::LanguageArgs;
use crate::error::Result;

#[derive(Debug, Clone, Args)]
pub struct WordArgs {
    /// Words to hyphenate.
    #[arg(required = true)]
    pub words: Vec<String>,

    #[command(flatten)]
    pub language: LanguageArgs,

    /// Load patterns from this TeX file instead of the built-in data.
    #[arg(long, conflicts_with = "no_language")]
    pub patterns: Option<PathBuf>,

    /// Ignore patterns; only soft hyphens in the input produce breaks.
    #[arg(long = "no-language")]
    pub no_language: bool,

    /// Minimum characters before a break.
    #[arg(long = "left-min", default_value_t = 2)]
    pub left_min: usize,

    /// Minimum characters after a break.
    #[arg(long = "right-min", default_value_t = 3)]
    pub right_min: usize,

    /// Symbol printed at each break.
    #[arg(long, default_value_t = DEFAULT_HYPHEN_SYMBOL)]
    pub symbol: char,

    /// One JSON object per word instead of plain text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct WordReport<'a> {
    word: &'a str,
    points: &'a [usize],
    hyphenated: String,
    source: Option<&'static str>,
}

impl WordArgs {
    fn config(&self) -> Result<HyphenationConfig> {
        let config = if self.no_language {
            HyphenationConfig::without_language(self.left_min, self.right_min)?
        } else if let Some(path) = &self.patterns {
            let table = load_pattern_file(path, self.language.key()?)?;
            HyphenationConfig::from_hyphenator(
                Hyphenator::new(Arc::new(table)),
                self.left_min,
                self.right_min,
            )?
        } else {
            let key = self.language.key()?;
            HyphenationConfig::for_language(
                PatternRegistry::global(),
                &BuiltinSource,
                key.language(),
                key.country(),
                self.left_min,
                self.right_min,
            )?
        };
        Ok(config.with_hyphen_symbol(self.symbol))
    }
}

pub fn run_word(args: &WordArgs, out: &mut dyn Write) -> Result<()> {
    let config = args.config()?;
    for word in &args.words {
        if !args.json {
            writeln!(out, "{}", config.render(word)?)?;
            continue;
        }
        let hyphenation = config.hyphenate(word)?;
        let report = WordReport {
            word,
            points: hyphenation.as_ref().map(Hyphenation::points).unwrap_or_default(),
            hyphenated: hyphenation.as_ref().map_or_else(
                || word.replace(SOFT_HYPHEN, ""),
                |h| h.display_with(config.hyphen_symbol()),
            ),
            source: hyphenation.as_ref().map(|h| h.source().as_str()),
        };
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
    }
    Ok(())
}
