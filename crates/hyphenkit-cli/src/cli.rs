use std::io::Write;

use clap::{Args, Parser, Subcommand};
use hyphenkit::{BuiltinSource, LanguageKey};
use tracing_subscriber::EnvFilter;

use crate::check::{CheckArgs, run_check};
use crate::error::{CliError, Result};
use crate::word::{WordArgs, run_word};

#[derive(Debug, Parser)]
#[command(
    name = "hyphenate",
    about = "Find hyphenation points with Liang (TeX) patterns",
    version
)]
pub struct Cli {
    /// Log at debug level on stderr. `RUST_LOG` takes precedence.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the hyphenation points of one or more words.
    Word(WordArgs),

    /// Parse a TeX pattern file and report what it contains.
    Check(CheckArgs),

    /// Print the languages with built-in patterns.
    #[command(name = "list-languages")]
    ListLanguages,
}

/// Language selection shared by subcommands.
#[derive(Debug, Clone, Args)]
pub struct LanguageArgs {
    /// Language code, e.g. `en`.
    #[arg(long = "lang", default_value = "en")]
    pub language: String,

    /// Region code, e.g. `US`. `none` selects the language default.
    #[arg(long)]
    pub country: Option<String>,
}

impl LanguageArgs {
    pub fn key(&self) -> Result<LanguageKey> {
        let text = match &self.country {
            Some(country) => format!("{}_{}", self.language, country),
            None => self.language.clone(),
        };
        text.parse().map_err(|err| CliError::invalid(format!("{err}")))
    }
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}

pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    match cli.command {
        Commands::Word(args) => run_word(&args, out),
        Commands::Check(args) => run_check(&args, out),
        Commands::ListLanguages => {
            for key in BuiltinSource::languages() {
                writeln!(out, "{key}")?;
            }
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
