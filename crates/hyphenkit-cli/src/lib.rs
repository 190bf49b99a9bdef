#![forbid(unsafe_code)]

//! The `hyphenate` command-line tool.

pub mod check;
pub mod cli;
pub mod error;
pub mod word;

pub use cli::{Cli, Commands, run, run_from_env};
pub use error::{CliError, Result};
