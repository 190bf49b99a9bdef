#![forbid(unsafe_code)]

//! Pattern tables for Liang (TeX) hyphenation.
//!
//! A [`PatternTable`] holds the compiled patterns of one language in a trie
//! together with its whole-word exceptions. Tables are immutable once built
//! and can be shared freely between threads behind an [`std::sync::Arc`].
//!
//! ```text
//! hyph-xx.tex ──parse──▶ PatternTableBuilder ──build──▶ PatternTable
//!                                                          │
//!                          PatternRegistry (Arc cache) ◀───┘
//! ```
//!
//! Tables come from three places: [`parse_pattern_source`] for TeX files,
//! [`PatternTableBuilder`] for programmatic construction, and
//! [`BuiltinSource`] for the embedded sample data.

pub mod error;
pub mod key;
pub mod pattern;
pub mod registry;
pub mod source;
pub mod table;
mod trie;
pub mod weights;

pub use error::{PatternError, Result};
pub use key::LanguageKey;
pub use pattern::{
    BOUNDARY, ExceptionEntry, Pattern, compile_pattern, fold_char, parse_exception,
};
pub use registry::PatternRegistry;
pub use source::{BuiltinSource, PatternSource, parse_pattern_source};
pub use table::{PatternTable, PatternTableBuilder};
pub use weights::WeightVector;
