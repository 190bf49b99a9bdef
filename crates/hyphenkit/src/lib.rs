#![forbid(unsafe_code)]

//! Hyphenation point engine.
//!
//! Given a word, a language [`PatternTable`] and minimum run lengths, the
//! [`Hyphenator`] returns the character offsets at which the word may be
//! broken with a hyphen. Offsets come from, in order of precedence:
//!
//! 1. soft hyphens (U+00AD) already present in the word, if any of them
//!    satisfies the minimums,
//! 2. a whole-word exception in the table,
//! 3. Liang pattern weights (odd weight = break allowed).
//!
//! A hyphenator without a table still honours soft hyphens.
//!
//! ```
//! use hyphenkit::{BuiltinSource, Hyphenator, LanguageKey, PatternRegistry};
//!
//! let registry = PatternRegistry::new();
//! let hyphenator =
//!     Hyphenator::for_language(&registry, &BuiltinSource, &LanguageKey::language_only("en"))
//!         .unwrap();
//! let result = hyphenator.hyphenate("hyphenation", 2, 3).unwrap().unwrap();
//! assert_eq!(result.points(), &[2, 6]);
//! assert_eq!(result.to_string(), "hy-phen-ation");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod hyphenation;

pub use config::{DEFAULT_HYPHEN_SYMBOL, HyphenationConfig};
pub use engine::{Hyphenator, SOFT_HYPHEN};
pub use error::{HyphenError, Result};
pub use hyphenation::{BreakSource, Hyphenation};

pub use hyphenkit_patterns::{
    BuiltinSource, ExceptionEntry, LanguageKey, Pattern, PatternError, PatternRegistry,
    PatternSource, PatternTable, PatternTableBuilder, WeightVector, compile_pattern,
    parse_exception, parse_pattern_source,
};
