//! # mathlex character commands
//!
//! Generates lexer rules that map LaTeX character commands and raw Unicode
//! characters to grammar tokens.
//!
//! ## Input
//!
//! A whitespace-separated table, one character per line:
//!
//! ```text
//! U003B1 A \alpha
//! U02264 OPS \leq \le
//! U02268-0FE00 OPS \lvertneqq
//! ```
//!
//! The first field holds the scalar(s) in hexadecimal, the second the
//! mathclass, the rest the LaTeX commands producing the character.
//!
//! ## Output
//!
//! ```text
//! "\\alpha" { yytext = "\u03B1"; return "A"; }
//! "\\leq" { yytext = "\u2264"; return "OPS"; }
//! "\\le" { yytext = "\u2264"; return "OPS"; }
//! "\\lvertneqq" { yytext = "\u2268\uFE00"; return "OPS"; }
//! "\u2268\uFE00" return "OPS";
//! \u03B1 return "A";
//! \u2264 return "OPS";
//! ```
//!
//! Which mathclasses become tokens, which commands are accepted and which
//! characters are special-cased all come from [`GeneratorConfig`], so that
//! several grammar variants can share one generator.
//!
//! ## Example
//!
//! ```
//! use mathlex_charcommands::{InvalidPolicy, RuleGenerator, render};
//!
//! let table = "U003B1 A \\alpha\nU003B2 A \\beta\n";
//! let rules = RuleGenerator::new().generate(table, InvalidPolicy::Abort)?;
//! assert_eq!(
//!     render(&rules),
//!     concat!(
//!         "\"\\\\alpha\" { yytext = \"\\u03B1\"; return \"A\"; }\n",
//!         "\"\\\\beta\" { yytext = \"\\u03B2\"; return \"A\"; }\n",
//!         "[\\u03B1\\u03B2] return \"A\";\n",
//!     )
//! );
//! # Ok::<(), mathlex_charcommands::GenerateError>(())
//! ```

/// Classification and command tables.
pub mod config;
pub mod error;
/// Rule generation.
pub mod generator;
/// Character table records.
pub mod record;
/// Generated rule IR.
pub mod rules;


pub use config::GeneratorConfig;
pub use error::{ConfigError, GenerateError, RecordError};
pub use generator::{InvalidPolicy, RuleGenerator};
pub use record::{CharRecord, records};
pub use rules::{LexRule, TokenRanges, render};
