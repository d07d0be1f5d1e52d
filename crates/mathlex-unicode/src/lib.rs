//! # mathlex Unicode core
//!
//! UTF-16 encoding of Unicode scalar values and compression of scalar sets
//! into lexer character-class patterns.
//!
//! ## Overview
//!
//! Lexers generated for JavaScript match on UTF-16 code units, not on scalar
//! values. This crate provides the two pieces needed to emit such rules:
//!
//! - [`SurrogatePair`](surrogate::SurrogatePair) - the UTF-16 form of a single
//!   scalar, with `high == 0` for scalars that fit in one code unit
//! - [`RangeCompressor`](range::RangeCompressor) - an accumulator that groups
//!   scalars by high surrogate and merges consecutive runs of low units
//!
//! ## Pattern format
//!
//! ```text
//! add(0x41) add(0x42) add(0x43) add(0x1D400) add(0x1D401)
//!                      │
//!                      ▼ serialize()
//! [\u0041-\u0043]|\uD835[\uDC00\uDC01]
//! ```
//!
//! - Groups appear in the order their high surrogate was first seen and are
//!   joined with `|`; BMP groups carry no high-surrogate prefix.
//! - Runs of three or more units use `-`; runs of two list both units.
//! - A group made of a single unit is emitted without brackets.
//!
//! Only *immediately consecutive* ingestions merge. Feeding `0x45, 0x43, 0x44`
//! produces `[\u0045\u0043\u0044]`, not `[\u0043-\u0045]`. The output
//! follows input order, and downstream lexers rely on that stability.
//!
//! ## Examples
//!
//! ```
//! use mathlex_unicode::{RangeCompressor, SurrogatePair};
//!
//! let pair = SurrogatePair::encode(0x1D400)?;
//! assert_eq!(pair.to_string(), "\\uD835\\uDC00");
//!
//! let mut ranges = RangeCompressor::new();
//! for scalar in [0x41, 0x42, 0x43, 0x1D400] {
//!     ranges.add(scalar)?;
//! }
//! assert_eq!(ranges.serialize(), "[\\u0041-\\u0043]|\\uD835\\uDC00");
//! # Ok::<(), mathlex_unicode::InvalidCodePoint>(())
//! ```

/// Error type for scalar values that cannot be encoded.
pub mod error;
/// Grouping of encoded scalars into character-class patterns.
pub mod range;
/// Scalar to UTF-16 encoding.
pub mod surrogate;

#[cfg(test)]
mod tests;

pub use error::InvalidCodePoint;
pub use range::{LowRange, RangeCompressor, SurrogateGroup};
pub use surrogate::{SurrogatePair, encode, format_pair, format_unit};
