use thiserror::Error;

/// An integer that is not a Unicode scalar value.
///
/// Raised for negative values, values above `0x10FFFF`, and values inside the
/// surrogate block `0xD800..=0xDFFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid code point {}", describe(.0))]
pub struct InvalidCodePoint(pub i64);

fn describe(value: &i64) -> String {
    if *value < 0 {
        value.to_string()
    } else {
        format!("U+{value:04X}")
    }
}
