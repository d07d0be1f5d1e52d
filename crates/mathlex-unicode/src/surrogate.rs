use std::fmt;

use serde::{Deserialize, Serialize};

use crate::InvalidCodePoint;

/// First value of the high surrogate block.
pub const HIGH_SURROGATE_START: u16 = 0xD800;
/// First value of the low surrogate block.
pub const LOW_SURROGATE_START: u16 = 0xDC00;
/// First scalar that needs two code units.
pub const SUPPLEMENTARY_START: u32 = 0x1_0000;
/// Largest Unicode scalar value.
pub const MAX_SCALAR: u32 = 0x10_FFFF;

/// The UTF-16 encoding of one Unicode scalar value.
///
/// Scalars in the Basic Multilingual Plane need a single code unit; they are
/// represented with `high == 0` and the unit itself in `low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurrogatePair {
    pub high: u16,
    pub low: u16,
}

impl SurrogatePair {
    /// Encodes a scalar value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCodePoint`] for negative values, values above
    /// `0x10FFFF` and values in the surrogate block.
    pub fn encode(scalar: impl Into<i64>) -> Result<Self, InvalidCodePoint> {
        let value = scalar.into();
        match value {
            0x0000..=0xD7FF | 0xE000..=0xFFFF => Ok(Self {
                high: 0,
                low: value as u16,
            }),
            0x1_0000..=0x10_FFFF => {
                let offset = value - i64::from(SUPPLEMENTARY_START);
                Ok(Self {
                    high: (offset / 0x400) as u16 + HIGH_SURROGATE_START,
                    low: (offset % 0x400) as u16 + LOW_SURROGATE_START,
                })
            }
            _ => Err(InvalidCodePoint(value)),
        }
    }

    /// Returns true when the scalar fits in a single code unit.
    pub fn is_bmp(&self) -> bool {
        self.high == 0
    }

    /// Recombines the pair into the scalar it encodes.
    pub fn decode(&self) -> u32 {
        if self.is_bmp() {
            return u32::from(self.low);
        }
        (u32::from(self.high - HIGH_SURROGATE_START) << 10)
            + u32::from(self.low - LOW_SURROGATE_START)
            + SUPPLEMENTARY_START
    }
}

impl From<char> for SurrogatePair {
    fn from(c: char) -> Self {
        let mut buf = [0u16; 2];
        match *c.encode_utf16(&mut buf) {
            [high, low] => Self { high, low },
            [low] => Self { high: 0, low },
            _ => unreachable!("UTF-16 encodes a char in one or two units"),
        }
    }
}

/// Renders a single code unit as `\uXXXX`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EscapedUnit(pub u16);

impl fmt::Display for EscapedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\u{:04X}", self.0)
    }
}

impl fmt::Display for SurrogatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_bmp() {
            write!(f, "{}", EscapedUnit(self.high))?;
        }
        write!(f, "{}", EscapedUnit(self.low))
    }
}

/// Encodes a scalar value. See [`SurrogatePair::encode`].
pub fn encode(scalar: impl Into<i64>) -> Result<SurrogatePair, InvalidCodePoint> {
    SurrogatePair::encode(scalar)
}

/// Formats one UTF-16 code unit as a JavaScript escape, e.g. `\u00AC`.
pub fn format_unit(unit: u16) -> String {
    EscapedUnit(unit).to_string()
}

/// Formats a pair as its escaped units, omitting the high unit for BMP scalars.
pub fn format_pair(pair: &SurrogatePair) -> String {
    pair.to_string()
}
