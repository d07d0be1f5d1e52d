use std::fmt;

use serde::{Deserialize, Serialize};

use crate::InvalidCodePoint;
use crate::surrogate::{EscapedUnit, SurrogatePair};

/// A closed interval `[start, end]` of low surrogates (or BMP units).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowRange {
    pub start: u16,
    pub end: u16,
}

impl LowRange {
    fn single(unit: u16) -> Self {
        Self {
            start: unit,
            end: unit,
        }
    }

    /// Number of code units covered by the interval.
    pub fn width(&self) -> usize {
        usize::from(self.end - self.start) + 1
    }
}

/// All committed intervals that share one high surrogate.
///
/// `high == 0` holds the BMP intervals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurrogateGroup {
    pub high: u16,
    pub ranges: Vec<LowRange>,
}

impl SurrogateGroup {
    fn is_single_unit(&self) -> bool {
        matches!(self.ranges.as_slice(), [range] if range.start == range.end)
    }
}

impl fmt::Display for SurrogateGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.high != 0 {
            write!(f, "{}", EscapedUnit(self.high))?;
        }
        // `[\uXXXX]` is written as a bare unit.
        let bracketed = !self.is_single_unit();
        if bracketed {
            f.write_str("[")?;
        }
        for range in &self.ranges {
            write!(f, "{}", EscapedUnit(range.start))?;
            match range.end - range.start {
                0 => {}
                1 => write!(f, "{}", EscapedUnit(range.end))?,
                _ => write!(f, "-{}", EscapedUnit(range.end))?,
            }
        }
        if bracketed {
            f.write_str("]")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenRange {
    high: u16,
    range: LowRange,
}

/// Accumulates scalar values and serializes them as a character-class pattern.
///
/// Scalars are grouped by high surrogate, groups keep the order in which their
/// high surrogate was first seen, and intervals keep the order in which they
/// were closed. A scalar extends the open interval only when it shares its high
/// surrogate and its low unit directly follows the interval end; everything
/// else closes the interval and opens a new one. Input order therefore shapes
/// the output: `0x45, 0x43, 0x44` yields two intervals, not one.
///
/// [`serialize`](Self::serialize) closes the open interval. Adding more
/// scalars afterwards is allowed and starts a fresh interval, so a later
/// `serialize` may list adjacent units in separate intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeCompressor {
    groups: Vec<SurrogateGroup>,
    open: Option<OpenRange>,
}

impl RangeCompressor {
    /// Creates an empty compressor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one scalar value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCodePoint`] if the scalar cannot be encoded; the
    /// compressor is left untouched in that case.
    pub fn add(&mut self, scalar: impl Into<i64>) -> Result<(), InvalidCodePoint> {
        let pair = SurrogatePair::encode(scalar)?;

        if let Some(open) = self.open.as_mut() {
            if open.high == pair.high && open.range.end.checked_add(1) == Some(pair.low) {
                open.range.end = pair.low;
                return Ok(());
            }
        }

        self.commit();
        self.open = Some(OpenRange {
            high: pair.high,
            range: LowRange::single(pair.low),
        });
        Ok(())
    }

    /// Returns true if no scalar has been added.
    pub fn is_empty(&self) -> bool {
        self.open.is_none() && self.groups.is_empty()
    }

    /// Closes the open interval and returns the committed groups.
    pub fn close(&mut self) -> &[SurrogateGroup] {
        self.commit();
        &self.groups
    }

    /// Closes the open interval and renders all groups joined by `|`.
    ///
    /// Returns an empty string for an empty compressor. Calling this twice in a
    /// row yields the same string.
    pub fn serialize(&mut self) -> String {
        self.close()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("|")
    }

    fn commit(&mut self) {
        let Some(OpenRange { high, range }) = self.open.take() else {
            return;
        };
        match self.groups.iter().position(|group| group.high == high) {
            Some(idx) => self.groups[idx].ranges.push(range),
            None => self.groups.push(SurrogateGroup {
                high,
                ranges: vec![range],
            }),
        }
    }
}
