use mathlex_unicode::{InvalidCodePoint, SurrogatePair};
use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// One line of the character table.
///
/// The line layout is `U<hex>[-<hex>...] <mathclass> [<command>...]`, fields
/// separated by whitespace. Records with several scalars describe a cluster
/// such as a base character followed by a variation selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharRecord {
    /// 1-based line number in the table.
    pub line: usize,
    pub code_points: Vec<u32>,
    pub mathclass: String,
    /// Command strings in table order, without duplicates.
    pub commands: Vec<String>,
}

impl CharRecord {
    /// Parses one table line.
    ///
    /// Returns `Ok(None)` for blank lines. Scalar validity is not checked
    /// here; see [`CharRecord::js_string`].
    pub fn parse(text: &str, line: usize) -> Result<Option<Self>, RecordError> {
        let malformed = |reason: String| RecordError::Malformed { line, reason };

        let mut fields = text.split_whitespace();
        let Some(id) = fields.next() else {
            return Ok(None);
        };
        let mathclass = fields
            .next()
            .ok_or_else(|| malformed("missing mathclass field".to_string()))?;

        // Drop the one-character prefix (`U`).
        let mut chars = id.chars();
        chars.next();
        let hex = chars.as_str();
        if hex.is_empty() {
            return Err(malformed(format!("missing code point in `{id}`")));
        }

        let code_points = hex
            .split('-')
            .map(|part| {
                u32::from_str_radix(part, 16)
                    .map_err(|_| malformed(format!("invalid code point `{part}` in `{id}`")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut commands: Vec<String> = Vec::new();
        for command in fields {
            if !commands.iter().any(|c| c == command) {
                commands.push(command.to_string());
            }
        }

        Ok(Some(Self {
            line,
            code_points,
            mathclass: mathclass.to_string(),
            commands,
        }))
    }

    pub fn is_single_char(&self) -> bool {
        self.code_points.len() == 1
    }

    /// The scalar of a single-character record.
    pub fn single_code_point(&self) -> Option<u32> {
        match self.code_points.as_slice() {
            [code_point] => Some(*code_point),
            _ => None,
        }
    }

    /// The escaped UTF-16 form of all scalars, concatenated in order.
    pub fn js_string(&self) -> Result<String, InvalidCodePoint> {
        self.code_points
            .iter()
            .map(|&code_point| SurrogatePair::encode(code_point).map(|pair| pair.to_string()))
            .collect()
    }
}

/// Iterates over the records of a table, skipping blank lines.
pub fn records(text: &str) -> impl Iterator<Item = Result<CharRecord, RecordError>> + '_ {
    text.lines()
        .enumerate()
        .filter_map(|(idx, line)| CharRecord::parse(line, idx + 1).transpose())
}
