use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::record::CharRecord;

/// Forces the mathclass of a single-character record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathclassOverride {
    pub code_point: u32,
    pub mathclass: String,
}

/// A command added to a single-character record regardless of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraCommand {
    pub code_point: u32,
    pub command: String,
}

/// Mathclasses that produce lexer tokens.
///
/// A mathclass equal to one of `exact`, or starting with one of `prefixes`,
/// is used verbatim as the token name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenClasses {
    pub exact: Vec<String>,
    pub prefixes: Vec<String>,
}

impl Default for TokenClasses {
    fn default() -> Self {
        Self {
            exact: vec!["A".into(), "NUM".into(), "TEXT".into()],
            prefixes: vec!["OP".into()],
        }
    }
}

/// Classification and command tables driving rule generation.
///
/// Every field has a default, so a JSON file only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub mathclass_overrides: Vec<MathclassOverride>,
    pub extra_commands: Vec<ExtraCommand>,
    /// Commands dropped on exact match.
    pub rejected_commands: Vec<String>,
    /// Commands dropped when they contain one of these.
    pub rejected_fragments: Vec<String>,
    pub tokens: TokenClasses,
    /// Characters that are special to the lexer and never go into a range rule.
    pub range_exclusions: Vec<u32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let overrides = [
            (0x221E, "NUM"),
            (0x0024, "TEXT"),
            (0x2032, "OP"),
            (0x2033, "OP"),
            (0x2034, "OP"),
            (0x2035, "OP"),
            (0x2057, "OP"),
        ];
        let extras = [
            (0x007B, "\\{"),
            (0x007D, "\\}"),
            (0x221E, "\\infinity"),
            (0x2032, "'"),
            (0x2033, "''"),
            (0x2034, "'''"),
            (0x2037, "''''"),
        ];

        Self {
            mathclass_overrides: overrides
                .into_iter()
                .map(|(code_point, mathclass)| MathclassOverride {
                    code_point,
                    mathclass: mathclass.to_string(),
                })
                .collect(),
            extra_commands: extras
                .into_iter()
                .map(|(code_point, command)| ExtraCommand {
                    code_point,
                    command: command.to_string(),
                })
                .collect(),
            rejected_commands: ["\\hat", "{_\\ast}", "{{/}\\!\\!{/}}"]
                .map(String::from)
                .into(),
            rejected_fragments: ["\\fontencoding", "\\ElsevierGlyph", "\\Pisymbol", "\\mbox"]
                .map(String::from)
                .into(),
            tokens: TokenClasses::default(),
            range_exclusions: vec![0x7B, 0x7D, 0x5E, 0x5F, 0x26, 0x5C, 0x25, 0x24, 0x2E],
        }
    }
}

impl GeneratorConfig {
    /// Loads a config from a JSON file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&content)?;
        log::info!("Loaded generator config from {:?}", path);
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Returns true if `command` may appear in a generated rule.
    pub fn is_valid_command(&self, command: &str) -> bool {
        command.contains('\\')
            && !self.rejected_commands.iter().any(|c| c == command)
            && !self
                .rejected_fragments
                .iter()
                .any(|fragment| command.contains(fragment.as_str()))
    }

    /// The mathclass after applying overrides.
    pub fn effective_mathclass<'a>(&'a self, record: &'a CharRecord) -> &'a str {
        record
            .single_code_point()
            .and_then(|code_point| {
                self.mathclass_overrides
                    .iter()
                    .find(|o| o.code_point == code_point)
            })
            .map_or(record.mathclass.as_str(), |o| o.mathclass.as_str())
    }

    /// The token emitted for `mathclass`, if any.
    pub fn token_for<'m>(&self, mathclass: &'m str) -> Option<&'m str> {
        let tokens = &self.tokens;
        let matches = tokens.exact.iter().any(|name| name == mathclass)
            || tokens
                .prefixes
                .iter()
                .any(|prefix| mathclass.starts_with(prefix.as_str()));
        matches.then_some(mathclass)
    }

    pub fn is_range_excluded(&self, code_point: u32) -> bool {
        self.range_exclusions.contains(&code_point)
    }

    /// The commands to emit for a record, with backslashes escaped for a
    /// double-quoted lexer pattern.
    pub fn commands_for(&self, record: &CharRecord) -> Vec<String> {
        let mut commands: Vec<&str> = record
            .commands
            .iter()
            .map(String::as_str)
            .filter(|command| self.is_valid_command(command))
            .collect();

        if let Some(code_point) = record.single_code_point() {
            for extra in &self.extra_commands {
                if extra.code_point == code_point && !commands.contains(&extra.command.as_str()) {
                    commands.push(&extra.command);
                }
            }
        }

        commands
            .into_iter()
            .map(|command| command.replace('\\', "\\\\"))
            .collect()
    }
}
