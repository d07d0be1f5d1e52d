use mathlex_unicode::RangeCompressor;

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::record::{CharRecord, records};
use crate::rules::{LexRule, TokenRanges};

/// What to do with a record that cannot be processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidPolicy {
    /// Stop at the first bad record.
    #[default]
    Abort,
    /// Log a warning and continue with the next record.
    Skip,
}

/// Turns character records into lexer rules.
///
/// Command and cluster rules are emitted as records arrive. Single characters
/// are collected per token and emitted as one range rule each by
/// [`finish`](Self::finish), in the order the tokens were first seen.
pub struct RuleGenerator {
    config: GeneratorConfig,
    ranges: Vec<(String, RangeCompressor)>,
}

impl Default for RuleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleGenerator {
    /// Creates a generator with the default tables.
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            ranges: Vec::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Processes one record and returns the rules it produces immediately.
    ///
    /// # Errors
    ///
    /// Fails if any scalar of the record is not a valid code point, even when
    /// the record maps to no token.
    pub fn update(&mut self, record: &CharRecord) -> Result<Vec<LexRule>, GenerateError> {
        let invalid = |source| GenerateError::InvalidCodePoint {
            line: record.line,
            source,
        };
        let yytext = record.js_string().map_err(invalid)?;

        let mathclass = self.config.effective_mathclass(record);
        let Some(token) = self.config.token_for(mathclass) else {
            log::trace!("line {}: mathclass {} has no token", record.line, mathclass);
            return Ok(Vec::new());
        };
        let token = token.to_string();

        let mut rules: Vec<LexRule> = self
            .config
            .commands_for(record)
            .into_iter()
            .map(|command| LexRule::Command {
                command,
                yytext: yytext.clone(),
                token: token.clone(),
            })
            .collect();

        match record.single_code_point() {
            Some(code_point) if self.config.is_range_excluded(code_point) => {}
            Some(code_point) => self.compressor_for(&token).add(code_point).map_err(invalid)?,
            None => rules.push(LexRule::Literal {
                text: yytext,
                token,
            }),
        }

        Ok(rules)
    }

    /// Processes every record of a table without emitting the range rules.
    pub fn feed(
        &mut self,
        text: &str,
        policy: InvalidPolicy,
    ) -> Result<Vec<LexRule>, GenerateError> {
        let mut rules = Vec::new();
        for record in records(text) {
            let outcome = record
                .map_err(GenerateError::from)
                .and_then(|record| self.update(&record));
            match outcome {
                Ok(mut emitted) => rules.append(&mut emitted),
                Err(err) if policy == InvalidPolicy::Skip => {
                    log::warn!("Skipping record: {}", err);
                }
                Err(err) => return Err(err),
            }
        }
        Ok(rules)
    }

    /// The compressed character set of every token collected so far.
    pub fn ranges(&mut self) -> Vec<TokenRanges> {
        self.ranges
            .iter_mut()
            .filter(|(_, compressor)| !compressor.is_empty())
            .map(|(token, compressor)| TokenRanges {
                token: token.clone(),
                groups: compressor.close().to_vec(),
                pattern: compressor.serialize(),
            })
            .collect()
    }

    /// Consumes the generator and returns one range rule per token.
    pub fn finish(self) -> Vec<LexRule> {
        self.ranges
            .into_iter()
            .filter(|(_, compressor)| !compressor.is_empty())
            .map(|(token, mut compressor)| {
                let pattern = compressor.serialize();
                log::debug!("Range rule for {}: {}", token, pattern);
                LexRule::Range { pattern, token }
            })
            .collect()
    }

    /// Generates the complete rule list for a table.
    pub fn generate(
        mut self,
        text: &str,
        policy: InvalidPolicy,
    ) -> Result<Vec<LexRule>, GenerateError> {
        let mut rules = self.feed(text, policy)?;
        rules.extend(self.finish());
        Ok(rules)
    }

    fn compressor_for(&mut self, token: &str) -> &mut RangeCompressor {
        let idx = match self.ranges.iter().position(|(name, _)| name == token) {
            Some(idx) => idx,
            None => {
                self.ranges.push((token.to_string(), RangeCompressor::new()));
                self.ranges.len() - 1
            }
        };
        &mut self.ranges[idx].1
    }
}
