use std::fmt;

use mathlex_unicode::SurrogateGroup;
use serde::{Deserialize, Serialize};

/// One line of the generated lexer grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum LexRule {
    /// Matches a LaTeX command and substitutes the character it stands for.
    Command {
        command: String,
        yytext: String,
        token: String,
    },
    /// Matches a multi-scalar cluster literally.
    Literal { text: String, token: String },
    /// Matches any of the single characters collected for a token.
    Range { pattern: String, token: String },
}

impl LexRule {
    pub fn token(&self) -> &str {
        match self {
            LexRule::Command { token, .. }
            | LexRule::Literal { token, .. }
            | LexRule::Range { token, .. } => token.as_str(),
        }
    }
}

impl fmt::Display for LexRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexRule::Command {
                command,
                yytext,
                token,
            } => write!(
                f,
                "\"{command}\" {{ yytext = \"{yytext}\"; return \"{token}\"; }}"
            ),
            LexRule::Literal { text, token } => write!(f, "\"{text}\" return \"{token}\";"),
            LexRule::Range { pattern, token } => write!(f, "{pattern} return \"{token}\";"),
        }
    }
}

/// The compressed character set of one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRanges {
    pub token: String,
    pub pattern: String,
    pub groups: Vec<SurrogateGroup>,
}

/// Renders rules one per line, each terminated by a newline.
pub fn render(rules: &[LexRule]) -> String {
    rules.iter().map(|rule| format!("{rule}\n")).collect()
}
