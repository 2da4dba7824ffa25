//! Path template compilation and matching.
//!
//! # Responsibilities
//! - Tokenize a path template (`/projects/:id`, `/files/:path*`, `/v(\d+)`)
//! - Compile the tokens into an anchored regular expression
//! - Test concrete paths and extract parameter values
//!
//! # Design Decisions
//! - Matching is anchored at both ends with one optional trailing delimiter
//! - Matching is case-insensitive
//! - A delimiter (`/` or `.`) directly before a parameter becomes its prefix,
//!   so `/:id?` also matches the bare parent path
//! - A template that does not compile is an error, never a silent non-match

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

const DEFAULT_DELIMITER: char = '/';
const DELIMITERS: &[char] = &['/', '.'];

/// Escaped char | `:name(custom)?` or `(group)` followed by an optional modifier.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\\.)|(?:\:([A-Za-z0-9_]+)(?:\(((?:\\.|[^\\()])+)\))?|\(((?:\\.|[^\\()])+)\))([+*?])?",
    )
    .expect("valid token regex literal")
});

/// Errors raised while compiling a path template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The template expanded into an expression the regex engine rejects.
    #[error("invalid path template `{template}`: {reason}")]
    Invalid { template: String, reason: String },
}

/// Name of a captured parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamName {
    /// `:name` parameters.
    Named(String),
    /// Unnamed `( ... )` groups, numbered from zero.
    Index(usize),
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamName::Named(name) => f.write_str(name),
            ParamName::Index(index) => write!(f, "{index}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ParamToken {
    name: ParamName,
    prefix: String,
    optional: bool,
    repeat: bool,
    partial: bool,
    pattern: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Param(ParamToken),
}

/// A compiled path template.
#[derive(Debug, Clone)]
pub struct PathPattern {
    template: String,
    keys: Vec<ParamName>,
    regex: Regex,
}

impl PathPattern {
    /// Compile a template into a matcher.
    pub fn compile(template: &str) -> Result<Self, PatternError> {
        let tokens = parse(template);
        let keys = tokens
            .iter()
            .filter_map(|token| match token {
                Token::Param(param) => Some(param.name.clone()),
                Token::Literal(_) => None,
            })
            .collect();

        let source = tokens_to_source(&tokens);
        let regex = Regex::new(&source).map_err(|e| PatternError::Invalid {
            template: template.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            template: template.to_string(),
            keys,
            regex,
        })
    }

    /// Returns true if `path` is accepted by this template.
    pub fn test(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Extract parameter values for a matching path.
    ///
    /// Optional parameters that did not participate in the match are omitted.
    pub fn params(&self, path: &str) -> Option<HashMap<String, String>> {
        let captures = self.regex.captures(path)?;
        let params = self
            .keys
            .iter()
            .enumerate()
            .filter_map(|(i, key)| {
                captures
                    .get(i + 1)
                    .map(|value| (key.to_string(), value.as_str().to_string()))
            })
            .collect();
        Some(params)
    }

    /// The original template text.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Parameter names in declaration order.
    pub fn keys(&self) -> &[ParamName] {
        &self.keys
    }
}

impl PartialEq for PathPattern {
    fn eq(&self, other: &Self) -> bool {
        self.template == other.template
    }
}

fn parse(template: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut next_index = 0;
    let mut index = 0;
    let mut path = String::new();
    let mut path_escaped = false;

    for caps in TOKEN.captures_iter(template) {
        let Some(whole) = caps.get(0) else { continue };
        path.push_str(&template[index..whole.start()]);
        index = whole.end();

        if let Some(escaped) = caps.get(1) {
            path.push_str(&escaped.as_str()[1..]);
            path_escaped = true;
            continue;
        }

        let next = template[index..].chars().next();
        let mut prev = None;
        if !path_escaped {
            if let Some(last) = path.chars().last().filter(|c| DELIMITERS.contains(c)) {
                prev = Some(last);
                path.pop();
            }
        }

        if !path.is_empty() {
            tokens.push(Token::Literal(std::mem::take(&mut path)));
            path_escaped = false;
        }

        let modifier = caps.get(5).map(|m| m.as_str());
        let delimiter = prev.unwrap_or(DEFAULT_DELIMITER);
        let pattern = match caps.get(3).or_else(|| caps.get(4)) {
            Some(group) => escape_group(group.as_str()),
            None => format!("[^{}]+?", regex::escape(&delimiter.to_string())),
        };
        let name = match caps.get(2) {
            Some(name) => ParamName::Named(name.as_str().to_string()),
            None => {
                next_index += 1;
                ParamName::Index(next_index - 1)
            }
        };

        tokens.push(Token::Param(ParamToken {
            name,
            prefix: prev.map(String::from).unwrap_or_default(),
            optional: matches!(modifier, Some("?") | Some("*")),
            repeat: matches!(modifier, Some("+") | Some("*")),
            partial: prev.is_some() && next.is_some() && next != prev,
            pattern,
        }));
    }

    if !path.is_empty() || index < template.len() {
        path.push_str(&template[index..]);
        tokens.push(Token::Literal(path));
    }

    tokens
}

fn tokens_to_source(tokens: &[Token]) -> String {
    let mut route = String::from("(?i)^");

    for token in tokens {
        match token {
            Token::Literal(text) => route.push_str(&regex::escape(text)),
            Token::Param(param) => {
                let prefix = regex::escape(&param.prefix);
                let capture = if param.repeat {
                    format!(
                        "(?:{pattern})(?:{prefix}(?:{pattern}))*",
                        pattern = param.pattern
                    )
                } else {
                    param.pattern.clone()
                };

                if param.optional {
                    if param.partial {
                        route.push_str(&format!("{prefix}({capture})?"));
                    } else {
                        route.push_str(&format!("(?:{prefix}({capture}))?"));
                    }
                } else {
                    route.push_str(&format!("{prefix}({capture})"));
                }
            }
        }
    }

    route.push_str(&format!(
        "(?:{})?$",
        regex::escape(&DEFAULT_DELIMITER.to_string())
    ));
    route
}

/// Custom groups may not open captures of their own.
fn escape_group(group: &str) -> String {
    let mut escaped = String::with_capacity(group.len());
    for c in group.chars() {
        if matches!(c, '=' | '!' | ':' | '$' | '/' | '(' | ')') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
