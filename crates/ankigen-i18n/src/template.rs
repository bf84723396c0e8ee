//! Template parsing and variable substitution.
//!
//! A template source mixes literal text with `{name}` placeholder spans.
//! A span whose body is wrapped in single quotes, such as `{'{'}`, emits
//! the quoted text verbatim; the built-in prompt templates use this to
//! embed literal braces that must not be scanned as placeholders.
//!
//! Sources are parsed exactly once, when the catalog is built. Rendering
//! walks the cached token sequence and never re-scans source text.

use crate::I18nError;

/// One parsed span of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text, emitted verbatim.
    Text(String),
    /// A named substitution point, resolved against caller bindings.
    Placeholder(String),
}

/// Syntax errors raised while parsing a template source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// A `{` span was opened but never closed.
    #[error("unclosed placeholder span")]
    UnclosedPlaceholder,

    /// A `{'...'}` literal was missing its closing quote or brace.
    #[error("unterminated quoted literal")]
    UnterminatedLiteral,

    /// A `{}` span with no variable name.
    #[error("empty placeholder name")]
    EmptyName,

    /// A placeholder name contained a character it must not.
    #[error("invalid character '{0}' in placeholder name")]
    InvalidName(char),
}

/// A parsed, render-ready template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    tokens: Vec<Token>,
}

impl Template {
    /// Parse a template source into a token sequence.
    ///
    /// Adjacent literal runs (including quoted-literal escapes) are merged
    /// into a single [`Token::Text`], so the escape leaves no seam for the
    /// placeholder scanner to trip on.
    pub fn parse(source: &str) -> Result<Self, SyntaxError> {
        let mut tokens = Vec::new();
        let mut text = String::new();
        let mut chars = source.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch != '{' {
                text.push(ch);
                continue;
            }

            if chars.peek() == Some(&'\'') {
                // Quoted literal: {'x'} emits x verbatim.
                chars.next();
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => text.push(c),
                        None => return Err(SyntaxError::UnterminatedLiteral),
                    }
                }
                match chars.next() {
                    Some('}') => {}
                    _ => return Err(SyntaxError::UnterminatedLiteral),
                }
            } else {
                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    match c {
                        '}' => {
                            closed = true;
                            break;
                        }
                        '{' | '\'' => return Err(SyntaxError::InvalidName(c)),
                        _ => name.push(c),
                    }
                }
                if !closed {
                    return Err(SyntaxError::UnclosedPlaceholder);
                }
                if name.is_empty() {
                    return Err(SyntaxError::EmptyName);
                }
                if !text.is_empty() {
                    tokens.push(Token::Text(std::mem::take(&mut text)));
                }
                tokens.push(Token::Placeholder(name));
            }
        }

        if !text.is_empty() {
            tokens.push(Token::Text(text));
        }

        Ok(Self { tokens })
    }

    /// The parsed token sequence.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Names of all placeholders, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(|t| match t {
            Token::Placeholder(name) => Some(name.as_str()),
            Token::Text(_) => None,
        })
    }

    /// Substitute `vars` into the template.
    ///
    /// Bound values are treated as opaque text; they are never re-scanned
    /// for placeholders. A placeholder with no matching binding fails with
    /// [`I18nError::UnboundVariable`] and no partial output is returned.
    /// `key` is carried only for error reporting.
    pub fn render(&self, key: &str, vars: &[(&str, &str)]) -> Result<String, I18nError> {
        let mut out = String::with_capacity(self.capacity_hint(vars));
        for token in &self.tokens {
            match token {
                Token::Text(t) => out.push_str(t),
                Token::Placeholder(name) => {
                    match vars.iter().find(|&&(n, _)| n == name.as_str()) {
                        Some(&(_, value)) => out.push_str(value),
                        None => {
                            return Err(I18nError::UnboundVariable {
                                name: name.clone(),
                                key: key.to_string(),
                            });
                        }
                    }
                }
            }
        }
        Ok(out)
    }

    fn capacity_hint(&self, vars: &[(&str, &str)]) -> usize {
        self.tokens
            .iter()
            .map(|t| match t {
                Token::Text(s) => s.len(),
                Token::Placeholder(name) => vars
                    .iter()
                    .find(|&&(n, _)| n == name.as_str())
                    .map_or(0, |&(_, v)| v.len()),
            })
            .sum()
    }
}
