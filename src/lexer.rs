//! Lexical analysis: turns a raw expression string into tokens.
//!
//! Operators are matched longest-first so that `//`, `**`, `<=`, `>=`,
//! `==`, `!=`, `&&` and `||` win over their one-character prefixes.

use crate::core::{LexError, Operator};
use std::fmt;

/// A lexical token borrowing its text from the source expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    Number(&'src str),
    Identifier(&'src str),
    Operator(Operator),
    LParen,
    RParen,
}

impl<'src> Token<'src> {
    /// Source text of the token.
    pub fn text(&self) -> &'src str {
        match *self {
            Token::Number(text) | Token::Identifier(text) => text,
            Token::Operator(op) => op.symbol(),
            Token::LParen => "(",
            Token::RParen => ")",
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

pub fn tokenize(expression: &str) -> Result<Vec<Token<'_>>, LexError> {
    let bytes = expression.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];

        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        if let Some(op) = Operator::match_at(expression, i) {
            tokens.push(Token::Operator(op));
            i += op.symbol().len();
            continue;
        }

        match c {
            b'0'..=b'9' => {
                let start = i;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                tokens.push(Token::Number(&expression[start..i]));
            }
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                let start = i;
                while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                    i += 1;
                }
                tokens.push(Token::Identifier(&expression[start..i]));
            }
            b'(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            b')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            _ => {
                let character = expression[i..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::InvalidCharacter { character, position: i });
            }
        }
    }

    log::trace!("lexed {} tokens from {:?}", tokens.len(), expression);
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(expression: &str) -> Vec<String> {
        tokenize(expression)
            .unwrap()
            .iter()
            .map(|t| t.to_string())
            .collect()
    }

    #[test]
    fn test_basic_arithmetic() {
        let tokens = tokenize("3+4*2").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number("3"),
                Token::Operator(Operator::Add),
                Token::Number("4"),
                Token::Operator(Operator::Mul),
                Token::Number("2"),
            ]
        );
    }

    #[test]
    fn test_longest_match_operators() {
        assert_eq!(texts("a//b"), ["a", "//", "b"]);
        assert_eq!(texts("2**3"), ["2", "**", "3"]);
        assert_eq!(texts("x<=y>=z"), ["x", "<=", "y", ">=", "z"]);
        assert_eq!(texts("a==b!=c"), ["a", "==", "b", "!=", "c"]);
        assert_eq!(texts("p&&q||!r"), ["p", "&&", "q", "||", "!", "r"]);
    }

    #[test]
    fn test_identifiers_numbers_and_whitespace() {
        assert_eq!(
            texts("  _tmp1 * (count_2 + 42)\t"),
            ["_tmp1", "*", "(", "count_2", "+", "42", ")"]
        );
        assert_eq!(texts("123abc"), ["123", "abc"]);
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            tokenize("a = b"),
            Err(LexError::InvalidCharacter { character: '=', position: 2 })
        );
        assert_eq!(
            tokenize("a & b"),
            Err(LexError::InvalidCharacter { character: '&', position: 2 })
        );
        assert_eq!(
            tokenize("1.5"),
            Err(LexError::InvalidCharacter { character: '.', position: 1 })
        );
        assert_eq!(
            tokenize("x+é"),
            Err(LexError::InvalidCharacter { character: 'é', position: 2 })
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   ").unwrap().is_empty());
    }
}
