//! Tokenizer for normalized boolean expressions

use super::error::LexError;
use std::fmt;
use tracing::trace;

/// A lexical token of the canonical expression alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `'`
    Not,
    /// `*`
    And,
    /// `|`
    Or,
    /// A single-character variable (`a`-`z` or `0`-`9`)
    Var(char),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Not => write!(f, "apostrophe"),
            Token::And => write!(f, "'*'"),
            Token::Or => write!(f, "'|'"),
            Token::Var(c) => write!(f, "variable '{}'", c),
        }
    }
}

/// A token together with its zero-based character position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub position: usize,
}

/// Tokenize a normalized expression string
///
/// Whitespace is skipped. Every variable is a single character; adjacent
/// letters become separate [`Token::Var`] tokens with nothing in between.
///
/// # Examples
///
/// ```
/// use logic_visualizer::expression::{tokenize, Token};
///
/// let tokens: Vec<Token> = tokenize("a * b'")
///     .unwrap()
///     .into_iter()
///     .map(|t| t.token)
///     .collect();
/// assert_eq!(tokens, vec![Token::Var('a'), Token::And, Token::Var('b'), Token::Not]);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<SpannedToken>, LexError> {
    let mut tokens = Vec::new();

    for (position, c) in input.chars().enumerate() {
        let token = match c {
            c if c.is_whitespace() => continue,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '\'' => Token::Not,
            '*' => Token::And,
            '|' => Token::Or,
            'a'..='z' | '0'..='9' => Token::Var(c),
            other => {
                return Err(LexError {
                    character: other,
                    position,
                })
            }
        };
        tokens.push(SpannedToken { token, position });
    }

    trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<Token> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn test_all_token_kinds() {
        assert_eq!(
            kinds("(a|'b)*7"),
            vec![
                Token::LParen,
                Token::Var('a'),
                Token::Or,
                Token::Not,
                Token::Var('b'),
                Token::RParen,
                Token::And,
                Token::Var('7'),
            ]
        );
    }

    #[test]
    fn test_positions_skip_whitespace() {
        let tokens = tokenize(" a  *b").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![1, 4, 5]);
    }

    #[test]
    fn test_adjacent_letters_are_separate_vars() {
        assert_eq!(kinds("ab"), vec![Token::Var('a'), Token::Var('b')]);
    }

    #[test]
    fn test_unknown_character() {
        let err = tokenize("a#b").unwrap_err();
        assert_eq!(err.character, '#');
        assert_eq!(err.position, 1);
    }

    #[test]
    fn test_uppercase_is_rejected_before_normalization() {
        let err = tokenize("A").unwrap_err();
        assert_eq!(err.character, 'A');
        assert_eq!(err.position, 0);
    }

    #[test]
    fn test_position_counts_characters_not_bytes() {
        let err = tokenize("a*·&").unwrap_err();
        assert_eq!(err.character, '·');
        assert_eq!(err.position, 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
    }
}
