//! Error types for boolean expression lexing, parsing and evaluation

use super::lexer::Token;
use std::io;
use thiserror::Error;

/// An unrecognised character met while tokenizing
///
/// The position is the zero-based character index in the normalized input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected character '{character}' at position {position}")]
pub struct LexError {
    /// The offending character
    pub character: char,
    /// Zero-based character index in the normalized input
    pub position: usize,
}

/// A grammar violation found by the parser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// Input ended where a variable or `(` was expected
    #[error("unexpected end of input, expected a variable or '('")]
    UnexpectedEnd,

    /// A `(` with no matching `)`
    #[error("unmatched '(' at position {open}")]
    UnmatchedParen {
        /// Position of the opening parenthesis
        open: usize,
    },

    /// A group whose contents are followed by something other than `)`
    #[error("expected ')' to close '(' at position {open}, found {token} at position {position}")]
    UnclosedParen {
        /// Position of the opening parenthesis
        open: usize,
        /// The token found instead of `)`
        token: Token,
        /// Position of that token
        position: usize,
    },

    /// Groups, negations or operator chains nested past [`MAX_NESTING`](super::MAX_NESTING)
    #[error("expression nested deeper than {limit} levels at position {position}")]
    NestingTooDeep {
        /// Position of the token that went past the limit
        position: usize,
        /// The nesting limit
        limit: usize,
    },

    /// A token that cannot start a primary expression
    #[error("unexpected {token} at position {position}, expected a variable or '('")]
    UnexpectedToken {
        /// The token found
        token: Token,
        /// Position of the token
        position: usize,
    },

    /// Tokens left over after a complete expression
    #[error("unexpected {token} at position {position} after complete expression")]
    TrailingInput {
        /// First unconsumed token
        token: Token,
        /// Position of the token
        position: usize,
    },
}

impl SyntaxError {
    /// Position in the normalized input the error points at, if any
    pub fn position(&self) -> Option<usize> {
        match self {
            SyntaxError::UnexpectedEnd => None,
            SyntaxError::UnmatchedParen { open } => Some(*open),
            SyntaxError::UnclosedParen { position, .. }
            | SyntaxError::NestingTooDeep { position, .. }
            | SyntaxError::UnexpectedToken { position, .. }
            | SyntaxError::TrailingInput { position, .. } => Some(*position),
        }
    }
}

/// Errors returned by [`Expr::parse`](super::Expr::parse)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Tokenization failed
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    /// Parsing failed
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

/// Errors raised while evaluating an expression against an assignment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The expression references a variable missing from the assignment
    #[error("unknown variable '{0}'")]
    UnknownVariable(char),

    /// A variable listed twice in a truth-table column order
    #[error("variable '{0}' listed more than once")]
    DuplicateVariable(char),

    /// More variables than a row index has bits
    #[error("cannot enumerate 2^{variables} rows")]
    TableTooLarge {
        /// Number of variables requested
        variables: usize,
    },
}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

impl From<EvalError> for io::Error {
    fn from(err: EvalError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
