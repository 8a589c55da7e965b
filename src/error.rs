//! Error types for the analysis pipeline and exports
//!
//! Expression-level errors ([`LexError`], [`SyntaxError`], [`EvalError`]) live
//! in [`crate::expression::error`]; this module wraps them for the full
//! pipeline run by [`Analysis`](crate::Analysis).

use crate::expression::{EvalError, LexError, ParseError, SyntaxError};
use std::io;
use thiserror::Error;

/// Errors from running the full analysis on an input string
///
/// Every variant is terminal: no partial analysis is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Unrecognised character during tokenization
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    /// Grammar violation during parsing
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    /// Evaluation referenced a variable outside the scanned variable set
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),

    /// More variables than the configured truth-table limit
    #[error("expression has {count} variables, truth tables are limited to {limit}")]
    TooManyVariables {
        /// Variables found in the expression
        count: usize,
        /// Configured maximum
        limit: usize,
    },
}

impl From<ParseError> for AnalysisError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Lex(e) => AnalysisError::Lex(e),
            ParseError::Syntax(e) => AnalysisError::Syntax(e),
        }
    }
}

impl From<AnalysisError> for io::Error {
    fn from(err: AnalysisError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors from writing CSV or HTML exports
#[derive(Debug, Error)]
pub enum ExportError {
    /// The underlying writer failed
    #[error("failed to write export: {0}")]
    Io(#[from] io::Error),
}

impl From<ExportError> for io::Error {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Io(e) => e,
        }
    }
}
