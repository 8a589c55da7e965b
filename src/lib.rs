//! # Logic Visualizer
//!
//! This crate parses boolean algebra expressions written in flexible notation
//! and derives the artifacts a logic visualizer displays: a truth table, a
//! Karnaugh map, a logic-gate netlist and CMOS transistor networks.
//!
//! ## Overview
//!
//! The engine is a straight pipeline of pure transforms:
//!
//! - **Normalize** the surface syntax (`·`, `+`, `!`, `¯`, case, whitespace)
//! - **Tokenize** into single-character variables and `* | ' ( )`
//! - **Parse** with recursive descent (NOT > AND > OR) into an [`Expr`] tree
//! - **Enumerate** every assignment into a [`TruthTable`]
//! - **Extract** a structural sum of products ([`Sop`]) for CMOS topology
//!
//! Nothing is minimized: every view shows the expression as written.
//!
//! ## Quick Start
//!
//! ```
//! use logic_visualizer::{Analysis, EngineConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let analysis = Analysis::run("A·B + !C", &EngineConfig::default())?;
//!
//! println!("{}", analysis.truth_table());
//! println!("{}", analysis.kmap());
//! println!("SOP: {}", analysis.sop());       // a * b + c'
//! println!("{}", analysis.cmos());
//! # Ok(())
//! # }
//! ```
//!
//! ## Building Expressions
//!
//! Parse from strings, build with methods and operators, or use the `expr!`
//! macro:
//!
//! ```
//! use logic_visualizer::{expr, Expr};
//!
//! let parsed = Expr::parse("(a + b) * c'").unwrap();
//! let built = (Expr::var('a') + Expr::var('b')) * !Expr::var('c');
//! let from_macro = expr!((a + b) * !c);
//!
//! assert_eq!(parsed, built);
//! assert_eq!(parsed, from_macro);
//! ```
//!
//! ## Errors
//!
//! Malformed input never produces a partial result:
//!
//! ```
//! use logic_visualizer::{Analysis, AnalysisError, EngineConfig};
//!
//! let config = EngineConfig::default();
//! assert!(matches!(Analysis::run("a*", &config), Err(AnalysisError::Syntax(_))));
//! assert!(matches!(Analysis::run("a#b", &config), Err(AnalysisError::Lex(_))));
//! ```
//!
//! ## Exports
//!
//! ```
//! use logic_visualizer::{Analysis, EngineConfig, TableWriter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let analysis = Analysis::run("a | b", &EngineConfig::default())?;
//! let csv = analysis.truth_table().to_csv_string()?;
//! assert_eq!(csv.lines().next(), Some("a,b,out"));
//! # Ok(())
//! # }
//! ```

// Public modules
pub mod cmos;
pub mod error;
pub mod export;
pub mod expression;
pub mod gates;
pub mod kmap;
pub mod session;
pub mod sop;
pub mod truth_table;

// Re-export high-level public API
pub use cmos::{CmosCircuit, Network, Transistor, TransistorKind};
pub use error::{AnalysisError, ExportError};
pub use export::TableWriter;
pub use expression::{
    Assignment, EvalError, Expr, ExprNode, LexError, ParseError, SyntaxError, Token,
};
pub use gates::{Circuit, Gate, GateKind, Signal};
pub use kmap::KarnaughMap;
pub use logic_visualizer_macros::expr;
pub use session::{Analysis, Session};
pub use sop::{Literal, Sop, Term};
pub use truth_table::{Row, TruthTable};

/// Configuration for the analysis pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Largest variable count for which a truth table is enumerated
    pub max_variables: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig { max_variables: 16 }
    }
}

impl EngineConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the variable limit
    pub fn with_max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = max_variables;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = EngineConfig::new();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.max_variables, 16);
        assert_eq!(config.with_max_variables(4).max_variables, 4);
    }

    #[test]
    fn test_public_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Expr>();
        assert_send_sync::<Analysis>();
        assert_send_sync::<Session>();
        assert_send_sync::<AnalysisError>();
    }
}
