//! Full-pipeline analysis of one expression string, and the session holding it
//!
//! [`Analysis::run`] is the stateless entry point: normalize, tokenize, parse,
//! scan variables, enumerate the truth table and extract the SOP. A
//! [`Session`] owns the most recent successful analysis for callers that
//! keep UI state between submissions.

use crate::cmos::CmosCircuit;
use crate::error::AnalysisError;
use crate::expression::parser::parse_tokens;
use crate::expression::{normalize, scan_variables, tokenize, Expr};
use crate::gates::Circuit;
use crate::kmap::KarnaughMap;
use crate::sop::Sop;
use crate::truth_table::TruthTable;
use crate::EngineConfig;
use tracing::{debug, warn};

/// Everything derived from one input string
///
/// The K-map, gate netlist and CMOS views are computed from the stored
/// table, tree and SOP each time they are requested.
///
/// # Examples
///
/// ```
/// use logic_visualizer::{Analysis, EngineConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let analysis = Analysis::run("(A + B) · C", &EngineConfig::default())?;
///
/// assert_eq!(analysis.normalized(), "(a | b) * c");
/// assert_eq!(analysis.variables(), &['a', 'b', 'c']);
/// assert_eq!(analysis.truth_table().len(), 8);
/// assert_eq!(analysis.sop().to_string(), "a * c + b * c");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    input: String,
    normalized: String,
    expr: Expr,
    variables: Vec<char>,
    truth_table: TruthTable,
    sop: Sop,
}

impl Analysis {
    /// Run the whole pipeline on `input`
    ///
    /// Fails without a partial result on the first lex, syntax or evaluation
    /// error, or when the variable count exceeds `config.max_variables`.
    pub fn run(input: &str, config: &EngineConfig) -> Result<Self, AnalysisError> {
        let normalized = normalize(input);
        let tokens = tokenize(&normalized)?;
        let expr = parse_tokens(&tokens)?;
        debug!(input = %normalized, tokens = tokens.len(), nodes = expr.node_count(), "parsed expression");

        let variables = scan_variables(&normalized);
        if variables.len() > config.max_variables {
            return Err(AnalysisError::TooManyVariables {
                count: variables.len(),
                limit: config.max_variables,
            });
        }

        let truth_table = TruthTable::generate(&expr, &variables)?;

        if expr.negates_compound() {
            warn!(
                input = %normalized,
                "SOP extraction flips literals under a negated AND/OR without De Morgan expansion; CMOS topology will not match the truth table"
            );
        }
        let sop = Sop::from_expr(&expr);
        debug!(terms = sop.len(), "extracted sum of products");

        Ok(Analysis {
            input: input.to_string(),
            normalized,
            expr,
            variables,
            truth_table,
            sop,
        })
    }

    /// The string as submitted
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The input after normalization
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// The parsed tree
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Variables in ascending order, as scanned from the normalized input
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// The complete truth table
    pub fn truth_table(&self) -> &TruthTable {
        &self.truth_table
    }

    /// The structural sum of products
    pub fn sop(&self) -> &Sop {
        &self.sop
    }

    /// Whether the SOP is known to differ from the expression's function
    pub fn sop_is_approximate(&self) -> bool {
        self.expr.negates_compound()
    }

    /// Karnaugh map of the truth table
    pub fn kmap(&self) -> KarnaughMap {
        KarnaughMap::from_truth_table(&self.truth_table)
    }

    /// Gate netlist of the tree
    pub fn circuit(&self) -> Circuit {
        Circuit::from_expr(&self.expr)
    }

    /// CMOS networks of the SOP
    pub fn cmos(&self) -> CmosCircuit {
        CmosCircuit::from_sop(&self.sop)
    }

    /// LaTeX rendering of the tree
    pub fn latex(&self) -> String {
        self.expr.to_latex()
    }
}

/// Caller-owned state across expression submissions
///
/// Holds the configuration and the latest successful [`Analysis`]. A failed
/// submission clears the held analysis so a stale result is never shown
/// next to an error.
///
/// # Examples
///
/// ```
/// use logic_visualizer::{EngineConfig, Session};
///
/// let mut session = Session::new(EngineConfig::default());
/// assert!(session.submit("a * b").is_ok());
/// assert_eq!(session.current().unwrap().truth_table().minterms(), vec![3]);
///
/// assert!(session.submit("a *").is_err());
/// assert!(session.current().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: EngineConfig,
    current: Option<Analysis>,
}

impl Session {
    /// Create an empty session
    pub fn new(config: EngineConfig) -> Self {
        Session {
            config,
            current: None,
        }
    }

    /// Analyse `input`, replacing the held analysis
    pub fn submit(&mut self, input: &str) -> Result<&Analysis, AnalysisError> {
        self.current = None;
        let analysis = Analysis::run(input, &self.config)?;
        Ok(&*self.current.insert(analysis))
    }

    /// The latest successful analysis, if the last submission succeeded
    pub fn current(&self) -> Option<&Analysis> {
        self.current.as_ref()
    }

    /// Drop the held analysis
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The session's configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
