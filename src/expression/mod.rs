//! Boolean expression AST, parsing and evaluation
//!
//! This module is the front half of the engine: it turns a raw string into an
//! [`Expr`] tree and evaluates that tree against variable assignments.
//!
//! # Pipeline
//!
//! 1. [`normalize`] maps every accepted surface syntax onto the canonical
//!    alphabet (`*`, `|`, `'`, parentheses, single-character variables)
//! 2. [`tokenize`] turns the normalized string into [`Token`]s
//! 3. [`Expr::parse`] runs the recursive-descent parser over the tokens
//! 4. [`Expr::evaluate`] computes the value for one [`Assignment`]
//!
//! # Quick Start
//!
//! ## Parsing from Strings
//!
//! ```
//! use logic_visualizer::Expr;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let expr = Expr::parse("A·B + !C")?;
//! println!("{}", expr); // a * b + c'
//! # Ok(())
//! # }
//! ```
//!
//! ## Using the `expr!` Macro
//!
//! ```
//! use logic_visualizer::{expr, Expr};
//!
//! let xor = expr!(a * !b + !a * b);
//! assert_eq!(xor, Expr::parse("a*b' + a'*b").unwrap());
//! ```
//!
//! ## Evaluating
//!
//! ```
//! use logic_visualizer::{Assignment, Expr};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let expr = Expr::parse("a * b")?;
//! let assignment: Assignment = [('a', true), ('b', true)].into_iter().collect();
//! assert!(expr.evaluate(&assignment)?);
//! # Ok(())
//! # }
//! ```

mod display;
pub mod error;
mod eval;
mod lexer;
mod normalize;
mod operators;
pub(crate) mod parser;

pub use error::{EvalError, LexError, ParseError, SyntaxError};
pub use eval::Assignment;
pub use lexer::{tokenize, SpannedToken, Token};
pub use normalize::normalize;
pub use parser::MAX_NESTING;

use std::collections::BTreeSet;

/// A boolean expression tree
///
/// Every non-leaf node exclusively owns its children, so a tree is acyclic
/// and nothing is shared between subtrees.
///
/// # Examples
///
/// ## Method-based API
/// ```
/// use logic_visualizer::Expr;
///
/// let a = Expr::var('a');
/// let b = Expr::var('b');
/// let expr = a.clone().and(b.clone()).or(a.not().and(b.not()));
/// assert_eq!(expr.to_string(), "a * b + a' * b'");
/// ```
///
/// ## Using operator overloading
/// ```
/// use logic_visualizer::Expr;
///
/// let a = Expr::var('a');
/// let b = Expr::var('b');
/// let expr = a * !b;
/// assert_eq!(expr.to_string(), "a * b'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A single-character variable
    Var(char),
    /// Logical NOT
    Not(Box<Expr>),
    /// Logical AND
    And(Box<Expr>, Box<Expr>),
    /// Logical OR
    Or(Box<Expr>, Box<Expr>),
}

/// Node type for expression tree folding
///
/// Carries the node kind and the results already computed for its children.
/// Used with [`Expr::fold`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode<T> {
    /// A variable leaf
    Var(char),
    /// NOT with the result of its operand
    Not(T),
    /// AND with results from left and right subtrees
    And(T, T),
    /// OR with results from left and right subtrees
    Or(T, T),
}

impl Expr {
    /// Create a variable expression
    ///
    /// Uppercase letters are folded to lowercase, matching [`normalize`].
    pub fn var(name: char) -> Self {
        Expr::Var(name.to_ascii_lowercase())
    }

    /// Logical NOT of this expression
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Expr::Not(Box::new(self))
    }

    /// Logical AND of this expression and `rhs`
    pub fn and(self, rhs: Expr) -> Self {
        Expr::And(Box::new(self), Box::new(rhs))
    }

    /// Logical OR of this expression and `rhs`
    pub fn or(self, rhs: Expr) -> Self {
        Expr::Or(Box::new(self), Box::new(rhs))
    }

    /// Fold the expression tree depth-first from leaves to root
    ///
    /// # Examples
    ///
    /// Count the operators in an expression:
    ///
    /// ```
    /// use logic_visualizer::{Expr, ExprNode};
    ///
    /// let expr = Expr::parse("a * (b + c')").unwrap();
    /// let ops = expr.fold(&|node| match node {
    ///     ExprNode::Var(_) => 0,
    ///     ExprNode::Not(inner) => inner + 1,
    ///     ExprNode::And(l, r) | ExprNode::Or(l, r) => l + r + 1,
    /// });
    /// assert_eq!(ops, 3);
    /// ```
    pub fn fold<T, F>(&self, f: &F) -> T
    where
        F: Fn(ExprNode<T>) -> T,
    {
        match self {
            Expr::Var(c) => f(ExprNode::Var(*c)),
            Expr::Not(inner) => {
                let inner_result = inner.fold(f);
                f(ExprNode::Not(inner_result))
            }
            Expr::And(left, right) => {
                let left_result = left.fold(f);
                let right_result = right.fold(f);
                f(ExprNode::And(left_result, right_result))
            }
            Expr::Or(left, right) => {
                let left_result = left.fold(f);
                let right_result = right.fold(f);
                f(ExprNode::Or(left_result, right_result))
            }
        }
    }

    /// Collect the distinct variables referenced by the tree, sorted
    pub fn collect_variables(&self) -> BTreeSet<char> {
        self.fold(&|node| match node {
            ExprNode::Var(c) => BTreeSet::from([c]),
            ExprNode::Not(inner) => inner,
            ExprNode::And(mut l, mut r) | ExprNode::Or(mut l, mut r) => {
                l.append(&mut r);
                l
            }
        })
    }

    /// Number of nodes in the tree
    pub fn node_count(&self) -> usize {
        self.fold(&|node| match node {
            ExprNode::Var(_) => 1,
            ExprNode::Not(inner) => inner + 1,
            ExprNode::And(l, r) | ExprNode::Or(l, r) => l + r + 1,
        })
    }

    /// Whether any NOT in the tree is applied to an AND or OR
    ///
    /// SOP extraction only flips literals under a NOT, so its terms do not
    /// follow De Morgan's laws for such expressions.
    pub fn negates_compound(&self) -> bool {
        match self {
            Expr::Var(_) => false,
            Expr::Not(inner) => {
                matches!(inner.as_ref(), Expr::And(..) | Expr::Or(..)) || inner.negates_compound()
            }
            Expr::And(l, r) | Expr::Or(l, r) => l.negates_compound() || r.negates_compound(),
        }
    }
}

/// Scan a normalized expression string for its variable set
///
/// Returns the distinct variable characters in ascending order. Works on the
/// string itself, so it agrees with the lexer rather than with any tree.
///
/// # Examples
///
/// ```
/// use logic_visualizer::expression::scan_variables;
///
/// assert_eq!(scan_variables("c*(b|a')*c"), vec!['a', 'b', 'c']);
/// ```
pub fn scan_variables(normalized: &str) -> Vec<char> {
    normalized
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
