//! Sum-of-products extraction for CMOS topology
//!
//! This module provides the [`Sop`] type, a structural sum-of-products form of
//! an [`Expr`]. It is derived directly from the tree shape and is never
//! minimized: redundant or repeated terms and literals are kept, because the
//! CMOS networks in [`crate::cmos`] mirror the expression as written.
//!
//! # Extraction rules
//!
//! - `Var(v)` gives one term with the literal `v`
//! - `Not(c)` flips the `inverted` flag of every literal of `c`'s terms
//! - `And(l, r)` gives the cartesian product of `l`'s and `r`'s terms
//! - `Or(l, r)` gives `l`'s terms followed by `r`'s terms
//!
//! The NOT rule is exact only when the negated subtree reduces to literals.
//! Under a negated AND or OR it does not apply De Morgan's laws, so the
//! result differs from the expression's function; use
//! [`Expr::negates_compound`] to detect such input.
//!
//! [`Expr::negates_compound`]: crate::Expr::negates_compound

use crate::expression::Expr;
use std::fmt;

/// A variable reference with an inversion flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    pub variable: char,
    pub inverted: bool,
}

impl Literal {
    /// A non-inverted literal
    pub fn positive(variable: char) -> Self {
        Literal {
            variable,
            inverted: false,
        }
    }

    /// An inverted literal
    pub fn negative(variable: char) -> Self {
        Literal {
            variable,
            inverted: true,
        }
    }

    /// The same variable with the opposite polarity
    pub fn flipped(self) -> Self {
        Literal {
            variable: self.variable,
            inverted: !self.inverted,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inverted {
            write!(f, "{}'", self.variable)
        } else {
            write!(f, "{}", self.variable)
        }
    }
}

/// A product term: literals joined by AND, in order of appearance
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Term {
    literals: Vec<Literal>,
}

impl Term {
    /// Build a term from literals
    pub fn new(literals: Vec<Literal>) -> Self {
        Term { literals }
    }

    /// The term's literals
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Number of literals, counting repeats
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// True for a term with no literals
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Literal-list concatenation
    fn concat(&self, other: &Term) -> Term {
        let mut literals = Vec::with_capacity(self.len() + other.len());
        literals.extend_from_slice(&self.literals);
        literals.extend_from_slice(&other.literals);
        Term { literals }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, literal) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " * ")?;
            }
            write!(f, "{}", literal)?;
        }
        Ok(())
    }
}

/// A structural sum of products
///
/// # Examples
///
/// ```
/// use logic_visualizer::{Expr, Literal, Sop};
///
/// let expr = Expr::parse("(a + b) * c").unwrap();
/// let sop = Sop::from_expr(&expr);
///
/// assert_eq!(sop.len(), 2);
/// assert_eq!(sop.terms()[0].literals(), &[Literal::positive('a'), Literal::positive('c')]);
/// assert_eq!(sop.terms()[1].literals(), &[Literal::positive('b'), Literal::positive('c')]);
/// assert_eq!(sop.to_string(), "a * c + b * c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sop {
    terms: Vec<Term>,
}

impl Sop {
    /// Extract the sum of products of an expression
    pub fn from_expr(expr: &Expr) -> Self {
        Sop {
            terms: extract(expr),
        }
    }

    /// Build directly from terms
    pub fn from_terms(terms: Vec<Term>) -> Self {
        Sop { terms }
    }

    /// Product terms in extraction order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of product terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when there are no terms (never the case for an extracted SOP)
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over all literals of all terms
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.terms.iter().flat_map(|term| term.literals.iter())
    }
}

impl fmt::Display for Sop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}

impl From<&Expr> for Sop {
    fn from(expr: &Expr) -> Self {
        Sop::from_expr(expr)
    }
}

fn extract(expr: &Expr) -> Vec<Term> {
    match expr {
        Expr::Var(v) => vec![Term::new(vec![Literal::positive(*v)])],
        Expr::Not(inner) => extract(inner)
            .into_iter()
            .map(|term| Term {
                literals: term.literals.into_iter().map(Literal::flipped).collect(),
            })
            .collect(),
        Expr::And(left, right) => {
            let left_terms = extract(left);
            let right_terms = extract(right);
            let mut terms = Vec::with_capacity(left_terms.len() * right_terms.len());
            for l in &left_terms {
                for r in &right_terms {
                    terms.push(l.concat(r));
                }
            }
            terms
        }
        Expr::Or(left, right) => {
            let mut terms = extract(left);
            terms.extend(extract(right));
            terms
        }
    }
}
