//! Evaluation of boolean expressions

use super::error::EvalError;
use super::Expr;
use std::collections::HashMap;

/// A mapping from variable names to values
pub type Assignment = HashMap<char, bool>;

impl Expr {
    /// Evaluate the expression with a given variable assignment
    ///
    /// Both operands of AND and OR are always evaluated. A variable missing
    /// from `assignment` is an error rather than a default value.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_visualizer::{Assignment, EvalError, Expr};
    ///
    /// let expr = Expr::parse("a | b'").unwrap();
    ///
    /// let mut assignment = Assignment::new();
    /// assignment.insert('a', false);
    /// assignment.insert('b', true);
    /// assert_eq!(expr.evaluate(&assignment), Ok(false));
    ///
    /// assignment.remove(&'b');
    /// assert_eq!(expr.evaluate(&assignment), Err(EvalError::UnknownVariable('b')));
    /// ```
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        match self {
            Expr::Var(c) => assignment
                .get(c)
                .copied()
                .ok_or(EvalError::UnknownVariable(*c)),
            Expr::Not(inner) => Ok(!inner.evaluate(assignment)?),
            Expr::And(left, right) => {
                let l = left.evaluate(assignment)?;
                let r = right.evaluate(assignment)?;
                Ok(l && r)
            }
            Expr::Or(left, right) => {
                let l = left.evaluate(assignment)?;
                let r = right.evaluate(assignment)?;
                Ok(l || r)
            }
        }
    }

    /// Check whether two expressions agree on every assignment of their variables
    ///
    /// Compares exhaustively over the union of both variable sets, so it is
    /// exponential in the number of variables.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_visualizer::Expr;
    ///
    /// let lhs = Expr::parse("a | b * c").unwrap();
    /// let rhs = Expr::parse("a | (b * c)").unwrap();
    /// assert!(lhs.equivalent_to(&rhs));
    /// ```
    pub fn equivalent_to(&self, other: &Expr) -> bool {
        let mut vars = self.collect_variables();
        vars.extend(other.collect_variables());
        let vars: Vec<char> = vars.into_iter().collect();
        let n = vars.len();

        (0u64..1 << n).all(|i| {
            let assignment: Assignment = vars
                .iter()
                .enumerate()
                .map(|(j, &v)| (v, (i >> (n - 1 - j)) & 1 == 1))
                .collect();
            self.evaluate(&assignment) == other.evaluate(&assignment)
        })
    }
}
