//! Truth tables by exhaustive enumeration
//!
//! A [`TruthTable`] has one row per integer `i` in `0..2^n` for `n` variables.
//! The variable at index `j` of the ordered variable list receives bit
//! `(i >> (n - 1 - j)) & 1`, so the first variable is the most significant
//! bit.

use crate::expression::{Assignment, EvalError, Expr};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// One row of a truth table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    index: usize,
    inputs: Vec<bool>,
    output: bool,
}

impl Row {
    /// The row number, which is also the input bits read as an integer
    pub fn index(&self) -> usize {
        self.index
    }

    /// Input values, in the same order as [`TruthTable::variables`]
    pub fn inputs(&self) -> &[bool] {
        &self.inputs
    }

    /// The evaluated output
    pub fn output(&self) -> bool {
        self.output
    }
}

/// Complete truth table of an expression
///
/// # Examples
///
/// ```
/// use logic_visualizer::{Expr, TruthTable};
///
/// let expr = Expr::parse("a * b").unwrap();
/// let table = TruthTable::generate(&expr, &['a', 'b']).unwrap();
///
/// assert_eq!(table.len(), 4);
/// assert_eq!(table.minterms(), vec![3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<char>,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Enumerate every assignment of `variables` and evaluate `expr` on each
    ///
    /// `variables` fixes the column order. It must cover every variable in
    /// the tree, otherwise evaluation fails with [`EvalError::UnknownVariable`].
    /// A repeated variable fails with [`EvalError::DuplicateVariable`], and a
    /// list as wide as `usize` with [`EvalError::TableTooLarge`].
    ///
    /// Memory grows as `2^n`; [`Analysis::run`](crate::Analysis::run) keeps
    /// `n` under [`EngineConfig::max_variables`](crate::EngineConfig).
    pub fn generate(expr: &Expr, variables: &[char]) -> Result<Self, EvalError> {
        let n = variables.len();
        if n >= usize::BITS as usize {
            return Err(EvalError::TableTooLarge { variables: n });
        }
        let mut seen = HashSet::with_capacity(n);
        if let Some(&repeated) = variables.iter().find(|&&v| !seen.insert(v)) {
            return Err(EvalError::DuplicateVariable(repeated));
        }

        let row_count = 1usize << n;
        let mut rows = Vec::with_capacity(row_count);
        let mut assignment = Assignment::with_capacity(n);

        for i in 0..row_count {
            let inputs: Vec<bool> = (0..n).map(|j| (i >> (n - 1 - j)) & 1 == 1).collect();
            for (&var, &value) in variables.iter().zip(&inputs) {
                assignment.insert(var, value);
            }
            let output = expr.evaluate(&assignment)?;
            rows.push(Row {
                index: i,
                inputs,
                output,
            });
        }

        debug!(variables = n, rows = rows.len(), "generated truth table");
        Ok(TruthTable {
            variables: variables.to_vec(),
            rows,
        })
    }

    /// Column variables in bit order (most significant first)
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// All rows in index order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows, always `2^n`
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false: even zero variables give one row
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Output of row `index`
    pub fn output(&self, index: usize) -> Option<bool> {
        self.rows.get(index).map(Row::output)
    }

    /// Value of `variable` in row `index`
    pub fn value(&self, index: usize, variable: char) -> Option<bool> {
        let column = self.variables.iter().position(|&v| v == variable)?;
        self.rows.get(index).map(|row| row.inputs[column])
    }

    /// Assignment that produced row `index`
    pub fn assignment(&self, index: usize) -> Option<Assignment> {
        let row = self.rows.get(index)?;
        Some(
            self.variables
                .iter()
                .copied()
                .zip(row.inputs.iter().copied())
                .collect(),
        )
    }

    /// Indices of rows whose output is 1
    pub fn minterms(&self) -> Vec<usize> {
        self.rows
            .iter()
            .filter(|row| row.output)
            .map(Row::index)
            .collect()
    }
}

/// Plain-text table with a `|` between inputs and output
///
/// ```text
/// a b | out
/// 0 0 | 0
/// ```
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for var in &self.variables {
            write!(f, "{} ", var)?;
        }
        writeln!(f, "| out")?;
        for row in &self.rows {
            for &bit in &row.inputs {
                write!(f, "{} ", u8::from(bit))?;
            }
            writeln!(f, "| {}", u8::from(row.output))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(input: &str, vars: &[char]) -> TruthTable {
        TruthTable::generate(&Expr::parse(input).unwrap(), vars).unwrap()
    }

    fn outputs(table: &TruthTable) -> Vec<bool> {
        table.rows().iter().map(Row::output).collect()
    }

    #[test]
    fn test_first_variable_is_most_significant() {
        let t = table("a", &['a', 'b']);
        assert_eq!(outputs(&t), vec![false, false, true, true]);
        assert_eq!(t.rows()[2].inputs(), &[true, false]);
    }

    #[test]
    fn test_and_table() {
        let t = table("a * b", &['a', 'b']);
        assert_eq!(outputs(&t), vec![false, false, false, true]);
        assert_eq!(t.value(3, 'a'), Some(true));
        assert_eq!(t.value(3, 'b'), Some(true));
    }

    #[test]
    fn test_single_variable_table() {
        let t = TruthTable::generate(&Expr::var('a'), &['a']).unwrap();
        assert_eq!(t.len(), 2);
        assert!(!t.is_empty());
    }

    #[test]
    fn test_missing_variable_fails() {
        let err = TruthTable::generate(&Expr::parse("a * b").unwrap(), &['a']).unwrap_err();
        assert_eq!(err, EvalError::UnknownVariable('b'));
    }

    #[test]
    fn test_repeated_variable_fails() {
        let err = TruthTable::generate(&Expr::parse("a * b").unwrap(), &['a', 'b', 'a']).unwrap_err();
        assert_eq!(err, EvalError::DuplicateVariable('a'));
    }

    #[test]
    fn test_too_many_columns_fails() {
        let vars: Vec<char> = ('a'..='z').chain('0'..='9').cycle().take(64).collect();
        let err = TruthTable::generate(&Expr::var('a'), &vars).unwrap_err();
        assert_eq!(err, EvalError::TableTooLarge { variables: 64 });
    }

    #[test]
    fn test_assignment_and_minterms() {
        let t = table("a | b", &['a', 'b']);
        assert_eq!(t.minterms(), vec![1, 2, 3]);
        let assignment = t.assignment(1).unwrap();
        assert_eq!(assignment.get(&'a'), Some(&false));
        assert_eq!(assignment.get(&'b'), Some(&true));
        assert_eq!(t.assignment(4), None);
    }

    #[test]
    fn test_display() {
        let t = table("a'", &['a']);
        assert_eq!(t.to_string(), "a | out\n0 | 1\n1 | 0\n");
    }
}
