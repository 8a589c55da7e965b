//! Karnaugh map layout of a truth table
//!
//! The first `⌊n/2⌋` variables index the rows and the remaining `⌈n/2⌉` index
//! the columns. Both axes are walked in reflected Gray-code order so that
//! neighbouring cells differ in exactly one variable. This is a display
//! model only; no grouping or minimization is done here.

use crate::truth_table::TruthTable;
use std::fmt;

/// Reflected binary Gray code of `i`
pub fn gray_code(i: usize) -> usize {
    i ^ (i >> 1)
}

/// A Karnaugh map grid
///
/// # Examples
///
/// ```
/// use logic_visualizer::{Expr, KarnaughMap, TruthTable};
///
/// let expr = Expr::parse("a * b * c").unwrap();
/// let table = TruthTable::generate(&expr, &['a', 'b', 'c']).unwrap();
/// let kmap = KarnaughMap::from_truth_table(&table);
///
/// assert_eq!(kmap.row_variables(), &['a']);
/// assert_eq!(kmap.column_variables(), &['b', 'c']);
/// assert_eq!(kmap.column_labels(), vec!["00", "01", "11", "10"]);
/// assert_eq!(kmap.cell(1, 2), Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KarnaughMap {
    row_variables: Vec<char>,
    column_variables: Vec<char>,
    cells: Vec<Vec<bool>>,
}

impl KarnaughMap {
    /// Lay out the outputs of `table` on a Gray-coded grid
    pub fn from_truth_table(table: &TruthTable) -> Self {
        let variables = table.variables();
        let row_bits = variables.len() / 2;
        let column_bits = variables.len() - row_bits;
        let (row_variables, column_variables) = variables.split_at(row_bits);

        let cells = (0..1usize << row_bits)
            .map(|r| {
                (0..1usize << column_bits)
                    .map(|c| {
                        let index = (gray_code(r) << column_bits) | gray_code(c);
                        table.output(index).unwrap_or(false)
                    })
                    .collect()
            })
            .collect();

        KarnaughMap {
            row_variables: row_variables.to_vec(),
            column_variables: column_variables.to_vec(),
            cells,
        }
    }

    /// Variables encoded along the rows, most significant first
    pub fn row_variables(&self) -> &[char] {
        &self.row_variables
    }

    /// Variables encoded along the columns, most significant first
    pub fn column_variables(&self) -> &[char] {
        &self.column_variables
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Output at grid position `(row, column)`
    pub fn cell(&self, row: usize, column: usize) -> Option<bool> {
        self.cells.get(row)?.get(column).copied()
    }

    /// The grid, row by row
    pub fn cells(&self) -> &[Vec<bool>] {
        &self.cells
    }

    /// Truth-table row index shown at grid position `(row, column)`
    pub fn minterm(&self, row: usize, column: usize) -> usize {
        (gray_code(row) << self.column_variables.len()) | gray_code(column)
    }

    /// Bit-string labels of the rows in grid order
    pub fn row_labels(&self) -> Vec<String> {
        axis_labels(self.row_variables.len())
    }

    /// Bit-string labels of the columns in grid order
    pub fn column_labels(&self) -> Vec<String> {
        axis_labels(self.column_variables.len())
    }

    /// Corner label naming both axes, such as `ab\cd`
    pub fn axis_title(&self) -> String {
        let rows: String = self.row_variables.iter().collect();
        let columns: String = self.column_variables.iter().collect();
        format!("{}\\{}", rows, columns)
    }
}

fn axis_labels(bits: usize) -> Vec<String> {
    (0..1usize << bits)
        .map(|i| {
            if bits == 0 {
                String::new()
            } else {
                format!("{:0width$b}", gray_code(i), width = bits)
            }
        })
        .collect()
}

/// Plain-text grid with axis labels
impl fmt::Display for KarnaughMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row_labels = self.row_labels();
        let title = self.axis_title();
        let label_width = row_labels
            .iter()
            .map(String::len)
            .chain(std::iter::once(title.len()))
            .max()
            .unwrap_or(0);

        write!(f, "{:<width$}", title, width = label_width)?;
        for label in self.column_labels() {
            write!(f, " {}", label)?;
        }
        writeln!(f)?;

        let column_width = self.column_variables.len().max(1);
        for (label, row) in row_labels.iter().zip(&self.cells) {
            write!(f, "{:<width$}", label, width = label_width)?;
            for &cell in row {
                write!(f, " {:<width$}", u8::from(cell), width = column_width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
