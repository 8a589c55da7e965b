//! CSV and HTML exports of truth tables and Karnaugh maps
//!
//! Both formats go through [`TableWriter`], whose core methods write to any
//! [`Write`] implementation. The string and file variants delegate to them.

use crate::error::ExportError;
use crate::kmap::KarnaughMap;
use crate::truth_table::TruthTable;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Types that can be written as a CSV or HTML table
pub trait TableWriter {
    /// Write comma-separated values, one line per table row
    fn write_csv<W: Write>(&self, writer: &mut W) -> Result<(), ExportError>;

    /// Write an HTML `<table>` element
    fn write_html<W: Write>(&self, writer: &mut W) -> Result<(), ExportError>;

    /// Render as a CSV string
    fn to_csv_string(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Render as an HTML string
    fn to_html_string(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        self.write_html(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Write CSV to a file, replacing it if it exists
    fn to_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_csv(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write HTML to a file, replacing it if it exists
    fn to_html_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_html(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

fn bit(value: bool) -> char {
    if value {
        '1'
    } else {
        '0'
    }
}

/// Escape the characters HTML treats specially in text content
fn escape_html(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            c => c.to_string(),
        })
        .collect()
}

impl TableWriter for TruthTable {
    fn write_csv<W: Write>(&self, writer: &mut W) -> Result<(), ExportError> {
        for var in self.variables() {
            write!(writer, "{},", var)?;
        }
        writeln!(writer, "out")?;
        for row in self.rows() {
            for &value in row.inputs() {
                write!(writer, "{},", bit(value))?;
            }
            writeln!(writer, "{}", bit(row.output()))?;
        }
        Ok(())
    }

    fn write_html<W: Write>(&self, writer: &mut W) -> Result<(), ExportError> {
        writeln!(writer, "<table>")?;
        write!(writer, "<thead><tr>")?;
        for var in self.variables() {
            write!(writer, "<th>{}</th>", var)?;
        }
        writeln!(writer, "<th>out</th></tr></thead>")?;
        writeln!(writer, "<tbody>")?;
        for row in self.rows() {
            write!(writer, "<tr>")?;
            for &value in row.inputs() {
                write!(writer, "<td>{}</td>", bit(value))?;
            }
            writeln!(writer, "<td>{}</td></tr>", bit(row.output()))?;
        }
        writeln!(writer, "</tbody>")?;
        writeln!(writer, "</table>")?;
        Ok(())
    }
}

impl TableWriter for KarnaughMap {
    fn write_csv<W: Write>(&self, writer: &mut W) -> Result<(), ExportError> {
        write!(writer, "{}", self.axis_title())?;
        for label in self.column_labels() {
            write!(writer, ",{}", label)?;
        }
        writeln!(writer)?;
        for (label, row) in self.row_labels().iter().zip(self.cells()) {
            write!(writer, "{}", label)?;
            for &cell in row {
                write!(writer, ",{}", bit(cell))?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }

    fn write_html<W: Write>(&self, writer: &mut W) -> Result<(), ExportError> {
        writeln!(writer, "<table>")?;
        write!(writer, "<thead><tr><th>{}</th>", escape_html(&self.axis_title()))?;
        for label in self.column_labels() {
            write!(writer, "<th>{}</th>", label)?;
        }
        writeln!(writer, "</tr></thead>")?;
        writeln!(writer, "<tbody>")?;
        for (label, row) in self.row_labels().iter().zip(self.cells()) {
            write!(writer, "<tr><th>{}</th>", label)?;
            for &cell in row {
                write!(writer, "<td>{}</td>", bit(cell))?;
            }
            writeln!(writer, "</tr>")?;
        }
        writeln!(writer, "</tbody>")?;
        writeln!(writer, "</table>")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Expr;

    fn table(input: &str, vars: &[char]) -> TruthTable {
        TruthTable::generate(&Expr::parse(input).unwrap(), vars).unwrap()
    }

    #[test]
    fn test_truth_table_csv() {
        let csv = table("a | b", &['a', 'b']).to_csv_string().unwrap();
        assert_eq!(csv, "a,b,out\n0,0,0\n0,1,1\n1,0,1\n1,1,1\n");
    }

    #[test]
    fn test_truth_table_html() {
        let html = table("a'", &['a']).to_html_string().unwrap();
        assert!(html.starts_with("<table>\n<thead><tr><th>a</th><th>out</th></tr></thead>"));
        assert!(html.contains("<tr><td>0</td><td>1</td></tr>"));
        assert!(html.contains("<tr><td>1</td><td>0</td></tr>"));
        assert!(html.trim_end().ends_with("</table>"));
    }

    #[test]
    fn test_kmap_csv() {
        let kmap = KarnaughMap::from_truth_table(&table("a * b", &['a', 'b']));
        let csv = kmap.to_csv_string().unwrap();
        assert_eq!(csv, "a\\b,0,1\n0,0,0\n1,0,1\n");
    }

    #[test]
    fn test_kmap_html() {
        let kmap = KarnaughMap::from_truth_table(&table("a * b * c", &['a', 'b', 'c']));
        let html = kmap.to_html_string().unwrap();
        assert!(html.contains("<th>a\\bc</th><th>00</th><th>01</th><th>11</th><th>10</th>"));
        assert!(html.contains("<tr><th>1</th><td>0</td><td>0</td><td>1</td><td>0</td></tr>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b & \"c\">"), "a&lt;b &amp; &quot;c&quot;&gt;");
    }
}
