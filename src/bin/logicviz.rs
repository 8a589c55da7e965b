//! Logic Visualizer - Command Line Interface
//!
//! Prints the truth table, Karnaugh map, SOP, gate netlist, CMOS networks or
//! LaTeX form of a boolean expression.

use clap::{Parser, ValueEnum};
use logic_visualizer::{Analysis, EngineConfig, TableWriter};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing::{debug, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    /// Truth table
    Table,
    /// Karnaugh map
    Kmap,
    /// Structural sum of products
    Sop,
    /// Logic-gate netlist
    Gates,
    /// CMOS pull-up and pull-down networks
    Cmos,
    /// LaTeX rendering of the expression
    Latex,
    /// Every view
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Aligned plain text
    Text,
    /// Comma-separated values
    Csv,
    /// HTML table
    Html,
}

#[derive(Parser, Debug)]
#[command(name = "logicviz")]
#[command(about = "Boolean expression truth tables, K-maps, gates and CMOS networks", long_about = None)]
#[command(version)]
struct Args {
    /// Boolean expression, e.g. "A·B + !C" or "(a|b)*c'"
    #[arg(value_name = "EXPRESSION")]
    expression: String,

    /// Views to print
    #[arg(short = 's', long = "show", value_enum, value_delimiter = ',', default_value = "table")]
    show: Vec<View>,

    /// Format of the truth table and Karnaugh map
    #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
    format: Format,

    /// Largest variable count to enumerate
    #[arg(long = "max-variables", default_value_t = EngineConfig::default().max_variables)]
    max_variables: usize,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn table_view<T: TableWriter + std::fmt::Display>(
    value: &T,
    format: Format,
) -> Result<String, Box<dyn std::error::Error>> {
    Ok(match format {
        Format::Text => value.to_string(),
        Format::Csv => value.to_csv_string()?,
        Format::Html => value.to_html_string()?,
    })
}

fn render(analysis: &Analysis, args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let views: Vec<View> = if args.show.contains(&View::All) {
        vec![
            View::Table,
            View::Kmap,
            View::Sop,
            View::Gates,
            View::Cmos,
            View::Latex,
        ]
    } else {
        args.show.clone()
    };
    let titled = views.len() > 1;

    let mut out = String::new();
    for view in views {
        if titled {
            writeln!(out, "== {:?} ==", view)?;
        }
        match view {
            View::Table => out.push_str(&table_view(analysis.truth_table(), args.format)?),
            View::Kmap => out.push_str(&table_view(&analysis.kmap(), args.format)?),
            View::Sop => writeln!(out, "{}", analysis.sop())?,
            View::Gates => write!(out, "{}", analysis.circuit())?,
            View::Cmos => write!(out, "{}", analysis.cmos())?,
            View::Latex => writeln!(out, "{}", analysis.latex())?,
            View::All => unreachable!("expanded above"),
        }
        if titled {
            writeln!(out)?;
        }
    }
    Ok(out)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = EngineConfig::new().with_max_variables(args.max_variables);

    let analysis = match Analysis::run(&args.expression, &config) {
        Ok(analysis) => analysis,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    debug!(variables = ?analysis.variables(), "analysis complete");

    let output = match render(&analysis, &args) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error rendering output: {}", e);
            process::exit(1);
        }
    };

    if let Some(ref output_path) = args.output_file {
        if let Err(e) = fs::write(output_path, output) {
            eprintln!("Error writing output file '{}': {}", output_path.display(), e);
            process::exit(1);
        }
    } else {
        print!("{}", output);
    }
}
