//! Example: analysing boolean expressions
//!
//! Runs the full pipeline on a few expressions written in different
//! notations and prints every view.
//!
//! Run with `cargo run --example analyse -- "A·B + !C"` to analyse your own.

use logic_visualizer::{expr, Analysis, EngineConfig, Expr, Session, TableWriter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = EngineConfig::default();

    if let Some(input) = std::env::args().nth(1) {
        let analysis = Analysis::run(&input, &config)?;
        print_analysis(&analysis)?;
        return Ok(());
    }

    println!("=== Notation Variants ===\n");
    for input in ["A·B + !C", "a*b | c'", "(a + b)¯ · c"] {
        let analysis = Analysis::run(input, &config)?;
        println!("   {:<14} -> {}", input, analysis.expr());
    }
    println!();

    println!("=== Full Analysis ===\n");
    let analysis = Analysis::run("(a + b) * c'", &config)?;
    print_analysis(&analysis)?;

    println!("=== Built with the expr! Macro ===\n");
    let majority = expr!(a * b + a * c + b * c);
    println!("   {}", majority);
    println!("   LaTeX: {}", majority.to_latex());
    assert!(majority.equivalent_to(&Expr::parse("b*c + a*(b + c)")?));
    println!();

    println!("=== Session ===\n");
    let mut session = Session::new(config);
    for input in ["a * b", "a * ", "a # b", "a | b"] {
        match session.submit(input) {
            Ok(analysis) => println!("   {:<6} ok, minterms {:?}", input, analysis.truth_table().minterms()),
            Err(e) => println!("   {:<6} error: {}", input, e),
        }
    }

    Ok(())
}

fn print_analysis(analysis: &Analysis) -> Result<(), Box<dyn std::error::Error>> {
    println!("Input:      {}", analysis.input());
    println!("Normalized: {}", analysis.normalized());
    println!("Variables:  {:?}", analysis.variables());
    println!();
    println!("{}", analysis.truth_table());
    println!("{}", analysis.kmap());
    println!("CSV:\n{}", analysis.truth_table().to_csv_string()?);
    println!("SOP: {}", analysis.sop());
    if analysis.sop_is_approximate() {
        println!("     (literals flipped under a negated group, not De Morgan expanded)");
    }
    println!();
    println!("{}", analysis.circuit());
    println!("LaTeX: {}", analysis.latex());
    println!();
    Ok(())
}
