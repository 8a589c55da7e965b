//! Karnaugh map, gate netlist, SOP and CMOS views of whole analyses

use logic_visualizer::{
    expr, Analysis, EngineConfig, Expr, GateKind, Network, Signal, TransistorKind,
};

fn analyse(input: &str) -> Analysis {
    Analysis::run(input, &EngineConfig::default()).unwrap()
}

#[test]
fn test_kmap_of_three_input_and() {
    let kmap = analyse("a*b*c").kmap();
    assert_eq!(kmap.rows(), 2);
    assert_eq!(kmap.columns(), 4);
    assert_eq!(kmap.row_labels(), vec!["0", "1"]);
    assert_eq!(kmap.column_labels(), vec!["00", "01", "11", "10"]);

    let ones: Vec<(usize, usize)> = (0..kmap.rows())
        .flat_map(|r| (0..kmap.columns()).map(move |c| (r, c)))
        .filter(|&(r, c)| kmap.cell(r, c) == Some(true))
        .collect();
    assert_eq!(ones, vec![(1, 2)]);
    assert_eq!(kmap.column_labels()[2], "11");
}

#[test]
fn test_kmap_cells_match_truth_table() {
    let analysis = analyse("(a | b') * (c | d) + a' * d'");
    let table = analysis.truth_table();
    let kmap = analysis.kmap();
    assert_eq!(kmap.rows() * kmap.columns(), table.len());
    for r in 0..kmap.rows() {
        for c in 0..kmap.columns() {
            let index = kmap.minterm(r, c);
            assert_eq!(kmap.cell(r, c), table.output(index), "cell ({}, {})", r, c);
        }
    }
}

#[test]
fn test_kmap_neighbours_differ_in_one_variable() {
    let kmap = analyse("a * b * c * d * e").kmap();
    for r in 0..kmap.rows() {
        for c in 0..kmap.columns() {
            let here = kmap.minterm(r, c);
            let right = kmap.minterm(r, (c + 1) % kmap.columns());
            let below = kmap.minterm((r + 1) % kmap.rows(), c);
            assert_eq!((here ^ right).count_ones(), 1);
            assert_eq!((here ^ below).count_ones(), 1);
        }
    }
}

#[test]
fn test_circuit_structure() {
    let circuit = analyse("(a + b) * c'").circuit();
    assert_eq!(circuit.inputs(), &['a', 'b', 'c']);
    assert_eq!(circuit.gate_count(), 3);

    let kinds: Vec<GateKind> = circuit.gates().iter().map(|g| g.kind).collect();
    assert_eq!(kinds, vec![GateKind::Or, GateKind::Not, GateKind::And]);
    assert_eq!(circuit.output(), Signal::Gate(2));
    assert_eq!(circuit.depth(), 2);
    assert_eq!(
        circuit.to_string(),
        "g0 = OR(a, b)\ng1 = NOT(c)\ng2 = AND(g0, g1)\nout = g2\n"
    );
}

#[test]
fn test_circuit_of_bare_variable() {
    let circuit = analyse("a").circuit();
    assert_eq!(circuit.gate_count(), 0);
    assert_eq!(circuit.output(), Signal::Input('a'));
    assert_eq!(circuit.depth(), 0);
}

#[test]
fn test_sop_literal_flip() {
    let analysis = analyse("a' * (b + c)");
    assert_eq!(analysis.sop().to_string(), "a' * b + a' * c");
    assert!(!analysis.sop_is_approximate());
}

#[test]
fn test_sop_under_negated_group_is_flagged() {
    let analysis = analyse("(a * b)'");
    // Literals flip in place: the product survives as one term
    assert_eq!(analysis.sop().to_string(), "a' * b'");
    assert!(analysis.sop_is_approximate());
    assert_eq!(analysis.truth_table().minterms(), vec![0, 1, 2]);
}

#[test]
fn test_cmos_networks() {
    let cmos = analyse("a*b+c'").cmos();
    assert_eq!(cmos.pull_down().to_string(), "(a · b) ∥ c'");
    assert_eq!(cmos.pull_up().to_string(), "(a ∥ b) · c'");
    assert!(cmos.input_inverters().contains(&'c'));
    assert_eq!(cmos.input_inverters().len(), 1);
    assert_eq!(cmos.transistor_count(), 10);

    assert!(cmos
        .pull_down()
        .transistors()
        .iter()
        .all(|t| t.kind == TransistorKind::Nmos));
    assert!(cmos
        .pull_up()
        .transistors()
        .iter()
        .all(|t| t.kind == TransistorKind::Pmos));
}

#[test]
fn test_cmos_networks_are_duals() {
    let cmos = analyse("a * b * c + d * e").cmos();
    assert_eq!(cmos.pull_down().stack_height(), 3);
    assert_eq!(cmos.pull_up().stack_height(), 2);
    assert_eq!(
        cmos.pull_down().transistor_count(),
        cmos.pull_up().transistor_count()
    );
    assert!(matches!(cmos.pull_down(), Network::Parallel(terms) if terms.len() == 2));
    assert!(matches!(cmos.pull_up(), Network::Series(groups) if groups.len() == 2));
}

#[test]
fn test_cmos_report() {
    let report = analyse("a*b+c'").cmos().to_string();
    assert!(report.contains("PDN (NMOS): (a · b) ∥ c'"));
    assert!(report.contains("input inverters: c"));
    assert!(report.ends_with("transistors: 10\n"));
}

#[test]
fn test_display_reparses_to_same_tree() {
    for input in [
        "a",
        "a * b + c'",
        "(a + b) * c",
        "a + (b + c)",
        "a * (b * c)",
        "((a * b)' + c)''",
        "(a' + b)' * (c + d')",
    ] {
        let expr = Expr::parse(input).unwrap();
        assert_eq!(Expr::parse(&expr.to_string()).unwrap(), expr, "input {:?}", input);
    }
}

#[test]
fn test_macro_builds_same_tree_as_parser() {
    assert_eq!(expr!(a * b + !c), Expr::parse("a*b + c'").unwrap());
    assert_eq!(expr!((a + b) * c), Expr::parse("(a|b)*c").unwrap());
    assert_eq!(expr!(!(a * b)), Expr::parse("(a*b)'").unwrap());
}
