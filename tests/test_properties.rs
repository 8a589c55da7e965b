//! End-to-end checks of the parsing and truth-table properties

use logic_visualizer::expression::MAX_NESTING;
use logic_visualizer::{
    Analysis, AnalysisError, EngineConfig, Expr, LexError, Literal, Session, SyntaxError,
    TruthTable,
};

fn analyse(input: &str) -> Analysis {
    Analysis::run(input, &EngineConfig::default()).unwrap()
}

/// Outputs of the truth table as 0/1 in row order
fn outputs(table: &TruthTable) -> Vec<u8> {
    table.rows().iter().map(|row| u8::from(row.output())).collect()
}

#[test]
fn test_row_count_is_two_to_the_variables() {
    for (input, n) in [
        ("a", 1),
        ("a * b", 2),
        ("a | b * c", 3),
        ("(a + b) * (c + d)", 4),
        ("a*b*c*d*e*f*g*h", 8),
        ("a * a * a'", 1),
    ] {
        let analysis = analyse(input);
        assert_eq!(analysis.variables().len(), n, "input {:?}", input);
        assert_eq!(analysis.truth_table().len(), 1 << n, "input {:?}", input);
    }
}

#[test]
fn test_parsing_is_deterministic() {
    let first = Expr::parse("(a | b') * c | d''").unwrap();
    for _ in 0..10 {
        assert_eq!(Expr::parse("(a | b') * c | d''").unwrap(), first);
    }
}

#[test]
fn test_and_binds_tighter_than_or() {
    let implicit = analyse("a|b*c");
    let explicit = analyse("a|(b*c)");
    assert_eq!(implicit.truth_table(), explicit.truth_table());
    assert_eq!(outputs(implicit.truth_table()), vec![0, 0, 0, 1, 1, 1, 1, 1]);
}

#[test]
fn test_double_negation() {
    let doubled = analyse("a''");
    let plain = analyse("a");
    assert_eq!(doubled.truth_table(), plain.truth_table());

    let prefix = analyse("!!a");
    assert_eq!(prefix.truth_table(), plain.truth_table());
}

#[test]
fn test_and_truth_table() {
    let analysis = analyse("a*b");
    let table = analysis.truth_table();
    assert_eq!(table.len(), 4);
    for row in table.rows() {
        let a = row.inputs()[0];
        let b = row.inputs()[1];
        assert_eq!(row.output(), a && b);
    }
    assert_eq!(table.value(3, 'a'), Some(true));
    assert_eq!(table.value(3, 'b'), Some(true));
    assert_eq!(table.output(3), Some(true));
    assert_eq!(outputs(table), vec![0, 0, 0, 1]);
}

#[test]
fn test_or_truth_table() {
    let analysis = analyse("a|b");
    let table = analysis.truth_table();
    assert_eq!(table.value(0, 'a'), Some(false));
    assert_eq!(table.value(0, 'b'), Some(false));
    assert_eq!(outputs(table), vec![0, 1, 1, 1]);
}

#[test]
fn test_not_truth_table() {
    let analysis = analyse("a'");
    let table = analysis.truth_table();
    assert_eq!(table.len(), 2);
    assert_eq!(table.value(0, 'a'), Some(false));
    assert_eq!(table.output(0), Some(true));
    assert_eq!(table.value(1, 'a'), Some(true));
    assert_eq!(table.output(1), Some(false));
}

#[test]
fn test_sop_of_or_under_and() {
    let analysis = analyse("(a+b)*c");
    assert_eq!(analysis.normalized(), "(a|b)*c");
    let terms = analysis.sop().terms();
    assert_eq!(terms.len(), 2);
    assert_eq!(
        terms[0].literals(),
        &[Literal::positive('a'), Literal::positive('c')]
    );
    assert_eq!(
        terms[1].literals(),
        &[Literal::positive('b'), Literal::positive('c')]
    );
}

#[test]
fn test_trailing_operator_is_syntax_error() {
    let err = Analysis::run("a*", &EngineConfig::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::Syntax(SyntaxError::UnexpectedEnd)));
    assert!(Expr::parse("a*").is_err());
}

#[test]
fn test_unknown_character_is_lex_error() {
    let err = Analysis::run("a#b", &EngineConfig::default()).unwrap_err();
    assert_eq!(
        err,
        AnalysisError::Lex(LexError {
            character: '#',
            position: 1
        })
    );
    assert!(err.to_string().contains("'#'"));
    assert!(err.to_string().contains("position 1"));
}

#[test]
fn test_documented_but_unsupported_operators_fail() {
    let config = EngineConfig::default();
    for input in ["a & b", "~a", "a ^ b"] {
        assert!(
            matches!(Analysis::run(input, &config), Err(AnalysisError::Lex(_))),
            "input {:?}",
            input
        );
    }
    // Keywords lex as single-letter variables with no operator between them
    assert!(matches!(
        Analysis::run("a and b", &config),
        Err(AnalysisError::Syntax(SyntaxError::TrailingInput { .. }))
    ));
    // No implicit AND
    assert!(matches!(
        Analysis::run("ab", &config),
        Err(AnalysisError::Syntax(SyntaxError::TrailingInput { .. }))
    ));
}

#[test]
fn test_malformed_inputs_never_panic() {
    let config = EngineConfig::default();
    for input in ["", "   ", "(", ")", "((a)", "a)(", "''", "a||b", "*", "(a|)", "a''*"] {
        assert!(Analysis::run(input, &config).is_err(), "input {:?}", input);
    }
}

#[test]
fn test_deeply_nested_input_is_rejected() {
    let config = EngineConfig::default();
    let deep_groups = format!("{}a{}", "(".repeat(5_000), ")".repeat(5_000));
    let deep_prefix = format!("{}a", "!".repeat(5_000));
    let deep_postfix = format!("a{}", "'".repeat(5_000));
    let long_chain = vec!["a"; 50_000].join(" + ");

    for input in [&deep_groups, &deep_prefix, &deep_postfix, &long_chain] {
        let err = Analysis::run(input, &config).unwrap_err();
        assert!(
            matches!(
                err,
                AnalysisError::Syntax(SyntaxError::NestingTooDeep { limit, .. }) if limit == MAX_NESTING
            ),
            "unexpected {:?}",
            err
        );
        assert!(err.to_string().contains("nested deeper than"));
    }
}

#[test]
fn test_nesting_at_the_limit_is_analysed() {
    let input = format!("{}a * b{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    let analysis = analyse(&input);
    assert_eq!(analysis.truth_table().minterms(), vec![3]);
    assert_eq!(analysis.sop().to_string(), "a * b");
}

#[test]
fn test_deep_input_takes_the_session_error_path() {
    let mut session = Session::default();
    session.submit("a | b").unwrap();
    let deep = format!("{}a{}", "(".repeat(5_000), ")".repeat(5_000));
    assert!(session.submit(&deep).is_err());
    assert!(session.current().is_none());
}

#[test]
fn test_unclosed_group_message() {
    let config = EngineConfig::default();

    let err = Analysis::run("(a b", &config).unwrap_err();
    assert_eq!(
        err,
        AnalysisError::Syntax(SyntaxError::UnclosedParen {
            open: 0,
            token: logic_visualizer::Token::Var('b'),
            position: 3
        })
    );
    assert_eq!(
        err.to_string(),
        "syntax error: expected ')' to close '(' at position 0, found variable 'b' at position 3"
    );

    let err = Analysis::run("(a|b c)", &config).unwrap_err();
    assert!(err.to_string().contains("expected ')' to close '(' at position 0"));
    assert!(err.to_string().contains("variable 'c' at position 5"));
}

#[test]
fn test_alternate_notations_agree() {
    let canonical = analyse("(a | b') * c");
    for input in ["(A + B¯) · C", "(a+!b)*c", "  (A|'B)*C  ", "(a + b'')'' * c"] {
        assert_eq!(
            analyse(input).truth_table(),
            canonical.truth_table(),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_digits_are_variables() {
    let analysis = analyse("1 * a");
    assert_eq!(analysis.variables(), &['1', 'a']);
    assert_eq!(analysis.truth_table().minterms(), vec![3]);
}

#[test]
fn test_variable_order_comes_from_the_string() {
    let analysis = analyse("c | a * b");
    assert_eq!(analysis.variables(), &['a', 'b', 'c']);
    assert_eq!(analysis.truth_table().variables(), &['a', 'b', 'c']);
}
