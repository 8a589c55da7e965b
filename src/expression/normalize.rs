//! Surface-syntax normalization
//!
//! Maps the accepted notation variants onto the canonical alphabet the lexer
//! understands: `*` (AND), `|` (OR), `'` (NOT), parentheses and
//! single-character variables.

/// Rewrite `·`→`*`, `¯`→`'`, `!`→`'`, `+`→`|`, lowercase, then trim
///
/// No other character is touched; anything outside the canonical alphabet
/// is left for the lexer to reject.
///
/// # Examples
///
/// ```
/// use logic_visualizer::expression::normalize;
///
/// assert_eq!(normalize("  A·B + !C "), "a*b | 'c");
/// ```
pub fn normalize(input: &str) -> String {
    let rewritten: String = input
        .chars()
        .map(|c| match c {
            '·' => '*',
            '¯' | '!' => '\'',
            '+' => '|',
            other => other,
        })
        .collect();
    rewritten.to_lowercase().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_rewrites() {
        assert_eq!(normalize("a·b"), "a*b");
        assert_eq!(normalize("a¯"), "a'");
        assert_eq!(normalize("!a"), "'a");
        assert_eq!(normalize("a+b"), "a|b");
    }

    #[test]
    fn test_lowercase_and_trim() {
        assert_eq!(normalize("\t (A | B)  \n"), "(a | b)");
    }

    #[test]
    fn test_unsupported_symbols_untouched() {
        assert_eq!(normalize("a & ~b ^ c"), "a & ~b ^ c");
        assert_eq!(normalize("A AND B"), "a and b");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize("   "), "");
    }
}
