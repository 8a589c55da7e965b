//! Display and LaTeX formatting for boolean expressions

use super::Expr;
use std::fmt;

/// Context for formatting expressions with minimal parentheses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpContext {
    None,     // Top level or inside parentheses
    AndLeft,  // Left operand of an AND
    AndRight, // Right operand of an AND
    OrLeft,   // Left operand of an OR
    OrRight,  // Right operand of an OR
}

impl Expr {
    /// Format with operator precedence context to minimize parentheses
    ///
    /// Right operands of the same operator keep their parentheses so the
    /// output re-parses to an identical tree under left associativity.
    fn fmt_with_context(&self, f: &mut fmt::Formatter<'_>, ctx: OpContext) -> fmt::Result {
        match self {
            Expr::Var(c) => write!(f, "{}", c),

            Expr::And(left, right) => {
                let needs_parens = ctx == OpContext::AndRight;
                if needs_parens {
                    write!(f, "(")?;
                }
                left.fmt_with_context(f, OpContext::AndLeft)?;
                write!(f, " * ")?;
                right.fmt_with_context(f, OpContext::AndRight)?;
                if needs_parens {
                    write!(f, ")")?;
                }
                Ok(())
            }

            Expr::Or(left, right) => {
                // OR has the lowest precedence, so any AND context needs parens
                let needs_parens = matches!(
                    ctx,
                    OpContext::AndLeft | OpContext::AndRight | OpContext::OrRight
                );
                if needs_parens {
                    write!(f, "(")?;
                }
                left.fmt_with_context(f, OpContext::OrLeft)?;
                write!(f, " + ")?;
                right.fmt_with_context(f, OpContext::OrRight)?;
                if needs_parens {
                    write!(f, ")")?;
                }
                Ok(())
            }

            Expr::Not(inner) => {
                match inner.as_ref() {
                    Expr::Var(_) | Expr::Not(_) => inner.fmt_with_context(f, OpContext::None)?,
                    _ => {
                        write!(f, "(")?;
                        inner.fmt_with_context(f, OpContext::None)?;
                        write!(f, ")")?;
                    }
                }
                write!(f, "'")
            }
        }
    }

    /// Render the expression as a LaTeX math fragment
    ///
    /// NOT becomes an overline, AND a `\cdot`, OR a `+`. An OR operand of an
    /// AND is wrapped in `\left(` `\right)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_visualizer::Expr;
    ///
    /// let expr = Expr::parse("(a + b) * c'").unwrap();
    /// assert_eq!(expr.to_latex(), r"\left(a + b\right) \cdot \overline{c}");
    /// ```
    pub fn to_latex(&self) -> String {
        match self {
            Expr::Var(c) => c.to_string(),
            Expr::Not(inner) => format!(r"\overline{{{}}}", inner.to_latex()),
            Expr::And(left, right) => {
                format!(r"{} \cdot {}", left.latex_and_operand(), right.latex_and_operand())
            }
            Expr::Or(left, right) => format!("{} + {}", left.to_latex(), right.to_latex()),
        }
    }

    fn latex_and_operand(&self) -> String {
        match self {
            Expr::Or(..) => format!(r"\left({}\right)", self.to_latex()),
            _ => self.to_latex(),
        }
    }
}

/// Display formatting for boolean expressions
///
/// Uses the canonical notation `*` for AND, `+` for OR and postfix `'` for
/// NOT, with as few parentheses as precedence allows. The output always
/// parses back to the same tree.
///
/// # Examples
///
/// ```
/// use logic_visualizer::Expr;
///
/// let expr = Expr::var('a').and(Expr::var('b')).or(Expr::var('c'));
/// assert_eq!(expr.to_string(), "a * b + c");
///
/// let expr = Expr::var('a').or(Expr::var('b')).and(Expr::var('c')).not();
/// assert_eq!(expr.to_string(), "((a + b) * c)'");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_context(f, OpContext::None)
    }
}
