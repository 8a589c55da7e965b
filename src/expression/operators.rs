//! Operator overloading for boolean expressions

use super::Expr;
use std::ops::{Add, BitAnd, BitOr, Mul, Not};

/// Logical AND operator: `a * b`
///
/// # Examples
///
/// ```
/// use logic_visualizer::Expr;
///
/// let result = Expr::var('a') * Expr::var('b');
/// assert_eq!(result, Expr::var('a').and(Expr::var('b')));
/// ```
impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        self.and(rhs)
    }
}

/// Logical AND operator for references: `&a * &b` (clones both operands)
impl Mul for &Expr {
    type Output = Expr;

    fn mul(self, rhs: &Expr) -> Expr {
        self.clone().and(rhs.clone())
    }
}

/// Logical AND operator: `a & b`, same as `a * b`
impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Expr) -> Expr {
        self.and(rhs)
    }
}

/// Logical OR operator: `a + b`
///
/// # Examples
///
/// ```
/// use logic_visualizer::Expr;
///
/// let result = Expr::var('a') + Expr::var('b');
/// assert_eq!(result, Expr::var('a').or(Expr::var('b')));
/// ```
impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        self.or(rhs)
    }
}

/// Logical OR operator for references: `&a + &b` (clones both operands)
impl Add for &Expr {
    type Output = Expr;

    fn add(self, rhs: &Expr) -> Expr {
        self.clone().or(rhs.clone())
    }
}

/// Logical OR operator: `a | b`, same as `a + b`
impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Expr) -> Expr {
        self.or(rhs)
    }
}

/// Logical NOT operator: `!a`
impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::Not(Box::new(self))
    }
}

/// Logical NOT operator for references: `!&a`
impl Not for &Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::Not(Box::new(self.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operators_match_methods() {
        let a = Expr::var('a');
        let b = Expr::var('b');

        assert_eq!(&a * &b, a.clone().and(b.clone()));
        assert_eq!(&a + &b, a.clone().or(b.clone()));
        assert_eq!(a.clone() & b.clone(), a.clone() * b.clone());
        assert_eq!(a.clone() | b.clone(), a.clone() + b.clone());
        assert_eq!(!&a, a.clone().not());
    }

    #[test]
    fn test_operator_precedence_follows_rust() {
        let a = Expr::var('a');
        let b = Expr::var('b');
        let c = Expr::var('c');

        // Rust gives * precedence over +, matching the expression grammar
        let expr = a.clone() + b.clone() * c.clone();
        assert_eq!(expr, Expr::parse("a + b * c").unwrap());
    }
}
