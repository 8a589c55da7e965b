//! Recursive-descent parser for boolean expressions
//!
//! Precedence from highest to lowest:
//! 1. `( )` grouping
//! 2. `'` NOT (prefix, stacking; postfix after a primary)
//! 3. `*` AND (left-associative)
//! 4. `|` OR (left-associative)

use super::error::{ParseError, SyntaxError};
use super::lexer::{tokenize, SpannedToken, Token};
use super::normalize::normalize;
use super::Expr;
use tracing::debug;

/// Deepest nesting the parser accepts
///
/// Bounds both the parenthesis/prefix-NOT nesting and the height of the
/// resulting tree, so every recursive walk over a parsed [`Expr`] stays
/// within this many frames.
pub const MAX_NESTING: usize = 256;

/// A parsed subtree and its height (a leaf has height 1)
type Parsed = (Expr, usize);

/// Cursor over a token stream
struct Parser<'t> {
    tokens: &'t [SpannedToken],
    pos: usize,
    nesting: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [SpannedToken]) -> Self {
        Parser {
            tokens,
            pos: 0,
            nesting: 0,
        }
    }

    fn advance(&mut self) -> Option<SpannedToken> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consume the next token if it is `expected`, returning its position
    fn eat(&mut self, expected: Token) -> Option<usize> {
        match self.tokens.get(self.pos) {
            Some(t) if t.token == expected => {
                self.pos += 1;
                Some(t.position)
            }
            _ => None,
        }
    }

    /// Step one level deeper into a group or prefix NOT
    fn enter(&mut self, position: usize) -> Result<(), SyntaxError> {
        self.nesting += 1;
        if self.nesting > MAX_NESTING {
            return Err(too_deep(position));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.nesting -= 1;
    }

    /// Parse OR expressions (lowest precedence)
    fn parse_or(&mut self) -> Result<Parsed, SyntaxError> {
        let (mut left, mut height) = self.parse_and()?;
        while let Some(position) = self.eat(Token::Or) {
            let (right, right_height) = self.parse_and()?;
            height = grow(height.max(right_height), position)?;
            left = Expr::Or(Box::new(left), Box::new(right));
        }
        Ok((left, height))
    }

    /// Parse AND expressions (higher precedence)
    fn parse_and(&mut self) -> Result<Parsed, SyntaxError> {
        let (mut left, mut height) = self.parse_not()?;
        while let Some(position) = self.eat(Token::And) {
            let (right, right_height) = self.parse_not()?;
            height = grow(height.max(right_height), position)?;
            left = Expr::And(Box::new(left), Box::new(right));
        }
        Ok((left, height))
    }

    /// Parse prefix NOT, which stacks and associates to the right
    fn parse_not(&mut self) -> Result<Parsed, SyntaxError> {
        let Some(position) = self.eat(Token::Not) else {
            return self.parse_postfix();
        };
        self.enter(position)?;
        let (inner, height) = self.parse_not()?;
        self.leave();
        Ok((Expr::Not(Box::new(inner)), grow(height, position)?))
    }

    /// Parse a primary followed by any number of postfix NOTs
    fn parse_postfix(&mut self) -> Result<Parsed, SyntaxError> {
        let (mut expr, mut height) = self.parse_primary()?;
        while let Some(position) = self.eat(Token::Not) {
            height = grow(height, position)?;
            expr = Expr::Not(Box::new(expr));
        }
        Ok((expr, height))
    }

    /// Parse a variable or a parenthesized expression
    fn parse_primary(&mut self) -> Result<Parsed, SyntaxError> {
        let Some(SpannedToken { token, position }) = self.advance() else {
            return Err(SyntaxError::UnexpectedEnd);
        };
        match token {
            Token::Var(c) => Ok((Expr::Var(c), 1)),
            Token::LParen => {
                self.enter(position)?;
                let inner = self.parse_or()?;
                self.leave();
                match self.advance() {
                    Some(SpannedToken {
                        token: Token::RParen,
                        ..
                    }) => Ok(inner),
                    Some(found) => Err(SyntaxError::UnclosedParen {
                        open: position,
                        token: found.token,
                        position: found.position,
                    }),
                    None => Err(SyntaxError::UnmatchedParen { open: position }),
                }
            }
            token => Err(SyntaxError::UnexpectedToken { token, position }),
        }
    }
}

fn too_deep(position: usize) -> SyntaxError {
    SyntaxError::NestingTooDeep {
        position,
        limit: MAX_NESTING,
    }
}

/// Height of a node over a child of height `child`, checked against the limit
fn grow(child: usize, position: usize) -> Result<usize, SyntaxError> {
    let height = child + 1;
    if height > MAX_NESTING {
        return Err(too_deep(position));
    }
    Ok(height)
}

/// Parse a token stream into an expression, rejecting leftover tokens
pub(crate) fn parse_tokens(tokens: &[SpannedToken]) -> Result<Expr, SyntaxError> {
    let mut parser = Parser::new(tokens);
    let (expr, _) = parser.parse_or()?;
    if let Some(SpannedToken { token, position }) = parser.advance() {
        return Err(SyntaxError::TrailingInput { token, position });
    }
    Ok(expr)
}

impl Expr {
    /// Parse a boolean expression from a string
    ///
    /// The input is normalized first (see [`normalize`]), so all of these
    /// spellings are accepted:
    /// - `*` or `·` for AND
    /// - `+` or `|` for OR
    /// - `'`, `¯` or `!` for NOT, prefix (`!a`) or postfix (`a'`)
    /// - Parentheses for grouping
    /// - Single-character variables `a`-`z` (case-insensitive) and `0`-`9`
    ///
    /// There is no implicit AND: `ab` is a syntax error.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_visualizer::Expr;
    ///
    /// let expr = Expr::parse("(A + B) · C'").unwrap();
    /// assert_eq!(expr.to_string(), "(a + b) * c'");
    ///
    /// assert!(Expr::parse("a *").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let normalized = normalize(input);
        let tokens = tokenize(&normalized)?;
        let expr = parse_tokens(&tokens)?;
        debug!(input = %normalized, nodes = expr.node_count(), "parsed expression");
        Ok(expr)
    }
}
