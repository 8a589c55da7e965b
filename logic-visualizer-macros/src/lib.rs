use proc_macro::TokenStream;
use proc_macro2::{Punct, TokenStream as TokenStream2};
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, Token};

/// Expression tree built while reading the macro input
enum Node {
    /// A single-character variable, already lowercased
    Variable(char),
    /// An existing `Expr` value in scope, spliced in by clone
    Splice(Ident),
    Not(Box<Node>),
    Binary(Level, Box<Node>, Box<Node>),
}

impl Node {
    /// Code that builds this node with the `Expr` constructors
    fn expand(&self) -> TokenStream2 {
        match self {
            Node::Variable(name) => quote!(Expr::var(#name)),
            Node::Splice(ident) => quote!(::core::clone::Clone::clone(&#ident)),
            Node::Not(inner) => {
                let inner = inner.expand();
                quote!(Expr::not(#inner))
            }
            Node::Binary(level, left, right) => {
                let (left, right) = (left.expand(), right.expand());
                match level {
                    Level::Or => quote!(Expr::or(#left, #right)),
                    Level::And => quote!(Expr::and(#left, #right)),
                }
            }
        }
    }
}

/// Binary operator levels, loosest first
#[derive(Clone, Copy)]
enum Level {
    /// `+` or `|`
    Or,
    /// `*` or `&`
    And,
}

impl Level {
    /// The next tighter binary level, if any
    fn tighter(self) -> Option<Level> {
        match self {
            Level::Or => Some(Level::And),
            Level::And => None,
        }
    }

    /// Consume this level's operator when it comes next
    fn eat(self, input: ParseStream) -> Result<bool> {
        let next = match self {
            Level::Or => input.peek(Token![+]) || input.peek(Token![|]),
            Level::And => input.peek(Token![*]) || input.peek(Token![&]),
        };
        if next {
            input.parse::<Punct>()?;
        }
        Ok(next)
    }
}

struct MacroInput {
    root: Node,
}

impl Parse for MacroInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let root = parse_level(input, Level::Or)?;
        Ok(MacroInput { root })
    }
}

/// Parse a left-associative chain of `level` operators
fn parse_level(input: ParseStream, level: Level) -> Result<Node> {
    let mut left = parse_operand(input, level)?;
    while level.eat(input)? {
        let right = parse_operand(input, level)?;
        left = Node::Binary(level, Box::new(left), Box::new(right));
    }
    Ok(left)
}

fn parse_operand(input: ParseStream, level: Level) -> Result<Node> {
    match level.tighter() {
        Some(next) => parse_level(input, next),
        None => parse_negated(input),
    }
}

/// Parse any run of `!`/`~` and the atom they apply to
fn parse_negated(input: ParseStream) -> Result<Node> {
    let mut negations = 0usize;
    while input.peek(Token![!]) || input.peek(Token![~]) {
        input.parse::<Punct>()?;
        negations += 1;
    }
    let atom = parse_atom(input)?;
    Ok((0..negations).fold(atom, |node, _| Node::Not(Box::new(node))))
}

/// Check a variable name is one character from `a`-`z` or `0`-`9`
fn single_char_name(name: &str, span: proc_macro2::Span) -> Result<char> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphanumeric() => Ok(c.to_ascii_lowercase()),
        _ => Err(syn::Error::new(
            span,
            "variables are a single letter `a`-`z` or digit `0`-`9`",
        )),
    }
}

/// A variable, a literal naming one, a spliced `Expr`, or a parenthesized group
fn parse_atom(input: ParseStream) -> Result<Node> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        parse_level(&content, Level::Or)
    } else if input.peek(syn::LitStr) {
        let lit: syn::LitStr = input.parse()?;
        single_char_name(&lit.value(), lit.span()).map(Node::Variable)
    } else if input.peek(syn::LitChar) {
        let lit: syn::LitChar = input.parse()?;
        single_char_name(&lit.value().to_string(), lit.span()).map(Node::Variable)
    } else if input.peek(syn::LitInt) {
        let lit: syn::LitInt = input.parse()?;
        single_char_name(lit.base10_digits(), lit.span()).map(Node::Variable)
    } else {
        let ident: Ident = input.parse()?;
        let name = ident.to_string();
        if name.chars().count() == 1 {
            single_char_name(&name, ident.span()).map(Node::Variable)
        } else {
            Ok(Node::Splice(ident))
        }
    }
}

/// The `expr!` procedural macro for boolean expressions
///
/// Builds an `Expr` tree at compile time with the same precedence as the
/// runtime parser. `Expr` must be in scope.
///
/// # Supported Syntax
///
/// - `a` - Single-letter identifier: the variable `a` (uppercase is folded)
/// - `"a"` or `'a'` - String or char literal naming a variable
/// - `0`-`9` - Digit variables
/// - `carry` - Any longer identifier: an `Expr` in scope, cloned into the tree
/// - `!a` or `~a` - NOT
/// - `a * b` or `a & b` - AND
/// - `a + b` or `a | b` - OR
/// - `(a + b) * c` - Parentheses for grouping
///
/// # Operator Precedence
///
/// From highest to lowest:
/// 1. `( )` (Parentheses)
/// 2. `!` / `~` (NOT)
/// 3. `*` / `&` (AND)
/// 4. `+` / `|` (OR)
///
/// # Examples
///
/// ```ignore
/// use logic_visualizer::{expr, Expr};
///
/// let xor = expr!(a * !b + !a * b);
/// let majority = expr!(a * b + a * c + b * c);
///
/// let carry = expr!(a * b);
/// let with_carry = expr!(carry + c);
/// ```
#[proc_macro]
pub fn expr(input: TokenStream) -> TokenStream {
    let parsed = parse_macro_input!(input as MacroInput);
    TokenStream::from(parsed.root.expand())
}
