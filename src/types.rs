//! Type definitions for the expression validator, parser and evaluator.
//!
//! This module contains the core data structures shared by the pipeline stages: the token
//! produced by the lexer, the binary operators and their precedence, and the arena-allocated
//! expression tree evaluated by [`crate::eval`].

use core::fmt;

/// Hard ceiling on `EngineConfig::max_input_len`, in characters.
///
/// Every input within this length fits the literal buffer and the builder's nesting limit,
/// so an expression the validator accepts always builds.
pub const EXP_MAX_INPUT_LEN: usize = 256;

/// Maximum length in bytes of a single number literal, sign included.
///
/// A literal never exceeds the input it comes from, so this matches [`EXP_MAX_INPUT_LEN`].
pub const EXP_MAX_LITERAL_LEN: usize = EXP_MAX_INPUT_LEN;

/// Maximum parenthesis and negation nesting the tree builder follows before giving up.
///
/// An input of [`EXP_MAX_INPUT_LEN`] characters nests at most 128 groups deep, each
/// counting one level, or two when negated (`-(`), so this is never reached by it.
pub const EXP_MAX_RECURSION_DEPTH: usize = 256;

/// Maximum number of decimal places the formatter rounds to.
pub const EXP_MAX_PRECISION: u32 = 15;

/// Fixed-capacity string holding the source text of a number literal.
pub type HString = heapless::String<EXP_MAX_LITERAL_LEN>;

/// The four binary arithmetic operators.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Maps an operator character to its operator.
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// Binding strength used by the tree builder: `+ -` bind looser than `* /`.
    pub const fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A token produced by the lexer.
///
/// A unary minus never appears as an [`Token::Operator`]: in front of a number it is folded
/// into the literal (`"-2"`), in front of a parenthesis it becomes [`Token::Negate`].
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// A number literal exactly as written, optionally signed, e.g. `3`, `-2.5`, `.5`.
    Number(HString),

    /// A binary operator, either written or inserted for implicit multiplication.
    Operator(Operator),

    /// A sign applying to the parenthesized group that follows it, as in `-(1+2)`.
    Negate,

    /// `(`
    Open,

    /// `)`
    Close,
}

impl Token {
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text.as_str()),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Negate => write!(f, "neg"),
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
        }
    }
}

/// Expression tree node.
///
/// Nodes live in a `bumpalo::Bump` arena owned by the caller of the parser. Each node is
/// referenced by exactly one parent and the whole tree is released with the arena.
#[derive(Clone, Debug, PartialEq)]
pub enum AstExpr<'arena> {
    /// A number literal, kept as source text and parsed at evaluation time.
    ///
    /// Examples: `3.14`, `42`, `-1.5`
    Leaf(&'arena str),

    /// Negation of a parenthesized sub-expression.
    ///
    /// Example: `-(1 + 2)`
    Negate(&'arena AstExpr<'arena>),

    /// A binary operation.
    ///
    /// Example: `8 - 3`
    Binary {
        op: Operator,
        left: &'arena AstExpr<'arena>,
        right: &'arena AstExpr<'arena>,
    },
}

impl AstExpr<'_> {
    /// Number of nodes in the tree rooted here.
    pub fn node_count(&self) -> usize {
        match self {
            AstExpr::Leaf(_) => 1,
            AstExpr::Negate(child) => 1 + child.node_count(),
            AstExpr::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }
}

/// Renders the tree fully parenthesized, e.g. `((8 - 3) - 2)`.
impl fmt::Display for AstExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstExpr::Leaf(text) => write!(f, "{}", text),
            AstExpr::Negate(child) => write!(f, "-({})", child),
            AstExpr::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}
