//! Tokenizer for arithmetic expressions.
//!
//! The lexer turns expression text into a flat [`Token`] sequence. Besides splitting the
//! input it applies the two rewriting rules of the grammar:
//!
//! - a unary minus is folded into the number literal that follows it (`1*-2` yields
//!   `1`, `*`, `-2`), or becomes [`Token::Negate`] when a parenthesis follows (`-(2)`);
//! - a `(` directly after a number or `)` gets an implicit `*` in front of it
//!   (`2(3)` yields `2`, `*`, `(`, `3`, `)`).

extern crate alloc;
use crate::error::{ExprError, Result};
use crate::types::{HString, Operator, Token};
use alloc::vec::Vec;
use tracing::trace;

/// The lexer struct, which produces tokens from an input string.
pub struct Lexer<'a> {
    input: &'a str,
    /// Byte offset of the next character.
    pos: usize,
    /// Character offset of the next character, used in error reports.
    position: usize,
    /// Number literal being accumulated, possibly just a sign.
    pending: HString,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            position: 0,
            pending: HString::new(),
            tokens: Vec::new(),
        }
    }

    /// Peek at the current character.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advance the position by one character.
    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
            self.position += 1;
        }
    }

    fn push_pending(&mut self, c: char) -> Result<()> {
        self.pending.push(c).map_err(|_| ExprError::StringTooLong)
    }

    /// Emits the pending literal, if any.
    fn flush(&mut self) {
        if !self.pending.is_empty() {
            let literal = core::mem::take(&mut self.pending);
            self.tokens.push(Token::Number(literal));
        }
    }

    /// A `-` is a sign rather than a subtraction when nothing but a (possibly signed)
    /// operand start precedes it: the start of input, `(`, or another operator.
    fn in_unary_context(&self) -> bool {
        let pending_is_sign = self.pending.chars().all(|c| c == '-');
        pending_is_sign
            && matches!(
                self.tokens.last(),
                None | Some(Token::Open) | Some(Token::Operator(_))
            )
    }

    fn open_paren(&mut self) {
        if !self.pending.is_empty() && self.pending.chars().all(|c| c == '-') {
            self.pending.clear();
            self.tokens.push(Token::Negate);
        } else {
            self.flush();
        }
        if self
            .tokens
            .last()
            .is_some_and(|t| t.is_number() || *t == Token::Close)
        {
            self.tokens.push(Token::Operator(Operator::Mul));
        }
        self.tokens.push(Token::Open);
    }

    /// Consumes the lexer and returns every token of the input in order.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        while let Some(c) = self.peek() {
            match c {
                c if c.is_whitespace() => {}
                '0'..='9' | '.' => self.push_pending(c)?,
                '-' if self.in_unary_context() => self.push_pending(c)?,
                '+' | '-' | '*' | '/' => {
                    self.flush();
                    if let Some(op) = Operator::from_char(c) {
                        self.tokens.push(Token::Operator(op));
                    }
                }
                '(' => self.open_paren(),
                ')' => {
                    self.flush();
                    self.tokens.push(Token::Close);
                }
                _ => {
                    return Err(ExprError::UnsupportedCharacter {
                        position: self.position,
                        found: c,
                    });
                }
            }
            self.advance();
        }
        self.flush();

        trace!(tokens = self.tokens.len(), "tokenized expression");
        Ok(self.tokens)
    }
}

/// Tokenizes `input`.
///
/// Meant to run on validated text, but never panics on malformed input: unknown
/// characters yield [`ExprError::UnsupportedCharacter`], and malformed literals are passed
/// through as written for the evaluator to reject.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).tokenize()
}
