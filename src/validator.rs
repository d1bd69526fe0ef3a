//! Structural validation of raw expression text.
//!
//! The validator walks the input once, character by character, with a small state machine
//! describing what may legally come next. It accepts exactly the arithmetic grammar the
//! lexer and tree builder understand:
//!
//! ```text
//! expr    := term (('+' | '-' | '*' | '/') term)*
//! term    := primary ('(' expr ')')*
//! primary := '-'? number | '-'? '(' expr ')'
//! number  := digit+ ('.' digit*)? | '.' digit+
//! ```
//!
//! Whitespace is ignored everywhere. Rejections carry the character offset at which the
//! problem was detected.

extern crate alloc;
use crate::error::{ExprError, Result};
use alloc::vec::Vec;

/// What the validator expects at the current position.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum State {
    /// Start of input, after `(`, or after a binary operator.
    ExpectOperand,
    /// After a unary minus: a number or `(` must follow.
    AfterSign,
    /// Inside a number literal.
    InNumber { digits: bool, dot: bool },
    /// After `)`.
    AfterClose,
}

/// Characters that may appear in an expression besides whitespace.
pub fn is_supported_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')')
}

fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

fn close_number(digits: bool, position: usize) -> Result<()> {
    if digits {
        Ok(())
    } else {
        Err(ExprError::syntax(position, "number literal without digits"))
    }
}

/// Checks that `input` is a complete, well-formed arithmetic expression of at most
/// `max_len` characters.
pub fn check_structure(input: &str, max_len: usize) -> Result<()> {
    let len = input.chars().count();
    if len > max_len {
        return Err(ExprError::InputTooLong { len, max: max_len });
    }

    let mut state = State::ExpectOperand;
    let mut open_parens: Vec<usize> = Vec::new();
    let mut prev: Option<char> = None;

    for (position, c) in input.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }
        if !is_supported_char(c) {
            return Err(ExprError::UnsupportedCharacter { position, found: c });
        }

        state = match (state, c) {
            (State::InNumber { dot, .. }, '0'..='9') => State::InNumber { digits: true, dot },
            (State::InNumber { digits, dot: false }, '.') => State::InNumber { digits, dot: true },
            (State::InNumber { .. }, '.') => {
                return Err(ExprError::syntax(
                    position,
                    "number literal with more than one decimal point",
                ));
            }
            (State::ExpectOperand | State::AfterSign, '0'..='9') => State::InNumber {
                digits: true,
                dot: false,
            },
            (State::ExpectOperand | State::AfterSign, '.') => State::InNumber {
                digits: false,
                dot: true,
            },
            (State::AfterClose, _) if c == '.' || c.is_ascii_digit() => {
                return Err(ExprError::syntax(position, "number directly after ')'"));
            }

            (State::ExpectOperand, '-') => State::AfterSign,
            (State::ExpectOperand, _) if is_operator(c) => {
                let reason = if prev.is_some() {
                    "operator without a left operand"
                } else {
                    "expression starts with an operator"
                };
                return Err(ExprError::syntax(position, reason));
            }
            (State::AfterSign, _) if is_operator(c) => {
                return Err(ExprError::syntax(
                    position,
                    "sign must be followed by a number or '('",
                ));
            }
            (State::InNumber { digits, .. }, _) if is_operator(c) => {
                close_number(digits, position)?;
                State::ExpectOperand
            }
            (State::AfterClose, _) if is_operator(c) => State::ExpectOperand,

            (State::InNumber { digits, .. }, '(') => {
                close_number(digits, position)?;
                open_parens.push(position);
                State::ExpectOperand
            }
            (_, '(') => {
                open_parens.push(position);
                State::ExpectOperand
            }

            (_, ')') if open_parens.is_empty() => {
                return Err(ExprError::UnmatchedParenthesis { position, found: ')' });
            }
            (State::ExpectOperand, ')') if prev == Some('(') => {
                return Err(ExprError::syntax(position, "empty parentheses"));
            }
            (State::ExpectOperand | State::AfterSign, ')') => {
                return Err(ExprError::syntax(position, "missing operand before ')'"));
            }
            (State::InNumber { digits, .. }, ')') => {
                close_number(digits, position)?;
                open_parens.pop();
                State::AfterClose
            }
            (State::AfterClose, ')') => {
                open_parens.pop();
                State::AfterClose
            }

            _ => return Err(ExprError::syntax(position, "unexpected character")),
        };
        prev = Some(c);
    }

    match state {
        State::InNumber { digits, .. } => close_number(digits, len)?,
        State::AfterClose => {}
        State::ExpectOperand if prev.is_none() => {
            return Err(ExprError::syntax(len, "empty expression"));
        }
        // Input ending in `(` is reported as the unclosed parenthesis below.
        State::ExpectOperand if prev == Some('(') => {}
        State::ExpectOperand | State::AfterSign => {
            return Err(ExprError::syntax(len, "operator without a right operand"));
        }
    }

    if let Some(&position) = open_parens.last() {
        return Err(ExprError::UnmatchedParenthesis {
            position,
            found: '(',
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(input: &str) -> bool {
        check_structure(input, 100).is_ok()
    }

    #[test]
    fn test_accepts_well_formed_expressions() {
        for expr in [
            "1",
            "-1",
            "1.5",
            ".5",
            "1.",
            "1 + ( 2.5 * 3 - ( 4 / 5.7 ) - 6.01 ) + 7",
            "-1+-2.1",
            "1.5/-2",
            "1*-2",
            "1(-2)",
            "2(3)",
            "(2)(3)",
            "-(-1)",
            "1--2",
            "((((1))))",
        ] {
            assert!(ok(expr), "expected '{}' to be accepted", expr);
        }
    }

    #[test]
    fn test_rejects_malformed_structure() {
        for expr in [
            "", "   ", "1++1", "(()", "*5", "5*", "()", "1+()", "(1", "1)", ")1(", "--1",
            "1---2", "-", "(-)", "1..2", "1.2.3", ".", "(2)3", "(+1)", "1-)",
        ] {
            assert!(!ok(expr), "expected '{}' to be rejected", expr);
        }
    }

    #[test]
    fn test_rejection_reasons_and_positions() {
        assert_eq!(
            check_structure("1 + x", 100),
            Err(ExprError::UnsupportedCharacter {
                position: 4,
                found: 'x'
            })
        );
        assert_eq!(
            check_structure("(1 + 2", 100),
            Err(ExprError::UnmatchedParenthesis {
                position: 0,
                found: '('
            })
        );
        assert_eq!(
            check_structure("1)", 100),
            Err(ExprError::UnmatchedParenthesis {
                position: 1,
                found: ')'
            })
        );
        assert_eq!(
            check_structure("( )", 100),
            Err(ExprError::syntax(2, "empty parentheses"))
        );
        assert_eq!(
            check_structure("5*", 100),
            Err(ExprError::syntax(2, "operator without a right operand"))
        );
        assert_eq!(
            check_structure("", 100),
            Err(ExprError::syntax(0, "empty expression"))
        );
    }

    #[test]
    fn test_trailing_open_paren_is_reported_as_unmatched() {
        assert_eq!(
            check_structure("1(", 100),
            Err(ExprError::UnmatchedParenthesis {
                position: 1,
                found: '('
            })
        );
        assert_eq!(
            check_structure("(1+( ", 100),
            Err(ExprError::UnmatchedParenthesis {
                position: 3,
                found: '('
            })
        );
        assert_eq!(
            check_structure("1+(", 100),
            Err(ExprError::UnmatchedParenthesis {
                position: 2,
                found: '('
            })
        );
        assert_eq!(
            check_structure("1+", 100),
            Err(ExprError::syntax(2, "operator without a right operand"))
        );
    }

    #[test]
    fn test_input_length_limit() {
        let long = "1+".repeat(50) + "1";
        assert_eq!(
            check_structure(&long, 100),
            Err(ExprError::InputTooLong { len: 101, max: 100 })
        );
        assert!(check_structure(&long, 101).is_ok());
    }
}
