//! Expression tree builder.
//!
//! Builds an [`AstExpr`] from a token slice by recursive splitting: a range is split at its
//! loosest-binding operator outside any parentheses, and both halves are built the same
//! way. Ties go to the rightmost operator so that chains of equal precedence group to the
//! left (`8-3-2` is `(8-3)-2`). Nodes are allocated in the caller's arena.

use crate::error::{ExprError, Result};
use crate::types::{AstExpr, EXP_MAX_RECURSION_DEPTH, Operator, Token};
use bumpalo::Bump;

struct TreeBuilder<'t, 'arena> {
    tokens: &'t [Token],
    arena: &'arena Bump,
    max_depth: usize,
}

impl<'t, 'arena> TreeBuilder<'t, 'arena> {
    /// Index of the `)` matching the `(` at `open`, searching no further than `end`.
    fn matching_close(&self, open: usize, end: usize) -> Option<usize> {
        let mut depth = 0usize;
        for (i, token) in self.tokens[open..=end].iter().enumerate() {
            match token {
                Token::Open => depth += 1,
                Token::Close => {
                    depth = depth.checked_sub(1)?;
                    if depth == 0 {
                        return Some(open + i);
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// True when `[start, end]` is a single parenthesized group.
    fn is_wrapped(&self, start: usize, end: usize) -> bool {
        matches!(self.tokens[start], Token::Open) && self.matching_close(start, end) == Some(end)
    }

    /// Position and operator of the split point of `[start, end]`, if any.
    fn split_point(&self, start: usize, end: usize) -> Option<(usize, Operator)> {
        let mut depth = 0isize;
        let mut best: Option<(usize, Operator)> = None;
        for i in start..=end {
            match &self.tokens[i] {
                Token::Open => depth += 1,
                Token::Close => depth -= 1,
                Token::Operator(op) if depth == 0 => {
                    let take = match best {
                        Some((_, current)) => op.precedence() <= current.precedence(),
                        None => true,
                    };
                    if take {
                        best = Some((i, *op));
                    }
                }
                _ => {}
            }
        }
        best
    }

    fn alloc(&self, node: AstExpr<'arena>) -> &'arena AstExpr<'arena> {
        self.arena.alloc(node)
    }

    fn build(&self, start: usize, end: usize, depth: usize) -> Result<&'arena AstExpr<'arena>> {
        if depth > self.max_depth {
            return Err(ExprError::RecursionLimit(depth));
        }
        if start > end {
            return Err(ExprError::syntax(start, "missing operand"));
        }

        if start == end {
            return match &self.tokens[start] {
                Token::Number(text) => Ok(self.alloc(AstExpr::Leaf(self.arena.alloc_str(text)))),
                _ => Err(ExprError::syntax(start, "expected a number")),
            };
        }

        if self.is_wrapped(start, end) {
            return self.build(start + 1, end - 1, depth + 1);
        }

        if matches!(self.tokens[start], Token::Negate) && self.is_wrapped(start + 1, end) {
            let inner = self.build(start + 1, end, depth + 1)?;
            return Ok(self.alloc(AstExpr::Negate(inner)));
        }

        match self.split_point(start, end) {
            Some((index, op)) => {
                let left_end = index
                    .checked_sub(1)
                    .ok_or_else(|| ExprError::syntax(index, "missing operand"))?;
                let left = self.build(start, left_end, depth)?;
                let right = self.build(index + 1, end, depth)?;
                Ok(self.alloc(AstExpr::Binary { op, left, right }))
            }
            None => Err(ExprError::syntax(start, "no operator joins these operands")),
        }
    }
}

/// Builds the expression tree for `tokens` inside `arena`.
///
/// Positions in errors are token indices. For validated input no error is expected; the
/// checks exist so that malformed token sequences fail cleanly instead of panicking.
pub fn parse_tokens<'arena>(
    tokens: &[Token],
    arena: &'arena Bump,
) -> Result<&'arena AstExpr<'arena>> {
    parse_tokens_with_depth(tokens, arena, EXP_MAX_RECURSION_DEPTH)
}

/// Like [`parse_tokens`] with an explicit nesting limit.
pub fn parse_tokens_with_depth<'arena>(
    tokens: &[Token],
    arena: &'arena Bump,
    max_depth: usize,
) -> Result<&'arena AstExpr<'arena>> {
    if tokens.is_empty() {
        return Err(ExprError::syntax(0, "empty expression"));
    }
    let builder = TreeBuilder {
        tokens,
        arena,
        max_depth,
    };
    builder.build(0, tokens.len() - 1, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use alloc::string::{String, ToString};

    fn tree(input: &str) -> String {
        let arena = Bump::new();
        let tokens = tokenize(input).unwrap();
        parse_tokens(&tokens, &arena).unwrap().to_string()
    }

    #[test]
    fn test_build_respects_precedence() {
        assert_eq!(tree("2+3*4"), "(2 + (3 * 4))");
        assert_eq!(tree("(2+3)*4"), "((2 + 3) * 4)");
        assert_eq!(tree("2*3+4"), "((2 * 3) + 4)");
    }

    #[test]
    fn test_build_is_left_associative() {
        assert_eq!(tree("8-3-2"), "((8 - 3) - 2)");
        assert_eq!(tree("8/4/2"), "((8 / 4) / 2)");
        assert_eq!(tree("1-2+3"), "((1 - 2) + 3)");
        assert_eq!(tree("6/3*2"), "((6 / 3) * 2)");
    }

    #[test]
    fn test_build_only_strips_matching_outer_parens() {
        assert_eq!(tree("(1)+(2)"), "(1 + 2)");
        assert_eq!(tree("((1+2))"), "(1 + 2)");
        assert_eq!(tree("(1+2)*(3-4)"), "((1 + 2) * (3 - 4))");
    }

    #[test]
    fn test_build_signed_leaves_and_negation() {
        assert_eq!(tree("-2"), "-2");
        assert_eq!(tree("1*-2"), "(1 * -2)");
        assert_eq!(tree("-(-1)"), "-(-1)");
        assert_eq!(tree("2/-(4)"), "(2 / -(4))");
        assert_eq!(tree("-(1)-(2)"), "(-(1) - 2)");
    }

    #[test]
    fn test_build_implicit_multiplication() {
        assert_eq!(tree("2(3)"), "(2 * 3)");
        assert_eq!(tree("(2)(3)(4)"), "((2 * 3) * 4)");
    }

    #[test]
    fn test_build_malformed_tokens_fail_cleanly() {
        let arena = Bump::new();
        for input in ["", "1+", "*5", "()", "1 2 +", "(1"] {
            let tokens = tokenize(input).unwrap();
            assert!(
                parse_tokens(&tokens, &arena).is_err(),
                "expected '{}' to fail",
                input
            );
        }
    }

    #[test]
    fn test_build_depth_counts_nesting_not_operators() {
        let arena = Bump::new();
        let chain = "1+".repeat(300) + "1";
        let tokens = tokenize(&chain).unwrap();
        let ast = parse_tokens_with_depth(&tokens, &arena, 0).unwrap();
        assert_eq!(ast.node_count(), 601);

        let tokens = tokenize("-(1)+(2)").unwrap();
        assert_eq!(
            parse_tokens_with_depth(&tokens, &arena, 1),
            Err(ExprError::RecursionLimit(2))
        );
        assert!(parse_tokens_with_depth(&tokens, &arena, 2).is_ok());
    }

    #[test]
    fn test_build_recursion_limit() {
        let arena = Bump::new();
        let input = "(".repeat(10) + "1" + &")".repeat(10);
        let tokens = tokenize(&input).unwrap();
        assert!(parse_tokens(&tokens, &arena).is_ok());
        assert_eq!(
            parse_tokens_with_depth(&tokens, &arena, 5),
            Err(ExprError::RecursionLimit(6))
        );
    }
}
