use eqt_error::Error;
use crate::parser::{
    ast::{expr::Expr, unary::Unary},
    token::op::{BinOp, BinOpKind},
    Associativity,
    Parser,
    Precedence,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// After parsing the left-hand-side, the operator, and the right-hand-side of a potential
    /// binary expression, parse ahead to see if the right-hand-side is incomplete.
    ///
    /// If we are parsing the expression `1 + 2 * 3`, we will first parse the left-hand-side `1`,
    /// then the operator `+`, then the right-hand-side `2`. However, before we build the
    /// corresponding AST node, we should check if the operator after `2` has higher precedence
    /// than `+` (if it exists).
    ///
    /// If it does, we should parse the expression starting with `2` first, so that we get `2 * 3`
    /// as the right-hand-side to the `1 +` node. This works by calling into [`Self::parse_expr`]
    /// again, but with `rhs` (`2` in this case) as the `lhs` argument.
    ///
    /// If it does not (such as in the expression `3 * 2 + 1`), we build the AST node `3 * 2`
    /// first. Then, [`Self::parse_expr`] will pick up the `+ 1` part of the expression, and
    /// build the AST node `3 * 2 + 1`.
    ///
    /// Implicit multiplication needs no special handling here, since the tokenizer has already
    /// inserted an operator token between adjacent operands.
    fn complete_rhs(input: &mut Parser, lhs: Expr, op: BinOp, mut rhs: Expr) -> Result<Expr, Error> {
        let precedence = op.precedence();

        loop {
            // clone the input stream to emulate peeking
            let mut input_ahead = input.clone();
            let Ok(next_op) = input_ahead.try_parse::<BinOp>() else {
                break;
            };

            if next_op.precedence() > precedence
                || (next_op.precedence() == precedence && next_op.associativity() == Associativity::Right)
            {
                // this operator has a higher precedence or it is right associative, so we should
                // parse its expression starting with `rhs` first
                rhs = Self::parse_expr(input, rhs, next_op.precedence())?;
            } else {
                // this operator has lower precedence, or equal precedence and
                // left-associativity; this is in scenarios like:
                // `1 * 2 + 3` or `1 * 2 * 3`
                //
                // so just break out of the loop and let `lhs` become `1 * 2`
                // we will parse this operator on the next iteration of the outside loop
                break;
            }
        }

        let span = lhs.span().start..rhs.span().end;
        Ok(Expr::Binary(Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span,
        }))
    }

    /// After parsing the left-hand-side of a potential binary expression, parse ahead to see if
    /// there is a binary operator of at least the given precedence and a right-hand-side.
    pub fn parse_expr(input: &mut Parser, mut lhs: Expr, precedence: Precedence) -> Result<Expr, Error> {
        loop {
            let mut input_ahead = input.clone();
            match input_ahead.try_parse::<BinOp>() {
                Ok(op) if op.precedence() >= precedence => {
                    input.set_cursor(&input_ahead);
                    let rhs = Unary::parse_or_lower(input)?;
                    lhs = Self::complete_rhs(input, lhs, op, rhs)?;
                },
                _ => break,
            }
        }

        Ok(lhs)
    }
}
