use eqt_error::Error;
use crate::{
    parser::{
        ast::{binary::Binary, expr::{parse_primary, Expr}},
        token::op::{UnaryOp, UnaryOpKind},
        Parser,
    },
    tokenizer::TokenKind,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary expression, such as `-x`. Unary expressions can include nested expressions.
///
/// Unary expressions do not directly implement [`Parse`]; [`Unary::parse_or_lower`] parses
/// either a unary expression or the operand it would apply to.
///
/// [`Parse`]: crate::parser::Parse
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary expression.
    pub operand: Box<Expr>,

    /// The operator of the unary expression.
    pub op: UnaryOp,

    /// The region of the source code that this unary expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parse a prefix unary expression. The operand extends over every operator that binds
    /// tighter than the unary operator, so `-x^2` is parsed as `-(x^2)`.
    pub fn parse_right(input: &mut Parser) -> Result<Self, Error> {
        let op = input.try_parse::<UnaryOp>()?;
        let op_precedence = op.precedence();
        let start_span = op.span.start;
        let operand = {
            let lhs = Unary::parse_or_lower(input)?;
            Binary::parse_expr(input, lhs, op_precedence)?
        };
        let end_span = operand.span().end;
        Ok(Self {
            operand: Box::new(operand),
            op,
            span: start_span..end_span,
        })
    }

    /// Parses a unary expression, or lower precedence expressions.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        match input.peek_token().map(|token| token.kind) {
            Some(TokenKind::Sub | TokenKind::Add) => Self::parse_right(input).map(Expr::Unary),
            _ => parse_primary(input),
        }
    }
}
