use eqt_error::Error;
use crate::{
    parser::{
        ast::{binary::Binary, call::Call, literal::{Literal, LitNum, LitSym}, paren::Paren, unary::Unary},
        error::{ExpectedExpr, UnclosedParenthesis, UnexpectedEof, UnrecognizedCharacter},
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any kind of expression that can appear on one side of an equation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value, such as `2.5` or `x`.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A square root, such as `sqrt(5)`.
    Call(Call),

    /// A unary operation, such as `-x`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Call(call) => call.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }
}

/// Parses a single operand: a literal, a square root, or a parenthesized expression.
pub(crate) fn parse_primary(input: &mut Parser) -> Result<Expr, Error> {
    let Some(token) = input.peek_token().cloned() else {
        return Err(Error::at(input.eof_span(), UnexpectedEof));
    };

    match token.kind {
        TokenKind::Int | TokenKind::Float => {
            input.try_parse::<LitNum>().map(|num| Expr::Literal(Literal::Number(num)))
        },
        TokenKind::Name => {
            input.try_parse::<LitSym>().map(|name| Expr::Literal(Literal::Symbol(name)))
        },
        TokenKind::Sqrt => input.try_parse::<Call>().map(Expr::Call),
        TokenKind::OpenParen => input.try_parse::<Paren>().map(Expr::Paren),
        TokenKind::CloseParen => {
            Err(Error::at(token.span, UnclosedParenthesis { opening: false }))
        },
        TokenKind::Symbol => Err(Error::at(
            token.span.clone(),
            UnrecognizedCharacter { lexeme: token.lexeme.to_owned() },
        )),
        _ => Err(Error::at(token.span.clone(), ExpectedExpr { expected: "an expression" })),
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = Unary::parse_or_lower(input)?;
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}
