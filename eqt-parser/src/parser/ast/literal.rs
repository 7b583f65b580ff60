use eqt_error::Error;
use crate::{
    parser::{error::ExpectedExpr, Parse, Parser},
    tokenizer::TokenKind,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number literal, written in decimal. The digits are kept exactly as written, so that no
/// precision is lost before the value is converted to an exact rational.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The value of the number literal as written in the source.
    pub value: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Int | TokenKind::Float => Ok(Self {
                value: token.lexeme.to_owned(),
                span: token.span,
            }),
            _ => Err(Error::at(token.span, ExpectedExpr { expected: "a number" })),
        }
    }
}

/// A symbol / identifier literal, naming a variable. Names are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitSym {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Name => Ok(Self {
                name: token.lexeme.to_owned(),
                span: token.span,
            }),
            _ => Err(Error::at(token.span, ExpectedExpr { expected: "a variable name" })),
        }
    }
}

/// Represents a literal value in an equation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    Number(LitNum),
    Symbol(LitSym),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Number(num) => num.span.clone(),
            Literal::Symbol(name) => name.span.clone(),
        }
    }
}
