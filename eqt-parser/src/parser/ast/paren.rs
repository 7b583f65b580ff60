use eqt_error::Error;
use crate::{
    parser::{
        ast::expr::Expr,
        error::{EmptyParenthesis, UnclosedParenthesis},
        token::{CloseParen, OpenParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parenthesized expression. A [`Paren`] can only contain a single expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Paren {
    /// The inner expression.
    pub expr: Box<Expr>,

    /// The region of the source code that this [`Paren`] was parsed from.
    pub span: Range<usize>,
}

impl Paren {
    /// Returns the span of the parenthesized expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Paren {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open_paren = input.try_parse::<OpenParen>()?;

        if input.peek_token().map(|token| token.kind) == Some(TokenKind::CloseParen) {
            let close_paren = input.try_parse::<CloseParen>()?;
            return Err(Error::at(
                open_paren.span.start..close_paren.span.end,
                EmptyParenthesis,
            ));
        }

        let expr = input.try_parse::<Expr>()?;
        let close_paren = input.try_parse::<CloseParen>()
            .map_err(|_| Error::at(open_paren.span.clone(), UnclosedParenthesis { opening: true }))?;

        Ok(Self {
            expr: Box::new(expr),
            span: open_paren.span.start..close_paren.span.end,
        })
    }
}
