use eqt_error::Error;
use crate::{
    parser::{
        ast::expr::Expr,
        error::{ExpectedEof, MultipleEquals, UnclosedParenthesis, UnrecognizedCharacter},
        token::Equals,
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An equation relating two expressions, such as `2x + 3 = 7`.
///
/// The right-hand side may be omitted (as in `x^2 - 4`), in which case the equation states that
/// the left-hand side equals zero.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equation {
    /// The left-hand side of the equation.
    pub lhs: Expr,

    /// The right-hand side of the equation, if written.
    pub rhs: Option<Expr>,

    /// The region of the source code that this equation was parsed from.
    pub span: Range<usize>,
}

impl Equation {
    /// Returns the span of the equation.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

/// Checks the whole token stream for problems that are easier to report up front than in the
/// middle of parsing an expression: characters outside the grammar, and more than one `=`.
fn scan_tokens(input: &Parser) -> Result<(), Error> {
    if let Some(token) = input.tokens().iter().find(|token| token.kind == TokenKind::Symbol) {
        return Err(Error::at(
            token.span.clone(),
            UnrecognizedCharacter { lexeme: token.lexeme.to_owned() },
        ));
    }

    let equals = input.tokens()
        .iter()
        .filter(|token| token.kind == TokenKind::Equals)
        .map(|token| token.span.clone())
        .collect::<Vec<_>>();
    if equals.len() > 1 {
        return Err(Error::new(equals, MultipleEquals));
    }

    Ok(())
}

impl Parse for Equation {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        scan_tokens(input)?;

        let lhs = input.try_parse::<Expr>()?;
        let rhs = match input.peek_token().map(|token| token.kind) {
            Some(TokenKind::Equals) => {
                input.try_parse::<Equals>()?;
                Some(input.try_parse::<Expr>()?)
            },
            Some(TokenKind::CloseParen) => {
                input.skip_whitespace();
                return Err(input.error(UnclosedParenthesis { opening: false }));
            },
            Some(_) => {
                input.skip_whitespace();
                return Err(input.error(ExpectedEof));
            },
            None => None,
        };

        let end = rhs.as_ref().map_or(lhs.span().end, |rhs| rhs.span().end);
        Ok(Self {
            span: lhs.span().start..end,
            lhs,
            rhs,
        })
    }
}
