use eqt_error::Error;
use crate::parser::{ast::paren::Paren, token::Sqrt, Parse, Parser};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A call to the square root function, such as `sqrt(5)`. This is the only function that can be
/// written in an equation; it is what roots of quadratic equations are rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The argument, along with the parentheses surrounding it.
    pub arg: Paren,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,
}

impl Call {
    /// Returns the span of the function call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<Sqrt>()?;
        let arg = input.try_parse::<Paren>()?;
        let span = name.span.start..arg.span.end;
        Ok(Self { arg, span })
    }
}
