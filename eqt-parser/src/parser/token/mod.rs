pub mod op;

use eqt_error::Error;
use crate::{
    parser::{error::UnexpectedToken, Parser, Parse},
    tokenizer::TokenKind,
};
use std::ops::Range;

/// Generates a unit struct for each token kind, as well as a simple [`Parse`] implementation for
/// each token kind. This enables the parser to use and request token kinds as a type.
macro_rules! token_kinds {
    ($($name:ident)*) => {
        $(
            #[derive(Clone, Debug, PartialEq, Eq)]
            pub struct $name {
                pub lexeme: String,
                pub span: Range<usize>,
            }

            impl Parse for $name {
                fn parse(input: &mut Parser) -> Result<Self, Error> {
                    let token = input.next_token()?;

                    if token.kind == TokenKind::$name {
                        Ok(Self {
                            lexeme: token.lexeme.to_owned(),
                            span: token.span,
                        })
                    } else {
                        Err(Error::at(token.span, UnexpectedToken {
                            expected: &[TokenKind::$name],
                            found: token.kind,
                        }))
                    }
                }
            }
        )*
    };
}

token_kinds!(
    Equals
    OpenParen
    CloseParen
    Name
    Sqrt
);
