//! Tokenizer and parser for algebraic equations such as `2x + 3x = 25` or `(z+2)(z-4)`.
//!
//! Parsing happens in two stages. The [`tokenizer`] splits the source into tokens and inserts
//! implicit multiplication tokens between adjacent operands (`2x` becomes `2 * x`). The
//! [`parser`] then builds an abstract syntax tree out of the tokens, keeping track of the
//! region of source code every node was parsed from, so that errors can point at it.
//!
//! ```
//! use eqt_parser::parser::{ast::Equation, Parser};
//!
//! let equation = Parser::new("4y - 8 = 2y").try_parse_full::<Equation>().unwrap();
//! assert!(equation.rhs.is_some());
//! ```

pub mod parser;
pub mod tokenizer;

pub use parser::{ast::Equation, Parser};

/// Parses the given source text into an [`Equation`].
pub fn parse_equation(source: &str) -> Result<Equation, eqt_error::Error> {
    Parser::new(source).try_parse_full::<Equation>()
}
