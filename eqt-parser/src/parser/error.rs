use ariadne::Fmt;
use eqt_attrs::ErrorKind;
use eqt_error::EXPR;
use crate::tokenizer::TokenKind;

/// Expected to see a certain kind of expression here.
///
/// The `expected` field should also contain the word "a" or "an" at the beginning to make the
/// error grammatically correct.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expected {}", self.expected),
    labels = [format!("I expected to see {} here", self.expected)],
    help = "every operator needs an operand on both sides",
)]
pub struct ExpectedExpr {
    /// The kind of expression that was expected.
    pub expected: &'static str,
}

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", self.expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", self.found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A character that is not part of the equation grammar.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unrecognized character `{}`", self.lexeme),
    labels = ["this character"],
    help = format!("equations may only contain numbers, variable names, parentheses, and the operators {}", "+ - * / ^ =".fg(EXPR)),
)]
pub struct UnrecognizedCharacter {
    /// The character that was found.
    pub lexeme: String,
}

/// The parenthesis at the given location is unclosed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis"],
    help = if self.opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parenthesis.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// An equation can only relate two sides.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "too many `=` signs in equation",
    labels = std::iter::once("first `=` here".to_string())
        .chain((1..spans.len()).map(|_| "another `=` here".to_string())),
    help = "an equation must have exactly one left side and at most one right side",
)]
pub struct MultipleEquals;

/// A numeric literal could not be read as an exact number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number `{}`", self.literal),
    labels = ["this number"],
)]
pub struct InvalidNumber {
    /// The literal as written in the source.
    pub literal: String,
}

/// The exponent of a power must be a constant integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent must be a constant integer",
    labels = ["this exponent"],
    help = format!("only integer powers like {} or {} are supported", "x^2".fg(EXPR), "x^-1".fg(EXPR)),
)]
pub struct NonIntegerExponent;

/// The exponent of a power exceeds the configured limit.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("exponent is larger than the limit of {}", self.max),
    labels = ["this exponent"],
)]
pub struct ExponentTooLarge {
    /// The largest accepted exponent magnitude.
    pub max: u32,
}

/// The right-hand side of a division is the literal zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this divisor is zero"],
)]
pub struct DivisionByZero;

/// The argument of a square root is a negative constant.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "square root of a negative number",
    labels = ["this argument is negative"],
    help = "only real numbers are supported",
)]
pub struct NegativeRadicand;
