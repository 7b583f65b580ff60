//! Errors that can occur while solving an equation for a variable.
//!
//! These errors are raised after parsing has succeeded, so they carry no source spans of their
//! own; reports built from them point at the start of the equation.

use ariadne::Fmt;
use eqt_attrs::ErrorKind;
use eqt_error::EXPR;

/// The variable to solve for does not appear in the equation, or every occurrence cancels out.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("variable `{}` not found in equation", self.name),
    labels = ["this equation"],
    help = format!("after simplifying, the equation does not depend on {}", self.name.as_str().fg(EXPR)),
)]
pub struct VariableNotFound {
    /// The name of the variable.
    pub name: String,
}

/// The equation has a degree higher than two in the variable to solve for.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot solve degree {} equation for `{}`", self.degree, self.name),
    labels = ["this equation"],
    help = "only linear and quadratic equations can be solved",
)]
pub struct UnsupportedDegree {
    /// The name of the variable.
    pub name: String,

    /// The degree of the equation in the variable.
    pub degree: u64,
}

/// The variable to solve for appears in a position that is not a non-negative integer power,
/// such as in a denominator or under a square root.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("equation is not a polynomial in `{}`", self.name),
    labels = ["this equation"],
    help = format!("{} must not appear in a denominator", self.name.as_str().fg(EXPR)),
)]
pub struct NotPolynomial {
    /// The name of the variable.
    pub name: String,
}

/// A quadratic equation with a negative discriminant.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("equation has no real solution for `{}`", self.name),
    labels = ["this equation"],
    help = "the discriminant of this quadratic equation is negative",
)]
pub struct NoRealSolution {
    /// The name of the variable.
    pub name: String,
}
