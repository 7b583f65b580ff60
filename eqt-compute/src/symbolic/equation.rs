use eqt_error::Error;
use eqt_parser::parser::{ast::equation::Equation as AstEquation, fmt::Latex};
use std::fmt;
use super::expr::SymExpr;

/// An equation relating two expressions. An equation written without a right-hand side states
/// that the left-hand side equals zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    /// The left-hand side of the equation.
    pub lhs: SymExpr,

    /// The right-hand side of the equation.
    pub rhs: SymExpr,
}

impl Equation {
    /// Creates a new equation.
    pub fn new(lhs: SymExpr, rhs: SymExpr) -> Self {
        Self { lhs, rhs }
    }

    /// Creates the equation `expr = 0`.
    pub fn equals_zero(expr: SymExpr) -> Self {
        Self::new(expr, SymExpr::zero())
    }

    /// Converts a parsed equation. See [`SymExpr::from_ast`] for the rules applied to each side.
    pub fn from_ast(equation: AstEquation, max_exponent: u32) -> Result<Self, Error> {
        let lhs = SymExpr::from_ast(equation.lhs, max_exponent)?;
        let rhs = match equation.rhs {
            Some(rhs) => SymExpr::from_ast(rhs, max_exponent)?,
            None => SymExpr::zero(),
        };
        Ok(Self { lhs, rhs })
    }

    /// Returns `lhs - rhs` without simplifying it. The right-hand side is omitted entirely when it
    /// is the constant zero.
    pub fn difference(&self) -> SymExpr {
        if self.rhs.is_zero() {
            self.lhs.clone()
        } else {
            self.lhs.clone() - self.rhs.clone()
        }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}

impl Latex for Equation {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.lhs.fmt_latex(f)?;
        write!(f, " = ")?;
        self.rhs.fmt_latex(f)
    }
}

#[cfg(test)]
mod tests {
    use eqt_parser::parse_equation;
    use pretty_assertions::assert_eq;
    use super::*;

    fn equation(source: &str) -> Equation {
        Equation::from_ast(parse_equation(source).unwrap(), 64).unwrap()
    }

    #[test]
    fn missing_right_side_is_zero() {
        let eq = equation("x^2 - 4");
        assert_eq!(eq.rhs, SymExpr::zero());
        assert_eq!(eq.to_string(), "x^2 - 4 = 0");
    }

    #[test]
    fn difference_of_sides() {
        assert_eq!(equation("2x + 3x = 25").difference().to_string(), "2x + 3x - 25");
        assert_eq!(equation("4y - 8 = 2y").difference().to_string(), "4y - 8 - 2y");
        assert_eq!(equation("x = y + 1").difference().to_string(), "x - (y + 1)");
    }

    #[test]
    fn difference_omits_zero() {
        assert_eq!(equation("(z+2)(z-4) = 0").difference().to_string(), "(z + 2)(z - 4)");
    }

    #[test]
    fn latex_equation() {
        assert_eq!(equation("x/2 = 3").as_display().to_string(), "\\frac{x}{2} = 3");
    }
}
