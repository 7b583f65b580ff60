//! Rendering of expressions as plain text and as LaTeX.
//!
//! The plain form is meant to be read by people and parsed again: coefficients are written next
//! to what they multiply (`2x`, `5(2a - 1)`), products of variables are separated by a space
//! (`x y`, since `xy` would be a single variable), and negative terms of a sum are written with
//! subtraction (`x - 1` rather than `x + -1`). Rational coefficients are split into a numerator
//! and denominator (`5x/6`, `1/(x + 1)`).

use eqt_parser::parser::fmt::Latex;
use rug::{Integer, Rational};
use std::{borrow::Cow, fmt::{self, Display, Formatter}};
use super::expr::{Primary, SymExpr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Plain,
    Latex,
}

/// One factor of a product, after the rational coefficients have been folded together.
enum Item<'a> {
    Number(Integer),
    Expr(Cow<'a, SymExpr>),
}

impl Item<'_> {
    /// Returns true if the item renders starting with an opening parenthesis.
    fn opens_group(&self) -> bool {
        match self {
            Item::Number(_) => false,
            Item::Expr(expr) => match expr.as_ref() {
                SymExpr::Add(_) => true,
                SymExpr::Exp(base, _) => !is_atom(base),
                _ => false,
            },
        }
    }
}

/// Returns true if the expression can be the base of a power without parentheses.
fn is_atom(expr: &SymExpr) -> bool {
    match expr {
        SymExpr::Primary(Primary::Symbol(_)) | SymExpr::Sqrt(_) => true,
        SymExpr::Primary(Primary::Rational(value)) => *value.denom() == 1 && value.cmp0().is_ge(),
        _ => false,
    }
}

/// Splits a term of a sum into its sign and magnitude, so that the sign can be written as the
/// operator between terms.
fn split_sign(expr: &SymExpr) -> (bool, Cow<'_, SymExpr>) {
    match expr {
        SymExpr::Primary(Primary::Rational(value)) if value.cmp0().is_lt() => {
            (true, Cow::Owned(SymExpr::rational(Rational::from(-value))))
        },
        SymExpr::Mul(factors) => match factors.split_first() {
            Some((SymExpr::Primary(Primary::Rational(coeff)), rest)) if coeff.cmp0().is_lt() => {
                let magnitude = Rational::from(-coeff);
                let mut factors = Vec::with_capacity(factors.len());
                if magnitude != 1 {
                    factors.push(SymExpr::rational(magnitude));
                }
                factors.extend(rest.iter().cloned());
                (true, Cow::Owned(SymExpr::Mul(factors).downgrade()))
            },
            _ => (false, Cow::Borrowed(expr)),
        },
        _ => (false, Cow::Borrowed(expr)),
    }
}

fn write_integer(f: &mut Formatter, value: &Integer) -> fmt::Result {
    write!(f, "{}", value)
}

fn write_rational(f: &mut Formatter, value: &Rational, style: Style) -> fmt::Result {
    if *value.denom() == 1 {
        return write_integer(f, value.numer());
    }

    match style {
        Style::Plain => write!(f, "{}/{}", value.numer(), value.denom()),
        Style::Latex => {
            if value.cmp0().is_lt() {
                write!(f, "-")?;
            }
            write!(f, "\\frac{{{}}}{{{}}}", value.numer().clone().abs(), value.denom())
        },
    }
}

fn write_sum(f: &mut Formatter, terms: &[SymExpr], style: Style) -> fmt::Result {
    for (i, term) in terms.iter().enumerate() {
        let (negative, magnitude) = split_sign(term);
        match (i, negative) {
            (0, true) => write!(f, "-")?,
            (0, false) => (),
            (_, true) => write!(f, " - ")?,
            (_, false) => write!(f, " + ")?,
        }

        if let SymExpr::Add(_) = magnitude.as_ref() {
            write!(f, "(")?;
            write_expr(f, &magnitude, style)?;
            write!(f, ")")?;
        } else {
            write_expr(f, &magnitude, style)?;
        }
    }
    Ok(())
}

fn write_power(f: &mut Formatter, base: &SymExpr, exp: i64, style: Style) -> fmt::Result {
    if is_atom(base) {
        write_expr(f, base, style)?;
    } else {
        write!(f, "(")?;
        write_expr(f, base, style)?;
        write!(f, ")")?;
    }

    match style {
        Style::Plain => write!(f, "^{}", exp),
        Style::Latex => write!(f, "^{{{}}}", exp),
    }
}

fn write_items(f: &mut Formatter, items: &[Item], style: Style) -> fmt::Result {
    let mut prev: Option<&Item> = None;
    for item in items {
        if let Some(prev) = prev {
            match (prev, item) {
                (Item::Number(_), Item::Number(_)) => match style {
                    Style::Plain => write!(f, " * ")?,
                    Style::Latex => write!(f, " \\cdot ")?,
                },
                (Item::Number(_), _) => (),
                (_, next) if next.opens_group() => (),
                _ => write!(f, " ")?,
            }
        }

        match item {
            Item::Number(value) => write_integer(f, value)?,
            Item::Expr(expr) => {
                if let SymExpr::Add(_) = expr.as_ref() {
                    write!(f, "(")?;
                    write_expr(f, expr, style)?;
                    write!(f, ")")?;
                } else {
                    write_expr(f, expr, style)?;
                }
            },
        }
        prev = Some(item);
    }
    Ok(())
}

/// Writes a product, folding its rational factors into a single coefficient and moving factors
/// with negative exponents into a denominator.
fn write_product(f: &mut Formatter, factors: &[SymExpr], style: Style) -> fmt::Result {
    let mut coeff = Rational::from(1);
    let mut numer = Vec::new();
    let mut denom = Vec::new();
    for factor in factors {
        match factor {
            SymExpr::Primary(Primary::Rational(value)) => coeff *= value,
            SymExpr::Exp(base, exp) if *exp < 0 => denom.push(if *exp == -1 {
                Cow::Borrowed(&**base)
            } else {
                Cow::Owned(base.as_ref().clone().pow(-exp))
            }),
            other => numer.push(Cow::Borrowed(other)),
        }
    }

    if coeff.cmp0().is_eq() {
        return write!(f, "0");
    }
    if coeff.cmp0().is_lt() {
        write!(f, "-")?;
        coeff = -coeff;
    }

    let (coeff_numer, coeff_denom) = coeff.into_numer_denom();
    let mut top = Vec::with_capacity(numer.len() + 1);
    if coeff_numer != 1 || numer.is_empty() {
        top.push(Item::Number(coeff_numer));
    }
    top.extend(numer.into_iter().map(Item::Expr));

    let mut bottom = Vec::with_capacity(denom.len() + 1);
    if coeff_denom != 1 {
        bottom.push(Item::Number(coeff_denom));
    }
    bottom.extend(denom.into_iter().map(Item::Expr));

    if bottom.is_empty() {
        return write_items(f, &top, style);
    }

    match style {
        Style::Plain => {
            write_items(f, &top, style)?;
            write!(f, "/")?;
            let group = bottom.len() > 1
                || matches!(bottom.as_slice(), [Item::Expr(expr)] if matches!(expr.as_ref(), SymExpr::Mul(_)));
            if group {
                write!(f, "(")?;
                write_items(f, &bottom, style)?;
                write!(f, ")")
            } else {
                write_items(f, &bottom, style)
            }
        },
        Style::Latex => {
            write!(f, "\\frac{{")?;
            write_items(f, &top, style)?;
            write!(f, "}}{{")?;
            write_items(f, &bottom, style)?;
            write!(f, "}}")
        },
    }
}

fn write_expr(f: &mut Formatter, expr: &SymExpr, style: Style) -> fmt::Result {
    match expr {
        SymExpr::Primary(Primary::Rational(value)) => write_rational(f, value, style),
        SymExpr::Primary(Primary::Symbol(name)) => write!(f, "{}", name),
        SymExpr::Add(terms) => write_sum(f, terms, style),
        SymExpr::Mul(factors) => write_product(f, factors, style),
        SymExpr::Exp(base, exp) if *exp >= 0 => write_power(f, base, *exp, style),
        SymExpr::Exp(..) => write_product(f, std::slice::from_ref(expr), style),
        SymExpr::Sqrt(radicand) => match style {
            Style::Plain => {
                write!(f, "sqrt(")?;
                write_expr(f, radicand, style)?;
                write!(f, ")")
            },
            Style::Latex => {
                write!(f, "\\sqrt{{")?;
                write_expr(f, radicand, style)?;
                write!(f, "}}")
            },
        },
    }
}

impl Display for Primary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Primary::Rational(value) => write_rational(f, value, Style::Plain),
            Primary::Symbol(name) => write!(f, "{}", name),
        }
    }
}

impl Display for SymExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_expr(f, self, Style::Plain)
    }
}

impl Latex for SymExpr {
    fn fmt_latex(&self, f: &mut Formatter) -> fmt::Result {
        write_expr(f, self, Style::Latex)
    }
}

/// Renders an expression (or equation) in plain notation.
pub fn render<T: Display + ?Sized>(value: &T) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use crate::primitive::rat;
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> SymExpr {
        SymExpr::symbol("x")
    }

    fn num(n: i32) -> SymExpr {
        SymExpr::rational(n)
    }

    #[test]
    fn coefficient_adjacency() {
        assert_eq!(render(&SymExpr::Mul(vec![num(5), x()])), "5x");
        assert_eq!(render(&SymExpr::Mul(vec![num(3), x().pow(2)])), "3x^2");
    }

    #[test]
    fn variables_are_spaced() {
        assert_eq!(render(&SymExpr::Mul(vec![x(), SymExpr::symbol("y")])), "x y");
    }

    #[test]
    fn subtraction_in_sums() {
        let expr = SymExpr::Add(vec![
            SymExpr::Mul(vec![num(5), x()]),
            num(-25),
        ]);
        assert_eq!(render(&expr), "5x - 25");

        let expr = SymExpr::Add(vec![
            SymExpr::Mul(vec![num(-1), x().pow(2)]),
            SymExpr::Mul(vec![num(-1), x()]),
            num(1),
        ]);
        assert_eq!(render(&expr), "-x^2 - x + 1");
    }

    #[test]
    fn grouped_factors() {
        let expr = SymExpr::Mul(vec![
            num(5),
            SymExpr::Add(vec![SymExpr::Mul(vec![num(2), SymExpr::symbol("a")]), num(-1)]),
        ]);
        assert_eq!(render(&expr), "5(2a - 1)");

        let z = || SymExpr::symbol("z");
        let expr = SymExpr::Mul(vec![
            SymExpr::Add(vec![z(), num(2)]),
            SymExpr::Add(vec![z(), num(-4)]),
        ]);
        assert_eq!(render(&expr), "(z + 2)(z - 4)");
        assert_eq!(render(&SymExpr::Add(vec![x(), num(-3)]).pow(2)), "(x - 3)^2");
    }

    #[test]
    fn negated_group() {
        let expr = SymExpr::Mul(vec![num(-1), SymExpr::Add(vec![x(), num(1)])]);
        assert_eq!(render(&expr), "-(x + 1)");
    }

    #[test]
    fn fractions() {
        assert_eq!(render(&SymExpr::rational(rat((-1, 2)))), "-1/2");
        assert_eq!(render(&SymExpr::Mul(vec![SymExpr::rational(rat((5, 6))), x()])), "5x/6");
        assert_eq!(render(&SymExpr::Mul(vec![SymExpr::rational(rat((1, 2))), x().pow(-1)])), "1/(2x)");
        assert_eq!(render(&SymExpr::Add(vec![x(), num(1)]).pow(-1)), "1/(x + 1)");
    }

    #[test]
    fn radical() {
        let expr = SymExpr::Mul(vec![
            SymExpr::Add(vec![num(-3), num(5).sqrt()]),
            SymExpr::rational(rat((1, 2))),
        ]);
        assert_eq!(render(&expr), "(-3 + sqrt(5))/2");
    }

    #[test]
    fn latex() {
        let expr = SymExpr::Add(vec![
            SymExpr::Mul(vec![SymExpr::rational(rat((3, 2))), x().pow(2)]),
            num(5).sqrt(),
        ]);
        assert_eq!(expr.as_display().to_string(), "\\frac{3x^{2}}{2} + \\sqrt{5}");
        assert_eq!(SymExpr::rational(rat((-1, 4))).as_display().to_string(), "-\\frac{1}{4}");
    }
}
