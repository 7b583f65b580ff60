//! Factoring of polynomials over the rationals.
//!
//! Factoring is deliberately limited in scope. The greatest common rational factor of all the
//! terms is always extracted, leaving a polynomial with coprime integer coefficients and a
//! positive leading coefficient. If what remains is a quadratic in a single variable with an
//! integer root, it is further split into two linear factors. Anything else is left as is, so
//! factoring never fails; at worst, it returns the normalized expression.

use crate::primitive::int;
use rug::{Integer, Rational};
use std::cmp::Ordering;
use super::{
    expr::SymExpr,
    normalize::{Factor, Polynomial, Term},
};
use tracing::trace;

/// Returns the greatest common factor of the coefficients of the polynomial, with the sign of
/// the leading coefficient. Dividing the polynomial by this factor leaves coprime integer
/// coefficients, the first of which is positive.
pub fn content(polynomial: &Polynomial) -> Rational {
    let mut numer = Integer::new();
    let mut denom = int(1);
    for term in polynomial.terms() {
        numer = numer.gcd(term.coeff.numer());
        denom = denom.lcm(term.coeff.denom());
    }

    if numer.cmp0().is_eq() {
        return Rational::from(1);
    }

    let content = Rational::from((numer, denom));
    match polynomial.terms().first() {
        Some(leading) if leading.coeff.cmp0().is_lt() => -content,
        _ => content,
    }
}

/// If the polynomial is a quadratic in a single variable with integer coefficients, returns the
/// name of the variable and the coefficients `[a, b, c]` of `ax^2 + bx + c`.
fn as_quadratic(polynomial: &Polynomial) -> Option<(&str, [Integer; 3])> {
    let mut name = None;
    let mut coeffs = [Integer::new(), Integer::new(), Integer::new()];
    for term in polynomial.terms() {
        if *term.coeff.denom() != 1 {
            return None;
        }

        let mut factors = term.factors.iter();
        let degree = match (factors.next(), factors.next()) {
            (None, _) => 0,
            (Some((Factor::Symbol(symbol), &exp)), None) if exp == 1 || exp == 2 => {
                if name.map_or(false, |name| name != symbol.as_str()) {
                    return None;
                }
                name = Some(symbol.as_str());
                exp as usize
            },
            _ => return None,
        };
        coeffs[2 - degree] = term.coeff.numer().clone();
    }

    if coeffs[0].cmp0().is_eq() {
        return None;
    }
    name.map(|name| (name, coeffs))
}

/// Searches for an integer root of `ax^2 + bx + c` among the divisors of `c` (and their
/// negations), trying at most `trial_limit` divisors.
fn integer_root(a: &Integer, b: &Integer, c: &Integer, trial_limit: u64) -> Option<Integer> {
    if c.cmp0().is_eq() {
        return Some(Integer::new());
    }

    let is_root = |r: &Integer| {
        let value = Integer::from(a * r) * r + Integer::from(b * r) + c;
        value.cmp0().is_eq()
    };

    let magnitude = c.clone().abs();
    let bound = magnitude.to_u64().map_or(trial_limit, |magnitude| magnitude.min(trial_limit));
    for d in 1..=bound {
        let d = int(d);
        if !magnitude.is_divisible(&d) {
            continue;
        }
        for r in [d.clone(), -d] {
            if is_root(&r) {
                return Some(r);
            }
        }
    }

    None
}

/// Builds the linear polynomial `ax + s`.
fn linear(name: &str, a: Integer, s: Integer) -> SymExpr {
    Polynomial::from_terms([
        Term {
            coeff: Rational::from(a),
            factors: [(Factor::Symbol(name.to_string()), 1)].into_iter().collect(),
        },
        Term::constant(Rational::from(s)),
    ]).to_expr()
}

/// Splits `ax^2 + bx + c` into two linear factors, if it has an integer root. A repeated factor
/// is written as a square.
fn factor_quadratic(name: &str, [a, b, c]: [Integer; 3], trial_limit: u64) -> Option<Vec<SymExpr>> {
    let r = integer_root(&a, &b, &c, trial_limit)?;

    // (x - r)(ax + s) = ax^2 + (s - ar)x - rs
    let s = if r.cmp0().is_eq() {
        b
    } else {
        -Integer::from(&c / &r)
    };

    if a == 1 && Integer::from(-&s) == r {
        return Some(vec![linear(name, int(1), s).pow(2)]);
    }

    // order the factors by their roots, keeping a lone variable first
    let other_root = Rational::from((Integer::from(-&s), a.clone()));
    let order = if r.cmp0().is_eq() {
        Ordering::Less
    } else {
        Rational::from(r.clone()).cmp(&other_root)
    };

    let first = linear(name, int(1), -r);
    let second = linear(name, a, s);
    match order {
        Ordering::Greater => Some(vec![second, first]),
        _ => Some(vec![first, second]),
    }
}

/// Factors the given expression. See the [module-level documentation](self) for the scope of
/// factoring.
///
/// At most `trial_limit` divisors of the constant term are tried when searching for an integer
/// root of a quadratic.
pub fn factorize(expr: &SymExpr, trial_limit: u64) -> SymExpr {
    let polynomial = Polynomial::from_expr(expr);
    if polynomial.terms().len() < 2 {
        return polynomial.to_expr();
    }

    let content = content(&polynomial);
    let primitive = polynomial.scale(&Rational::from(content.recip_ref()));
    trace!(content = %content, "extracted common factor");

    let mut factors = Vec::new();
    if content != 1 {
        factors.push(SymExpr::rational(content));
    }

    match as_quadratic(&primitive).and_then(|(name, coeffs)| factor_quadratic(name, coeffs, trial_limit)) {
        Some(linear_factors) => factors.extend(linear_factors),
        None => factors.push(primitive.to_expr()),
    }

    SymExpr::Mul(factors).downgrade()
}

#[cfg(test)]
mod tests {
    use eqt_parser::{parser::ast::Expr, Parser};
    use pretty_assertions::assert_eq;
    use super::*;
    use super::super::normalize::normalize;

    fn parse(source: &str) -> SymExpr {
        let ast = Parser::new(source).try_parse_full::<Expr>().unwrap();
        SymExpr::from_ast(ast, 64).unwrap()
    }

    fn factored(source: &str) -> String {
        factorize(&parse(source), 1_000_000).to_string()
    }

    #[test]
    fn common_integer_factor() {
        assert_eq!(factored("10a - 5"), "5(2a - 1)");
    }

    #[test]
    fn negative_leading_coefficient() {
        assert_eq!(factored("-2x - 4"), "-2(x + 2)");
    }

    #[test]
    fn rational_common_factor() {
        assert_eq!(factored("x/2 + 1/4"), "(2x + 1)/4");
    }

    #[test]
    fn quadratic_with_integer_roots() {
        assert_eq!(factored("z^2 - 2z - 8"), "(z + 2)(z - 4)");
        assert_eq!(factored("2x^2 + 3x + 1"), "(x + 1)(2x + 1)");
        assert_eq!(factored("3x^2 - 3x - 6"), "3(x + 1)(x - 2)");
    }

    #[test]
    fn quadratic_without_constant() {
        assert_eq!(factored("x^2 - 3x"), "x(x - 3)");
        assert_eq!(factored("x^2 + 3x"), "x(x + 3)");
    }

    #[test]
    fn perfect_square() {
        assert_eq!(factored("x^2 - 6x + 9"), "(x - 3)^2");
    }

    #[test]
    fn irreducible_quadratic() {
        assert_eq!(factored("x^2 + x + 1"), "x^2 + x + 1");
        assert_eq!(factored("2x^2 + 4x + 2 + 2"), "2(x^2 + 2x + 2)");
    }

    #[test]
    fn multivariate_only_extracts_content() {
        assert_eq!(factored("4x y + 6y"), "2(2x y + 3y)");
    }

    #[test]
    fn single_terms_are_left_alone() {
        assert_eq!(factored("10a"), "10a");
        assert_eq!(factored("0"), "0");
    }

    #[test]
    fn trial_limit_stops_search() {
        let expr = parse("x^2 - 10x + 21");
        assert_eq!(factorize(&expr, 1).to_string(), "x^2 - 10x + 21");
        assert_eq!(factorize(&expr, 3).to_string(), "(x - 3)(x - 7)");
    }

    #[test]
    fn expanding_reverses_factoring() {
        for source in ["z^2 - 2z - 8", "10a - 5", "6x^2 - 6", "x^2 - 6x + 9", "-x^2 + x"] {
            let expr = parse(source);
            assert_eq!(normalize(&factorize(&expr, 1_000_000)), normalize(&expr), "{}", source);
        }
    }
}
