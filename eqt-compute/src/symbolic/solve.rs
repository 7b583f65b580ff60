//! Solving equations of degree one or two for a single variable.
//!
//! The equation is rearranged into `lhs - rhs = 0` and normalized, then its terms are grouped by
//! the power of the variable they contain. Any other variables are carried along as symbolic
//! coefficients, so `a x + b = 0` can be solved for `x` to give `-b/a`.

use eqt_error::Error;
use crate::primitive::{exact_sqrt, split_square};
use rug::{Integer, Rational};
use std::collections::BTreeMap;
use super::{
    equation::Equation,
    error::{NoRealSolution, NotPolynomial, UnsupportedDegree, VariableNotFound},
    expr::SymExpr,
    normalize::{Factor, Polynomial, Term},
};
use tracing::trace;

/// Groups the terms of the polynomial by the power of the given variable, returning the
/// coefficient of each power from `0` up to the degree of the polynomial in that variable. The
/// coefficient of the highest power is never zero. A polynomial that does not depend on the
/// variable results in an empty list.
///
/// Polynomials with a degree above `max_degree` in the variable are rejected before any grouping
/// is done.
pub fn coefficients(polynomial: &Polynomial, var: &str, max_degree: usize) -> Result<Vec<Polynomial>, Error> {
    let symbol = Factor::Symbol(var.to_string());
    let mut groups: BTreeMap<u64, Vec<Term>> = BTreeMap::new();
    for term in polynomial.terms() {
        let in_opaque = term.factors.keys().any(|factor| match factor {
            Factor::Opaque(expr) => expr.contains_symbol(var),
            Factor::Symbol(_) => false,
        });
        let exp = term.exponent_of(var);
        if in_opaque || exp < 0 {
            return Err(Error::new(Vec::new(), NotPolynomial { name: var.to_string() }));
        }

        let mut coeff = term.clone();
        coeff.factors.remove(&symbol);
        groups.entry(exp.unsigned_abs()).or_default().push(coeff);
    }

    let groups = groups
        .into_iter()
        .map(|(power, terms)| (power, Polynomial::from_terms(terms)))
        .filter(|(_, coeff)| !coeff.is_zero())
        .collect::<BTreeMap<_, _>>();
    let degree = groups.keys().next_back().copied().unwrap_or(0);
    if degree > max_degree as u64 {
        return Err(Error::new(Vec::new(), UnsupportedDegree {
            name: var.to_string(),
            degree,
        }));
    }

    if groups.is_empty() {
        return Ok(Vec::new());
    }
    Ok((0..=degree)
        .map(|power| groups.get(&power).cloned().unwrap_or_default())
        .collect())
}

/// Divides an expression by a polynomial, inverting a constant divisor exactly.
fn divide(numer: SymExpr, denom: &Polynomial) -> SymExpr {
    match denom.as_constant() {
        Some(value) => numer * SymExpr::rational(value.recip()),
        None => numer * denom.to_expr().pow(-1),
    }
}

/// The root of `c1 x + c0 = 0`.
fn solve_linear(c0: &Polynomial, c1: &Polynomial) -> SymExpr {
    c0.neg().mul(&c1.pow(-1)).to_expr()
}

/// Square factors of the discriminant are moved out of the root by trial division up to this
/// bound.
const RADICAL_TRIAL_LIMIT: u16 = 10_000;

/// Multiplies the rational coefficients by the least common multiple of their denominators and
/// makes the leading one positive, giving integer coefficients with the same roots.
fn clear_denominators(coeffs: [Rational; 3]) -> [Integer; 3] {
    let mut lcm = Integer::from(1);
    for coeff in &coeffs {
        lcm = lcm.lcm(coeff.denom());
    }

    let sign = if coeffs[2].cmp0().is_lt() { -1i32 } else { 1i32 };
    let scale = Rational::from(lcm * sign);
    coeffs.map(|coeff| (coeff * &scale).into_numer_denom().0)
}

/// The roots of `a x^2 + b x + c = 0` with constant coefficients.
fn solve_constant_quadratic(var: &str, coeffs: [Rational; 3]) -> Result<Vec<SymExpr>, Error> {
    let [c, b, a] = clear_denominators(coeffs);
    let disc = Integer::from(&b * &b) - Integer::from(&a * &c) * 4u32;
    trace!(discriminant = %disc, "solving quadratic");

    if disc.cmp0().is_lt() {
        return Err(Error::new(Vec::new(), NoRealSolution { name: var.to_string() }));
    }

    let two_a = a * 2u32;
    let neg_b = -b;
    if disc.is_perfect_square() {
        let root = disc.sqrt();
        let lower = Rational::from((Integer::from(&neg_b - &root), two_a.clone()));
        let upper = Rational::from((neg_b + root, two_a));
        return Ok(vec![SymExpr::rational(lower), SymExpr::rational(upper)]);
    }

    // (-b ± k sqrt(m)) / 2a, with any factor common to `b`, `k` and `2a` cancelled
    let (k, m) = split_square(&disc, RADICAL_TRIAL_LIMIT);
    let common = Integer::from(neg_b.gcd_ref(&k)).gcd(&two_a);
    let coeff = Rational::from((k, common.clone()));
    let root = SymExpr::rational(m).sqrt();
    let radical = if coeff == 1 { root } else { SymExpr::rational(coeff) * root };
    let neg_b = neg_b / &common;
    let denom = two_a / &common;
    let recip = SymExpr::rational(Rational::from((Integer::from(1), denom.clone())));

    let (plus, minus) = if neg_b.cmp0().is_eq() {
        (radical.clone(), -radical)
    } else {
        let neg_b = SymExpr::rational(neg_b);
        (
            SymExpr::Add(vec![neg_b.clone(), radical.clone()]),
            SymExpr::Add(vec![neg_b, -radical]),
        )
    };
    if denom == 1 {
        return Ok(vec![plus, minus]);
    }
    Ok(vec![plus * recip.clone(), minus * recip])
}

/// The roots of `a x^2 + b x + c = 0` where some coefficient depends on other variables.
fn solve_symbolic_quadratic(
    var: &str,
    c: &Polynomial,
    b: &Polynomial,
    a: &Polynomial,
) -> Result<Vec<SymExpr>, Error> {
    let four_ac = a.mul(c).scale(&Rational::from(4));
    let disc = b.mul(b).add(&four_ac.neg());
    let two_a = a.scale(&Rational::from(2));
    let neg_b = b.neg();

    if let Some(value) = disc.as_constant() {
        if value.cmp0().is_lt() {
            return Err(Error::new(Vec::new(), NoRealSolution { name: var.to_string() }));
        }
        if let Some(root) = exact_sqrt(&value) {
            let root = Polynomial::constant(root);
            let inv_two_a = two_a.pow(-1);
            return Ok(vec![
                neg_b.add(&root).mul(&inv_two_a).to_expr(),
                neg_b.add(&root.neg()).mul(&inv_two_a).to_expr(),
            ]);
        }
    }

    let sqrt = disc.to_expr().sqrt();
    let (plus, minus) = if neg_b.is_zero() {
        (sqrt.clone(), -sqrt)
    } else {
        (
            SymExpr::Add(vec![neg_b.to_expr(), sqrt.clone()]),
            SymExpr::Add(vec![neg_b.to_expr(), -sqrt]),
        )
    };
    Ok(vec![divide(plus, &two_a), divide(minus, &two_a)])
}

/// Solves the equation for the given variable, returning its roots.
///
/// A linear equation has exactly one root. A quadratic equation has two roots, which may be
/// equal: if its coefficients are constants and its discriminant is a perfect square, the roots
/// are rational and sorted in ascending order, otherwise they are written as
/// `(-b ± sqrt(b^2 - 4ac)) / 2a` with the `+` branch first.
///
/// Solving fails if the variable does not occur in the equation (after simplification), if the
/// equation has a degree higher than two in the variable, if the variable appears in a
/// denominator or under a root, or if the discriminant of a quadratic is a negative constant.
pub fn solve_for(equation: &Equation, var: &str) -> Result<Vec<SymExpr>, Error> {
    let polynomial = Polynomial::from_expr(&equation.difference());
    let coeffs = coefficients(&polynomial, var, 2)?;
    trace!(var, degree = coeffs.len().saturating_sub(1), "solving equation");

    match coeffs.as_slice() {
        [c0, c1] => Ok(vec![solve_linear(c0, c1)]),
        [c0, c1, c2] => match (c0.as_constant(), c1.as_constant(), c2.as_constant()) {
            (Some(c), Some(b), Some(a)) => solve_constant_quadratic(var, [c, b, a]),
            _ => solve_symbolic_quadratic(var, c0, c1, c2),
        },
        _ => Err(Error::new(Vec::new(), VariableNotFound { name: var.to_string() })),
    }
}
