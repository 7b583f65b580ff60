//! Canonicalization of expressions into a sum of terms.
//!
//! Every expression is rewritten into a sum of [`Term`]s, where each term is a rational
//! coefficient multiplied by a sorted set of factors raised to integer powers. On the way there,
//! products are distributed over sums, non-negative integer powers are expanded, and like terms
//! (terms with identical factors) are merged by adding their coefficients. Terms whose
//! coefficients cancel out are dropped; if every term cancels, the result is the constant `0`.
//!
//! The order of the terms in the result is part of the observable output, since it determines
//! how the expression is rendered. Terms are sorted by descending total degree, then
//! lexicographically by variable name (higher powers first), with constants last:
//!
//! ```
//! use eqt_compute::symbolic::{normalize, SymExpr};
//! use eqt_parser::{parser::ast::Expr, Parser};
//!
//! let ast = Parser::new("(z + 2)(z - 4)").try_parse_full::<Expr>().unwrap();
//! let expr = SymExpr::from_ast(ast, 64).unwrap();
//! assert_eq!(normalize(&expr).to_string(), "z^2 - 2z - 8");
//! ```
//!
//! Normalization is idempotent: normalizing an already normalized expression returns it
//! unchanged.

mod term;

pub use term::{cmp_terms, Factor, Factors, Polynomial, Term};

use crate::primitive::exact_sqrt;
use super::expr::SymExpr;
use tracing::trace;

impl Polynomial {
    /// Converts an expression into a polynomial in canonical form.
    pub fn from_expr(expr: &SymExpr) -> Polynomial {
        match expr {
            SymExpr::Primary(primary) => Polynomial::from(primary.clone()),
            SymExpr::Add(terms) => terms
                .iter()
                .fold(Polynomial::zero(), |acc, term| acc.add(&Polynomial::from_expr(term))),
            SymExpr::Mul(factors) => factors
                .iter()
                .fold(Polynomial::constant(1.into()), |acc, factor| acc.mul(&Polynomial::from_expr(factor))),
            SymExpr::Exp(base, exp) => Polynomial::from_expr(base).pow(*exp),
            SymExpr::Sqrt(radicand) => {
                let radicand = Polynomial::from_expr(radicand);
                match radicand.as_constant().as_ref().and_then(exact_sqrt) {
                    Some(root) => Polynomial::constant(root),
                    None => Polynomial::from_terms([
                        Term::factor(Factor::Opaque(radicand.to_expr().sqrt()), 1),
                    ]),
                }
            },
        }
    }
}

/// Normalizes the given expression into canonical form.
///
/// See the [module-level documentation](self) for more information.
pub fn normalize(expr: &SymExpr) -> SymExpr {
    let polynomial = Polynomial::from_expr(expr);
    trace!(terms = polynomial.terms().len(), "normalized expression");
    polynomial.to_expr()
}

#[cfg(test)]
mod tests {
    use eqt_parser::{parser::ast::Expr, Parser};
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use super::*;

    fn parse(source: &str) -> SymExpr {
        let ast = Parser::new(source).try_parse_full::<Expr>().unwrap();
        SymExpr::from_ast(ast, 64).unwrap()
    }

    fn normalized(source: &str) -> String {
        normalize(&parse(source)).to_string()
    }

    #[test]
    fn merge_like_terms() {
        assert_eq!(normalized("2x + 3x - 25"), "5x - 25");
    }

    #[test]
    fn cancel_to_zero() {
        assert_eq!(normalize(&parse("x - x")), SymExpr::zero());
        assert_eq!(normalized("3(a + b) - 3a - 3b"), "0");
    }

    #[test]
    fn distribute_products() {
        assert_eq!(normalized("(z + 2)(z - 4)"), "z^2 - 2z - 8");
        assert_eq!(normalized("2(x + 1)^2"), "2x^2 + 4x + 2");
    }

    #[test]
    fn degree_then_name_ordering() {
        assert_eq!(normalized("3 + y + x + x y + x^2"), "x^2 + x y + x + y + 3");
        assert_eq!(normalized("b^2 + a b + a^2"), "a^2 + a b + b^2");
    }

    #[test]
    fn constants_come_after_negative_powers() {
        assert_eq!(normalized("1 + 1/x"), "1/x + 1");
        assert_eq!(normalized("2 + x + x^-2"), "x + 1/x^2 + 2");
    }

    #[test]
    fn variables_are_case_sensitive() {
        assert_eq!(normalized("x + X"), "X + x");
    }

    #[test]
    fn rational_coefficients() {
        assert_eq!(normalized("x/2 + x/3"), "5x/6");
        assert_eq!(normalized("0.5 + 0.25"), "3/4");
    }

    #[test]
    fn invert_monomials() {
        assert_eq!(normalized("1/(2x)"), "1/(2x)");
        assert_eq!(normalized("x^3 / x"), "x^2");
        assert_eq!(normalized("x / x"), "1");
    }

    #[test]
    fn reciprocal_of_sum_is_opaque() {
        assert_eq!(normalized("1/(x + 1) + 2/(1 + x)"), "3/(x + 1)");
    }

    #[test]
    fn perfect_square_root() {
        assert_eq!(normalize(&SymExpr::rational(16).sqrt()), SymExpr::rational(4));
        assert_eq!(normalize(&SymExpr::rational(5).sqrt()).to_string(), "sqrt(5)");
    }

    #[test]
    fn idempotent() {
        let sources = [
            "2x + 3x - 25",
            "(z+2)(z-4)",
            "1/(x + 1) - x/(2y)",
            "x^2 y - y x^2 + (a - b)^3",
            "-(x - 1)(x + 1)",
        ];
        for source in sources {
            let once = normalize(&parse(source));
            assert_eq!(normalize(&once), once, "{}", source);
        }
    }

    #[test]
    fn idempotent_random() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let names = ["x", "y", "z"];
        for _ in 0..200 {
            let terms = (0..rng.gen_range(1..6))
                .map(|_| {
                    let coeff = SymExpr::rational(rng.gen_range(-9..=9i32));
                    let var = SymExpr::symbol(names[rng.gen_range(0..names.len())]);
                    let power = var.pow(rng.gen_range(0..4i64));
                    let shift = SymExpr::symbol(names[rng.gen_range(0..names.len())])
                        + SymExpr::rational(rng.gen_range(-3..=3i32));
                    coeff * power * shift
                })
                .collect::<Vec<_>>();
            let expr = SymExpr::Add(terms);
            let once = normalize(&expr);
            assert_eq!(normalize(&once), once);
        }
    }
}
