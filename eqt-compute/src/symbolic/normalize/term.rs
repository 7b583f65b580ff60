//! Terms and polynomials in canonical form.

use crate::symbolic::expr::{Primary, SymExpr};
use rug::Rational;
use std::{cmp::Ordering, collections::BTreeMap};

/// A factor of a [`Term`]: a variable, or a sub-expression that cannot be broken down further
/// into a product of variables (such as `x + 1` in `1/(x + 1)`, or `sqrt(5)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Factor {
    /// A variable.
    Symbol(String),

    /// A sub-expression treated as a single, indivisible factor. The sub-expression is always in
    /// canonical form.
    Opaque(SymExpr),
}

impl Factor {
    /// Converts the factor raised to the given power back into an expression.
    pub fn to_expr(&self, exp: i64) -> SymExpr {
        let base = match self {
            Factor::Symbol(name) => SymExpr::symbol(name.clone()),
            Factor::Opaque(expr) => expr.clone(),
        };
        if exp == 1 {
            base
        } else {
            base.pow(exp)
        }
    }
}

/// Variables sort before opaque factors. Variables are sorted by name, and opaque factors by
/// their rendered form.
impl Ord for Factor {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Factor::Symbol(lhs), Factor::Symbol(rhs)) => lhs.cmp(rhs),
            (Factor::Symbol(_), Factor::Opaque(_)) => Ordering::Less,
            (Factor::Opaque(_), Factor::Symbol(_)) => Ordering::Greater,
            (Factor::Opaque(lhs), Factor::Opaque(rhs)) => lhs.to_string()
                .cmp(&rhs.to_string())
                .then_with(|| format!("{:?}", lhs).cmp(&format!("{:?}", rhs))),
        }
    }
}

impl PartialOrd for Factor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The factors of a term, mapped to their (never zero) exponents.
pub type Factors = BTreeMap<Factor, i64>;

/// A rational coefficient multiplied by zero or more factors raised to integer powers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// The coefficient of the term.
    pub coeff: Rational,

    /// The factors of the term.
    pub factors: Factors,
}

impl Term {
    /// Creates a constant term.
    pub fn constant(coeff: Rational) -> Self {
        Self { coeff, factors: Factors::new() }
    }

    /// Creates a term consisting of a single factor with coefficient one.
    pub fn factor(factor: Factor, exp: i64) -> Self {
        Self {
            coeff: Rational::from(1),
            factors: Factors::from([(factor, exp)]),
        }
    }

    /// Returns true if the term has no factors.
    pub fn is_constant(&self) -> bool {
        self.factors.is_empty()
    }

    /// Returns the total degree of the term: the sum of the exponents of its variables.
    pub fn degree(&self) -> i64 {
        self.factors
            .iter()
            .filter(|(factor, _)| matches!(factor, Factor::Symbol(_)))
            .map(|(_, exp)| exp)
            .sum()
    }

    /// Returns the exponent of the given variable in this term, or zero if it does not appear.
    pub fn exponent_of(&self, name: &str) -> i64 {
        self.factors
            .get(&Factor::Symbol(name.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Multiplies two terms together, adding the exponents of shared factors.
    pub fn mul(&self, other: &Term) -> Term {
        let mut factors = self.factors.clone();
        for (factor, exp) in &other.factors {
            let entry = factors.entry(factor.clone()).or_insert(0);
            *entry += exp;
            if *entry == 0 {
                factors.remove(factor);
            }
        }

        Term {
            coeff: Rational::from(&self.coeff * &other.coeff),
            factors,
        }
    }

    /// Converts the term back into an expression: the coefficient (omitted if it is one and
    /// there are other factors) followed by the factors in sorted order.
    pub fn to_expr(&self) -> SymExpr {
        let mut factors = Vec::with_capacity(self.factors.len() + 1);
        if self.coeff != 1 || self.factors.is_empty() {
            factors.push(SymExpr::rational(self.coeff.clone()));
        }
        factors.extend(self.factors.iter().map(|(factor, exp)| factor.to_expr(*exp)));
        SymExpr::Mul(factors).downgrade()
    }
}

/// Compares the factor lists of two terms of the same degree: factor by factor, the smaller
/// factor (by name) comes first, and for the same factor, the higher exponent comes first.
fn cmp_factors(lhs: &Factors, rhs: &Factors) -> Ordering {
    for ((lhs_factor, lhs_exp), (rhs_factor, rhs_exp)) in lhs.iter().zip(rhs.iter()) {
        let ordering = lhs_factor.cmp(rhs_factor).then_with(|| rhs_exp.cmp(lhs_exp));
        if ordering.is_ne() {
            return ordering;
        }
    }
    lhs.len().cmp(&rhs.len())
}

/// The canonical ordering of terms: constants last, and otherwise descending by total degree,
/// then by the variables in the term. Terms with only negative powers (such as `1/x`) still come
/// before the constant.
pub fn cmp_terms(lhs: &Term, rhs: &Term) -> Ordering {
    lhs.is_constant()
        .cmp(&rhs.is_constant())
        .then_with(|| rhs.degree().cmp(&lhs.degree()))
        .then_with(|| cmp_factors(&lhs.factors, &rhs.factors))
}

/// A sum of [`Term`]s in canonical form: like terms are merged, terms with a zero coefficient are
/// removed, and the terms are sorted by [`cmp_terms`]. The zero polynomial has no terms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// Creates a polynomial from the given terms, putting them in canonical form.
    pub fn from_terms(terms: impl IntoIterator<Item = Term>) -> Self {
        let mut merged: BTreeMap<Factors, Rational> = BTreeMap::new();
        for term in terms {
            *merged.entry(term.factors).or_default() += term.coeff;
        }

        let mut terms = merged
            .into_iter()
            .filter(|(_, coeff)| coeff.cmp0().is_ne())
            .map(|(factors, coeff)| Term { coeff, factors })
            .collect::<Vec<_>>();
        terms.sort_by(cmp_terms);
        Self { terms }
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self::default()
    }

    /// A constant polynomial.
    pub fn constant(value: Rational) -> Self {
        Self::from_terms([Term::constant(value)])
    }

    /// Returns the terms of the polynomial in canonical order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns true if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// If the polynomial is constant, returns its value.
    pub fn as_constant(&self) -> Option<Rational> {
        match self.terms.as_slice() {
            [] => Some(Rational::new()),
            [term] if term.is_constant() => Some(term.coeff.clone()),
            _ => None,
        }
    }

    /// Returns the sum of two polynomials.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        Self::from_terms(self.terms.iter().chain(other.terms.iter()).cloned())
    }

    /// Returns the product of two polynomials, distributing every term of one over every term of
    /// the other.
    pub fn mul(&self, other: &Polynomial) -> Polynomial {
        Self::from_terms(self.terms.iter().flat_map(|lhs| other.terms.iter().map(move |rhs| lhs.mul(rhs))))
    }

    /// Returns the polynomial multiplied by a constant.
    pub fn scale(&self, factor: &Rational) -> Polynomial {
        Self::from_terms(self.terms.iter().map(|term| Term {
            coeff: Rational::from(&term.coeff * factor),
            factors: term.factors.clone(),
        }))
    }

    /// Returns the negation of the polynomial.
    pub fn neg(&self) -> Polynomial {
        self.scale(&Rational::from(-1))
    }

    /// Raises the polynomial to an integer power.
    ///
    /// Non-negative powers are expanded fully. A negative power of a single term inverts the
    /// term; a negative power of anything else (a sum, or zero) is kept as an opaque factor.
    pub fn pow(&self, exp: i64) -> Polynomial {
        if exp >= 0 {
            let mut result = Self::constant(Rational::from(1));
            for _ in 0..exp {
                result = result.mul(self);
            }
            return result;
        }

        match self.terms.as_slice() {
            [term] => {
                let power = exp.unsigned_abs();
                let mut coeff = Rational::from(1);
                for _ in 0..power {
                    coeff *= &term.coeff;
                }
                Self::from_terms([Term {
                    coeff: coeff.recip(),
                    factors: term.factors
                        .iter()
                        .map(|(factor, factor_exp)| (factor.clone(), factor_exp * exp))
                        .collect(),
                }])
            },
            _ => Self::from_terms([Term::factor(Factor::Opaque(self.to_expr()), exp)]),
        }
    }

    /// Converts the polynomial back into an expression.
    pub fn to_expr(&self) -> SymExpr {
        match self.terms.as_slice() {
            [] => SymExpr::zero(),
            terms => SymExpr::Add(terms.iter().map(Term::to_expr).collect()).downgrade(),
        }
    }
}

impl From<Primary> for Polynomial {
    fn from(primary: Primary) -> Self {
        match primary {
            Primary::Rational(value) => Self::constant(value),
            Primary::Symbol(name) => Self::from_terms([Term::factor(Factor::Symbol(name), 1)]),
        }
    }
}
