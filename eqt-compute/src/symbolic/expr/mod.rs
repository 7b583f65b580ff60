//! A representation of algebraic expressions that is easier to manipulate than an AST.
//!
//! The [`Expr`](eqt_parser::parser::ast::expr::Expr) type from `eqt_parser` is a recursive `enum`
//! that mirrors the source text. It's convenient for parsing and error reporting, but not so much
//! for algebraic manipulation.
//!
//! This module defines [`SymExpr`], which drops span information and **flattens** the tree: the
//! expression `x + (y + z)` becomes a single [`SymExpr::Add`] node with three terms. Subtraction
//! is stored as the addition of a negated term, and division by a constant as multiplication by
//! its exact reciprocal, so only the operations below are needed.
//!
//! # Equality
//!
//! The [`PartialEq`] and [`Eq`] implementations for [`SymExpr`] are **structural**: two
//! expressions that represent the same value but are written differently, such as `x + 1` and
//! `1 + x`, do not compare equal. Normalize both sides first (see [`normalize`]) to compare
//! values.
//!
//! [`normalize`]: crate::symbolic::normalize()

mod iter;

use eqt_error::Error;
use eqt_parser::parser::{
    ast::{expr::Expr as AstExpr, literal::Literal},
    error::{DivisionByZero, ExponentTooLarge, InvalidNumber, NegativeRadicand, NonIntegerExponent},
    token::op::{BinOpKind, UnaryOpKind},
};
use crate::primitive::{rational_from_decimal, to_i64};
use iter::ExprIter;
use rug::Rational;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub};
use super::normalize::normalize;

/// A single number or variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Primary {
    /// An exact rational number, such as `2`, `-7` or `5/2`.
    Rational(Rational),

    /// A variable, such as `x` or `y`. Names are case-sensitive.
    Symbol(String),
}

/// An algebraic expression.
///
/// Expressions are immutable values built bottom-up; every transformation produces a new tree.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SymExpr {
    /// A single number or variable.
    Primary(Primary),

    /// Multiple terms added together.
    Add(Vec<SymExpr>),

    /// Multiple factors multiplied together.
    Mul(Vec<SymExpr>),

    /// An expression raised to an integer power. Negative powers represent division.
    Exp(Box<SymExpr>, i64),

    /// The principal square root of an expression. This only appears in the roots of quadratic
    /// equations whose discriminant is not a perfect square.
    Sqrt(Box<SymExpr>),
}

impl SymExpr {
    /// Creates a rational constant.
    pub fn rational(value: impl Into<Rational>) -> Self {
        Self::Primary(Primary::Rational(value.into()))
    }

    /// Creates a variable with the given name.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Primary(Primary::Symbol(name.into()))
    }

    /// The constant zero.
    pub fn zero() -> Self {
        Self::rational(0)
    }

    /// The constant one.
    pub fn one() -> Self {
        Self::rational(1)
    }

    /// If the expression is a [`Primary::Rational`], returns a reference to the contained number.
    pub fn as_rational(&self) -> Option<&Rational> {
        match self {
            Self::Primary(Primary::Rational(value)) => Some(value),
            _ => None,
        }
    }

    /// If the expression is a [`Primary::Symbol`], returns a reference to the contained name.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Primary(Primary::Symbol(name)) => Some(name),
            _ => None,
        }
    }

    /// Returns true if the expression is the constant zero.
    pub fn is_zero(&self) -> bool {
        self.as_rational().map_or(false, |value| value.cmp0().is_eq())
    }

    /// Returns true if the expression is the constant one.
    pub fn is_one(&self) -> bool {
        self.as_rational().map_or(false, |value| *value == 1)
    }

    /// Returns true if the variable with the given name appears anywhere in the expression.
    pub fn contains_symbol(&self, name: &str) -> bool {
        self.post_order_iter().any(|expr| expr.as_symbol() == Some(name))
    }

    /// Returns every distinct variable name in the expression, in order of first appearance.
    pub fn symbols(&self) -> Vec<&str> {
        let mut names = Vec::new();
        for name in self.post_order_iter().filter_map(SymExpr::as_symbol) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Replaces every occurrence of the given variable with a copy of `value`. No simplification
    /// is done.
    pub fn substitute(&self, name: &str, value: &SymExpr) -> SymExpr {
        match self {
            Self::Primary(Primary::Symbol(sym)) if sym == name => value.clone(),
            Self::Primary(_) => self.clone(),
            Self::Add(terms) => Self::Add(terms.iter().map(|term| term.substitute(name, value)).collect()),
            Self::Mul(factors) => Self::Mul(factors.iter().map(|factor| factor.substitute(name, value)).collect()),
            Self::Exp(base, exp) => Self::Exp(Box::new(base.substitute(name, value)), *exp),
            Self::Sqrt(radicand) => Self::Sqrt(Box::new(radicand.substitute(name, value))),
        }
    }

    /// Trivially downgrades the expression into a simpler form.
    ///
    /// Some operations may result in an [`SymExpr::Add`] with zero / one term, or an
    /// [`SymExpr::Mul`] with zero / one factor. This function checks for these cases and
    /// simplifies the expression into the single term / factor, or the constant 0 or 1.
    pub(crate) fn downgrade(self) -> Self {
        match self {
            Self::Add(mut terms) => {
                if terms.is_empty() {
                    Self::zero()
                } else if terms.len() == 1 {
                    terms.remove(0)
                } else {
                    Self::Add(terms)
                }
            },
            Self::Mul(mut factors) => {
                if factors.is_empty() {
                    Self::one()
                } else if factors.len() == 1 {
                    factors.remove(0)
                } else {
                    Self::Mul(factors)
                }
            },
            _ => self,
        }
    }

    /// Returns the square root of this expression. No simplification is done.
    pub fn sqrt(self) -> Self {
        Self::Sqrt(Box::new(self))
    }

    /// Raises this expression to the given power. No simplification is done.
    pub fn pow(self, exp: i64) -> Self {
        Self::Exp(Box::new(self), exp)
    }

    /// Returns the reciprocal of this expression. A constant is inverted exactly; anything else
    /// is raised to the power of `-1`.
    pub fn recip(self) -> Self {
        match self.as_rational() {
            Some(value) if value.cmp0().is_ne() => Self::rational(value.clone().recip()),
            _ => self.pow(-1),
        }
    }

    /// Returns the largest power that any variable or constant in the expression is raised to,
    /// multiplying through nested powers. Products are not summed, so `x^2 x^3` gives `3`.
    fn power_bound(&self) -> u64 {
        match self {
            Self::Primary(_) => 1,
            Self::Add(children) | Self::Mul(children) => children
                .iter()
                .map(Self::power_bound)
                .max()
                .unwrap_or(1),
            Self::Exp(base, exp) => base.power_bound().saturating_mul(exp.unsigned_abs()),
            Self::Sqrt(radicand) => radicand.power_bound(),
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Converts a parsed expression into a [`SymExpr`].
    ///
    /// Number literals are converted to exact rationals. Exponents must evaluate to constant
    /// integers, and the effective power they produce (counting powers nested inside the base, so
    /// `(x^8)^9` is a power of `72`) must be no larger in magnitude than `max_exponent`. Divisors
    /// must not evaluate to zero. Errors point at the offending part of the source.
    pub fn from_ast(expr: AstExpr, max_exponent: u32) -> Result<Self, Error> {
        match expr {
            AstExpr::Literal(Literal::Number(num)) => rational_from_decimal(&num.value)
                .map(Self::rational)
                .ok_or_else(|| Error::at(num.span, InvalidNumber { literal: num.value })),
            AstExpr::Literal(Literal::Symbol(sym)) => Ok(Self::symbol(sym.name)),
            AstExpr::Paren(paren) => Self::from_ast(*paren.expr, max_exponent),
            AstExpr::Call(call) => {
                let arg_span = call.arg.span();
                let radicand = Self::from_ast(*call.arg.expr, max_exponent)?;
                let negative = normalize(&radicand)
                    .as_rational()
                    .map_or(false, |value| value.cmp0().is_lt());
                if negative {
                    return Err(Error::at(arg_span, NegativeRadicand));
                }
                Ok(radicand.sqrt())
            },
            AstExpr::Unary(unary) => {
                let operand = Self::from_ast(*unary.operand, max_exponent)?;
                match unary.op.kind {
                    UnaryOpKind::Neg => Ok(-operand),
                    UnaryOpKind::Pos => Ok(operand),
                }
            },
            AstExpr::Binary(bin) => {
                let rhs_span = bin.rhs.span();
                let lhs = Self::from_ast(*bin.lhs, max_exponent)?;
                let rhs = Self::from_ast(*bin.rhs, max_exponent)?;
                match bin.op.kind {
                    BinOpKind::Add => Ok(lhs + rhs),
                    BinOpKind::Sub => Ok(lhs - rhs),
                    BinOpKind::Mul => Ok(lhs * rhs),
                    BinOpKind::Div => {
                        if normalize(&rhs).is_zero() {
                            return Err(Error::at(rhs_span, DivisionByZero));
                        }
                        Ok(lhs * rhs.recip())
                    },
                    BinOpKind::Exp => {
                        let exp = normalize(&rhs)
                            .as_rational()
                            .and_then(to_i64)
                            .ok_or_else(|| Error::at(rhs_span.clone(), NonIntegerExponent))?;
                        let effective = lhs.power_bound().saturating_mul(exp.unsigned_abs());
                        if effective > u64::from(max_exponent) {
                            return Err(Error::at(rhs_span, ExponentTooLarge { max: max_exponent }));
                        }
                        if exp < 0 && normalize(&lhs).is_zero() {
                            return Err(Error::at(rhs_span, DivisionByZero));
                        }
                        Ok(lhs.pow(exp))
                    },
                }
            },
        }
    }
}

impl From<Rational> for SymExpr {
    fn from(value: Rational) -> Self {
        Self::rational(value)
    }
}

/// Adds two [`SymExpr`]s together. If either operand is a [`SymExpr::Add`], its terms are
/// flattened into the result.
impl Add for SymExpr {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign for SymExpr {
    fn add_assign(&mut self, rhs: Self) {
        let lhs = std::mem::replace(self, Self::Add(Vec::new()));
        let mut terms = match lhs {
            Self::Add(terms) => terms,
            other => vec![other],
        };
        match rhs {
            Self::Add(rhs_terms) => terms.extend(rhs_terms),
            other => terms.push(other),
        }
        *self = Self::Add(terms).downgrade();
    }
}

impl Sub for SymExpr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

/// Multiplies two [`SymExpr`]s together. If either operand is a [`SymExpr::Mul`], its factors
/// are flattened into the result.
impl Mul for SymExpr {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self *= rhs;
        self
    }
}

impl MulAssign for SymExpr {
    fn mul_assign(&mut self, rhs: Self) {
        let lhs = std::mem::replace(self, Self::Mul(Vec::new()));
        let mut factors = match lhs {
            Self::Mul(factors) => factors,
            other => vec![other],
        };
        match rhs {
            Self::Mul(rhs_factors) => factors.extend(rhs_factors),
            other => factors.push(other),
        }
        *self = Self::Mul(factors).downgrade();
    }
}

/// Negates the expression. Constants are negated directly, as is the leading constant
/// coefficient of a product; anything else is multiplied by `-1`.
impl Neg for SymExpr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Primary(Primary::Rational(value)) => Self::rational(-value),
            Self::Mul(mut factors) => match factors.first_mut() {
                Some(Self::Primary(Primary::Rational(coeff))) => {
                    *coeff = -coeff.clone();
                    if *coeff == 1 {
                        factors.remove(0);
                    }
                    Self::Mul(factors).downgrade()
                },
                _ => {
                    factors.insert(0, Self::rational(-1));
                    Self::Mul(factors)
                },
            },
            other => Self::Mul(vec![Self::rational(-1), other]),
        }
    }
}
