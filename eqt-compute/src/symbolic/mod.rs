//! Algebraic manipulation of expressions and equations.
//!
//! # Expression representation
//!
//! Algebraic expressions in this module are represented as a tree of [`SymExpr`] nodes. It's
//! similar to the [`eqt_parser::parser::ast::Expr`] nodes produced by [`eqt_parser`], with the
//! main difference being that [`SymExpr`] nodes **flatten** out the tree structure: `x + (y + z)`
//! is a single [`SymExpr::Add`] node with three children. Number literals become exact rationals,
//! and division becomes multiplication by a reciprocal.
//!
//! Conversion from the parsed tree is lossy, as [`SymExpr`] does not store span information.
//! Errors found during conversion (such as a non-integer exponent) point at the source instead.
//!
//! ```
//! use eqt_compute::symbolic::expr::{Primary, SymExpr};
//! use eqt_parser::parser::{ast::Expr, Parser};
//!
//! let ast = Parser::new("x + (y + z)").try_parse_full::<Expr>().unwrap();
//! let expr = SymExpr::from_ast(ast, 64).unwrap();
//! assert_eq!(expr, SymExpr::Add(vec![
//!     SymExpr::Primary(Primary::Symbol("x".to_string())),
//!     SymExpr::Primary(Primary::Symbol("y".to_string())),
//!     SymExpr::Primary(Primary::Symbol("z".to_string())),
//! ]));
//! ```
//!
//! # Canonical form
//!
//! The [`normalize()`] function distributes products, expands powers and merges like terms,
//! producing a canonical sum of terms. The [`factorize()`] function goes the other way for the
//! polynomials it understands, and [`solve_for()`] finds the roots of linear and quadratic
//! equations in one variable.

pub mod equation;
pub mod error;
pub mod expr;
pub mod factor;
pub mod fmt;
pub mod normalize;
pub mod solve;
pub mod step_collector;

pub use equation::Equation;
pub use expr::SymExpr;
pub use factor::factorize;
pub use fmt::render;
pub use normalize::normalize;
pub use solve::solve_for;
pub use step_collector::StepCollector;
