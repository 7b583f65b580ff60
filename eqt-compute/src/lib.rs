//! Symbolic manipulation of algebraic equations with exact rational arithmetic.
//!
//! The [`symbolic`] module holds the expression model and the algorithms that operate on it:
//! normalization into a canonical sum of terms, factoring, solving for a variable, and rendering.
//! The [`transform`] module builds on it to apply a named transformation to the source text of
//! an equation and produce a step-by-step derivation.

pub mod primitive;
pub mod symbolic;
pub mod transform;
