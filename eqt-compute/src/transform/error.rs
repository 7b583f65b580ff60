//! Errors produced by the transformation engine.

use ariadne::Fmt;
use eqt_attrs::ErrorKind;
use eqt_error::{Error, EXPR};
use std::fmt;
use super::step::TransformKind;

/// The transformation name is not one of the known transformations.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown transformation `{}`", self.name),
    labels = [""],
    help = format!("expected one of: {}", TransformKind::NAMES.map(|name| name.fg(EXPR).to_string()).join(", ")),
)]
pub struct UnknownTransformation {
    /// The name that was given.
    pub name: String,
}

/// The `isolate_variable` transformation was requested without a variable to isolate.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing target variable for `isolate_variable`",
    labels = [""],
    help = "provide the variable to solve for",
)]
pub struct MissingTargetVariable;

/// An error that occurred while transforming an equation.
#[derive(Debug)]
pub enum TransformError {
    /// The equation could not be parsed.
    Parse(Error),

    /// The equation could not be solved for the given variable.
    Solve {
        /// The variable to solve for.
        variable: String,

        /// The reason solving failed.
        error: Error,
    },
}

impl TransformError {
    /// Returns the underlying error, which can be used to build a report.
    pub fn inner(&self) -> &Error {
        match self {
            Self::Parse(error) | Self::Solve { error, .. } => error,
        }
    }

    /// Consumes the error, returning the underlying error.
    pub fn into_inner(self) -> Error {
        match self {
            Self::Parse(error) | Self::Solve { error, .. } => error,
        }
    }
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "Error parsing equation: {}", error),
            Self::Solve { variable, error } => write!(f, "Unable to solve for {}: {}", variable, error),
        }
    }
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner())
    }
}
