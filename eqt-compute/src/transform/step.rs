//! The kinds of transformation the engine can apply, and the traces they produce.

use eqt_error::Error;
use std::fmt;
use super::error::{MissingTargetVariable, UnknownTransformation};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A transformation to apply to an equation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum TransformKind {
    /// Move every term to the left-hand side and combine like terms.
    Simplify,

    /// Move every term to the left-hand side and distribute every product over sums.
    Expand,

    /// Move every term to the left-hand side and factor the result.
    Factorize,

    /// Solve the equation for the target variable.
    IsolateVariable {
        /// The variable to solve for.
        target: String,
    },
}

impl TransformKind {
    /// The names of all transformations, as accepted by [`TransformKind::from_parts`].
    pub const NAMES: [&'static str; 4] = ["simplify", "factorize", "expand", "isolate_variable"];

    /// Creates a transformation from its name, and the target variable if it requires one.
    ///
    /// The target variable is ignored for transformations that do not need it.
    pub fn from_parts(name: &str, target: Option<&str>) -> Result<Self, Error> {
        match (name, target) {
            ("simplify", _) => Ok(Self::Simplify),
            ("expand", _) => Ok(Self::Expand),
            ("factorize", _) => Ok(Self::Factorize),
            ("isolate_variable", Some(target)) => Ok(Self::IsolateVariable {
                target: target.to_string(),
            }),
            ("isolate_variable", None) => Err(Error::new(Vec::new(), MissingTargetVariable)),
            (name, _) => Err(Error::new(Vec::new(), UnknownTransformation {
                name: name.to_string(),
            })),
        }
    }

    /// Returns the name of the transformation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Simplify => "simplify",
            Self::Expand => "expand",
            Self::Factorize => "factorize",
            Self::IsolateVariable { .. } => "isolate_variable",
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IsolateVariable { target } => write!(f, "{} {}", self.name(), target),
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// A single step of a transformation, in the order a person would read the derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransformationStep {
    /// A short name for the step.
    pub label: String,

    /// The equation after the step was applied, rendered in the configured notation.
    pub formula: String,

    /// What the step does.
    pub explanation: String,
}

impl TransformationStep {
    /// Creates a new step.
    pub fn new(
        label: impl Into<String>,
        formula: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            formula: formula.into(),
            explanation: explanation.into(),
        }
    }
}

/// The outcome of transforming one equation.
///
/// A failed transformation is still a [`TransformationResult`]: it has a single step labelled
/// `Error` describing the failure, and its final result is the string `Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransformationResult {
    /// The identifier of the equation, as given by the caller.
    pub id: String,

    /// The source text of the equation.
    pub original_text: String,

    /// The name of the transformation that was applied.
    pub kind: String,

    /// The steps of the transformation.
    pub steps: Vec<TransformationStep>,

    /// The transformed equation, in plain notation.
    pub final_result: String,

    /// A summary of the transformation.
    pub explanation: String,
}

impl TransformationResult {
    /// Creates the result of a transformation that failed with the given message.
    pub fn error(
        id: impl Into<String>,
        original_text: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let kind = kind.into();
        let explanation = format!("Failed to perform {} transformation", kind);
        Self {
            id: id.into(),
            original_text: original_text.into(),
            kind,
            steps: vec![TransformationStep::new("Error", message, "Failed to process equation")],
            final_result: "Error".to_string(),
            explanation,
        }
    }

    /// Returns true if the transformation failed.
    pub fn is_error(&self) -> bool {
        self.final_result == "Error"
    }
}
