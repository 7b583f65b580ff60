//! The transformation engine: applies one of a fixed set of transformations to an equation, and
//! records the derivation as a sequence of human-readable steps.
//!
//! ```
//! use eqt_compute::transform::{Engine, EngineConfig, TransformKind};
//!
//! let engine = Engine::new(EngineConfig::default());
//! let result = engine.transform("eq1", "2x + 3x = 25", &TransformKind::Simplify);
//! assert_eq!(result.final_result, "5x - 25 = 0");
//! assert_eq!(result.steps.len(), 2);
//! ```
//!
//! Transformations never fail past [`Engine::transform`]: an equation that cannot be parsed or
//! solved produces a [`TransformationResult`] describing the error instead, so that a batch of
//! equations can be processed without one bad equation stopping the rest. Use
//! [`Engine::try_transform`] to receive the error itself.

pub mod config;
pub mod error;
pub mod step;

pub use config::{EngineConfig, EngineConfigBuilder, Notation};
pub use error::TransformError;
pub use step::{TransformKind, TransformationResult, TransformationStep};

use eqt_error::Error;
use eqt_parser::{parse_equation, parser::fmt::Latex};
use crate::symbolic::{factorize, normalize, solve_for, Equation, StepCollector, SymExpr};
use std::fmt::Display;
use tracing::{debug, warn};

/// Applies transformations to equations.
///
/// The engine holds no state other than its configuration, so it can be shared freely between
/// threads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Creates an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of this engine.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parses the source text into an [`Equation`].
    pub fn parse(&self, text: &str) -> Result<Equation, Error> {
        Equation::from_ast(parse_equation(text)?, self.config.max_exponent)
    }

    /// Renders the value in the configured notation.
    pub fn render<T: Display + Latex + ?Sized>(&self, value: &T) -> String {
        match self.config.notation {
            Notation::Plain => value.to_string(),
            Notation::Latex => value.as_display().to_string(),
        }
    }

    /// Moves every term to the left-hand side of the equation and combines like terms.
    pub fn simplify(
        &self,
        equation: &Equation,
        steps: &mut impl StepCollector<TransformationStep>,
    ) -> Equation {
        let diff = Equation::equals_zero(equation.difference());
        steps.push(TransformationStep::new(
            "Identify like terms",
            self.render(&diff),
            "Group terms with same variables",
        ));

        let simplified = Equation::equals_zero(normalize(&diff.lhs));
        steps.push(TransformationStep::new(
            "Combine like terms",
            self.render(&simplified),
            "Add coefficients of like terms",
        ));
        simplified
    }

    /// Moves every term to the left-hand side of the equation and distributes every product
    /// over sums, combining the like terms this produces.
    pub fn expand(
        &self,
        equation: &Equation,
        steps: &mut impl StepCollector<TransformationStep>,
    ) -> Equation {
        let diff = Equation::equals_zero(equation.difference());
        steps.push(TransformationStep::new(
            "Apply distributive property",
            self.render(&diff),
            "Multiply terms in parentheses",
        ));

        let expanded = Equation::equals_zero(normalize(&diff.lhs));
        steps.push(TransformationStep::new(
            "Combine like terms",
            self.render(&expanded),
            "Combine similar terms after expansion",
        ));
        expanded
    }

    /// Moves every term to the left-hand side of the equation, then factors it. See
    /// [`factorize`] for the extent of factoring.
    pub fn factorize(
        &self,
        equation: &Equation,
        steps: &mut impl StepCollector<TransformationStep>,
    ) -> Equation {
        let arranged = Equation::equals_zero(normalize(&equation.difference()));
        steps.push(TransformationStep::new(
            "Arrange terms",
            self.render(&arranged),
            "Arrange terms in standard form",
        ));

        let factored = Equation::equals_zero(factorize(&arranged.lhs, self.config.factor_trial_limit));
        steps.push(TransformationStep::new(
            "Factor the expression",
            self.render(&factored),
            "Extract common factors and identify patterns",
        ));
        factored
    }

    /// Solves the equation for the target variable, returning `target = root`. If the equation
    /// has more than one root, the first one returned by [`solve_for`] is used.
    pub fn isolate_variable(
        &self,
        equation: &Equation,
        target: &str,
        steps: &mut impl StepCollector<TransformationStep>,
    ) -> Result<Equation, Error> {
        let roots = solve_for(equation, target)?;
        let root = roots.into_iter().next().unwrap_or_else(SymExpr::zero);

        steps.push(TransformationStep::new(
            "Original equation",
            self.render(equation),
            "Start with the equation",
        ));

        let isolated = Equation::new(SymExpr::symbol(target), root);
        steps.push(TransformationStep::new(
            "Solve for variable",
            self.render(&isolated),
            format!("Isolate {}", target),
        ));
        Ok(isolated)
    }

    /// Parses the source text and applies the given transformation to it.
    pub fn try_transform(
        &self,
        id: &str,
        text: &str,
        kind: &TransformKind,
    ) -> Result<TransformationResult, TransformError> {
        debug!(id, kind = kind.name(), "transforming equation");
        let equation = self.parse(text).map_err(TransformError::Parse)?;

        let mut steps = Vec::new();
        let (result, explanation) = match kind {
            TransformKind::Simplify => (
                self.simplify(&equation, &mut steps),
                "Successfully simplified the expression".to_string(),
            ),
            TransformKind::Expand => (
                self.expand(&equation, &mut steps),
                "Successfully expanded the expression".to_string(),
            ),
            TransformKind::Factorize => (
                self.factorize(&equation, &mut steps),
                "Successfully factored the expression".to_string(),
            ),
            TransformKind::IsolateVariable { target } => (
                self.isolate_variable(&equation, target, &mut steps)
                    .map_err(|error| TransformError::Solve { variable: target.clone(), error })?,
                format!("Successfully solved for {}", target),
            ),
        };

        Ok(TransformationResult {
            id: id.to_string(),
            original_text: text.to_string(),
            kind: kind.name().to_string(),
            steps,
            final_result: result.to_string(),
            explanation,
        })
    }

    /// Parses the source text and applies the given transformation to it. If parsing or solving
    /// fails, the returned result describes the error.
    pub fn transform(&self, id: &str, text: &str, kind: &TransformKind) -> TransformationResult {
        self.try_transform(id, text, kind).unwrap_or_else(|err| {
            warn!(id, kind = kind.name(), error = %err, "transformation failed");
            TransformationResult::error(id, text, kind.name(), err.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn transform(text: &str, kind: TransformKind) -> TransformationResult {
        Engine::default().transform("eq", text, &kind)
    }

    fn isolate(target: &str) -> TransformKind {
        TransformKind::IsolateVariable { target: target.to_string() }
    }

    #[test]
    fn simplify_combines_like_terms() {
        let result = transform("2x + 3x = 25", TransformKind::Simplify);
        assert_eq!(result.kind, "simplify");
        assert_eq!(result.steps, vec![
            TransformationStep::new("Identify like terms", "2x + 3x - 25 = 0", "Group terms with same variables"),
            TransformationStep::new("Combine like terms", "5x - 25 = 0", "Add coefficients of like terms"),
        ]);
        assert_eq!(result.final_result, "5x - 25 = 0");
        assert_eq!(result.explanation, "Successfully simplified the expression");
    }

    #[test]
    fn isolate_linear() {
        let result = transform("4y - 8 = 2y", isolate("y"));
        assert_eq!(result.steps, vec![
            TransformationStep::new("Original equation", "4y - 8 = 2y", "Start with the equation"),
            TransformationStep::new("Solve for variable", "y = 4", "Isolate y"),
        ]);
        assert_eq!(result.final_result, "y = 4");
        assert_eq!(result.explanation, "Successfully solved for y");
    }

    #[test]
    fn expand_product() {
        let result = transform("(z+2)(z-4) = 0", TransformKind::Expand);
        assert_eq!(result.steps[0].formula, "(z + 2)(z - 4) = 0");
        assert_eq!(result.steps[1].label, "Combine like terms");
        assert_eq!(result.final_result, "z^2 - 2z - 8 = 0");
        assert_eq!(result.explanation, "Successfully expanded the expression");
    }

    #[test]
    fn factorize_common_factor() {
        let result = transform("10a - 5 = 0", TransformKind::Factorize);
        assert_eq!(result.steps[0].formula, "10a - 5 = 0");
        assert_eq!(result.final_result, "5(2a - 1) = 0");
        assert_eq!(result.explanation, "Successfully factored the expression");
    }

    #[test]
    fn factorize_quadratic() {
        let result = transform("z^2 - 2z = 8", TransformKind::Factorize);
        assert_eq!(result.steps[0].formula, "z^2 - 2z - 8 = 0");
        assert_eq!(result.final_result, "(z + 2)(z - 4) = 0");
    }

    #[test]
    fn malformed_input_is_an_error_result() {
        for kind in [TransformKind::Simplify, TransformKind::Expand, TransformKind::Factorize, isolate("x")] {
            let result = transform("2x +* = 5", kind.clone());
            assert_eq!(result.steps.len(), 1);
            assert_eq!(result.steps[0].label, "Error");
            assert_eq!(result.steps[0].formula, "Error parsing equation: expected an expression");
            assert_eq!(result.final_result, "Error");
            assert_eq!(result.explanation, format!("Failed to perform {} transformation", kind.name()));
        }
    }

    #[test]
    fn isolate_picks_first_root() {
        assert_eq!(transform("z^2 - 2z - 8 = 0", isolate("z")).final_result, "z = -2");
        assert_eq!(transform("x^2 + 3x + 1 = 0", isolate("x")).final_result, "x = (-3 + sqrt(5))/2");
    }

    #[test]
    fn isolate_errors() {
        let result = transform("x^3 = 8", isolate("x"));
        assert!(result.is_error());
        assert_eq!(result.steps[0].formula, "Unable to solve for x: cannot solve degree 3 equation for `x`");

        let result = transform("2x = 1", isolate("q"));
        assert_eq!(result.steps[0].formula, "Unable to solve for q: variable `q` not found in equation");
    }

    #[test]
    fn try_transform_classifies_errors() {
        let engine = Engine::default();
        assert!(matches!(
            engine.try_transform("eq", "(x + 1 = 2", &TransformKind::Simplify),
            Err(TransformError::Parse(_)),
        ));
        assert!(matches!(
            engine.try_transform("eq", "x^2 + 1 = 0", &isolate("x")),
            Err(TransformError::Solve { .. }),
        ));
    }

    #[test]
    fn simplify_is_stable() {
        let engine = Engine::default();
        for text in ["2x + 3x = 25", "x/2 = 3", "(a + b)^2 = a b", "6b + 4b = 50", "x y - y x + 1 = 0"] {
            let once = engine.transform("eq", text, &TransformKind::Simplify);
            let twice = engine.transform("eq", &once.final_result, &TransformKind::Simplify);
            assert_eq!(once.final_result, twice.final_result);
        }
    }

    #[test]
    fn expand_reverses_factorize() {
        let engine = Engine::default();
        for text in ["z^2 - 2z - 8 = 0", "2x^2 + 3x + 1 = 0", "12c - 18 = 0", "x^2 - 6x + 9 = 0"] {
            let factored = engine.transform("eq", text, &TransformKind::Factorize);
            let expanded = engine.transform("eq", &factored.final_result, &TransformKind::Expand);
            assert_eq!(expanded.final_result, text);
        }
    }

    #[test]
    fn latex_step_formulas() {
        let engine = Engine::new(EngineConfig::default().into_builder().notation(Notation::Latex).build());
        let result = engine.transform("eq", "x/2 = 3", &TransformKind::Simplify);
        assert_eq!(result.steps[1].formula, "\\frac{x}{2} - 3 = 0");
        assert_eq!(result.final_result, "x/2 - 3 = 0");
    }

    #[test]
    fn exponent_limit_is_configurable() {
        let engine = Engine::new(EngineConfigBuilder::new().max_exponent(4).build());
        let result = engine.transform("eq", "x^5 = 1", &TransformKind::Expand);
        assert_eq!(result.steps[0].formula, "Error parsing equation: exponent is larger than the limit of 4");
    }

    #[test]
    fn adjacent_letters_are_separate_variables() {
        assert_eq!(transform("3xy + 2yx = 0", TransformKind::Simplify).final_result, "5x y = 0");
        assert_eq!(transform("x1 + x = 0", TransformKind::Simplify).final_result, "x + x1 = 0");
    }

    #[test]
    fn radical_roots_parse_again() {
        let isolated = transform("x^2 + 3x + 1 = 0", isolate("x"));
        let again = transform(&isolated.final_result, TransformKind::Simplify);
        assert!(!again.is_error());
        assert_eq!(again.final_result, "x - sqrt(5)/2 + 3/2 = 0");
    }

    #[test]
    fn nested_powers_are_an_error_result() {
        let nested = (0..11).fold("x".to_string(), |acc, _| format!("({})^64", acc));
        let text = format!("{} = 1", nested);
        for kind in [TransformKind::Simplify, isolate("x")] {
            let result = transform(&text, kind);
            assert!(result.is_error());
            assert_eq!(result.steps[0].formula, "Error parsing equation: exponent is larger than the limit of 64");
        }
    }

    #[test]
    fn steps_can_be_discarded() {
        let engine = Engine::default();
        let equation = engine.parse("3(x + 1) = x").unwrap();
        assert_eq!(engine.expand(&equation, &mut ()).to_string(), "2x + 3 = 0");
    }
}
