//! Configuration of the transformation [`Engine`](super::Engine).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The notation used to render the formulas of transformation steps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Notation {
    /// Plain text that can be parsed again, such as `5x/6 + sqrt(2)`.
    ///
    /// This is the default option.
    #[default]
    Plain,

    /// LaTeX, such as `\frac{5x}{6} + \sqrt{2}`.
    Latex,
}

/// Options that control how equations are parsed, transformed, and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// The notation to render step formulas in.
    ///
    /// The final result of a transformation is always rendered in [`Notation::Plain`], so that it
    /// can be fed back into the engine.
    pub notation: Notation,

    /// The largest exponent magnitude accepted in an equation. Powers are expanded during
    /// normalization, so this bounds the size of the polynomials the engine works with.
    pub max_exponent: u32,

    /// The maximum number of divisors of the constant term to try when searching for the integer
    /// roots of a quadratic. If the constant term has more candidates than this, factoring only
    /// extracts the common factor.
    pub factor_trial_limit: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            notation: Notation::Plain,
            max_exponent: 64,
            factor_trial_limit: 1_000_000,
        }
    }
}

impl EngineConfig {
    /// Wraps the given [`EngineConfig`] into a builder for further customization.
    pub fn into_builder(self) -> EngineConfigBuilder {
        EngineConfigBuilder(self)
    }
}

/// Helper struct to build an [`EngineConfig`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfigBuilder(EngineConfig);

impl EngineConfigBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the notation of step formulas. See [`Notation`] for more information.
    pub fn notation(mut self, notation: Notation) -> Self {
        self.0.notation = notation;
        self
    }

    /// Sets the largest accepted exponent. See [`EngineConfig::max_exponent`] for more
    /// information.
    pub fn max_exponent(mut self, max_exponent: u32) -> Self {
        self.0.max_exponent = max_exponent;
        self
    }

    /// Sets the trial divisor limit of the factorizer. See
    /// [`EngineConfig::factor_trial_limit`] for more information.
    pub fn factor_trial_limit(mut self, factor_trial_limit: u64) -> Self {
        self.0.factor_trial_limit = factor_trial_limit;
        self
    }

    /// Builds the [`EngineConfig`] struct.
    pub fn build(self) -> EngineConfig {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = EngineConfigBuilder::new()
            .notation(Notation::Latex)
            .max_exponent(8)
            .build();
        assert_eq!(config, EngineConfig {
            notation: Notation::Latex,
            max_exponent: 8,
            factor_trial_limit: 1_000_000,
        });
    }

    #[test]
    fn into_builder_keeps_existing_options() {
        let config = EngineConfigBuilder::new().max_exponent(3).build();
        let config = config.into_builder().factor_trial_limit(10).build();
        assert_eq!(config.max_exponent, 3);
        assert_eq!(config.factor_trial_limit, 10);
        assert_eq!(config.notation, Notation::Plain);
    }
}
