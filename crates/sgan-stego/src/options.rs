use crate::error::{Result, StegoError};

/// Default width of the reserved bands next to `-1` and `+1`.
pub const DEFAULT_EPSILON: f32 = 2e-7;

/// Default sharpness of the soft score.
pub const DEFAULT_BETA: f32 = 15.0;

/// What extraction does with a value that lies in neither reserved band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AmbiguityPolicy {
    /// Fail the whole extraction with the offending coordinate.
    #[default]
    Abort,
    /// Use the given bit for every ambiguous value.
    Substitute(bool),
    /// Classify by sign, negative values read as `1`, all others as `0`.
    Nearest,
}

/// Codec configuration shared by embedding, extraction and scoring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodecOptions {
    /// Width of the reserved bands `[-1, -1 + epsilon]` (bit 1) and
    /// `[1 - epsilon, 1]` (bit 0). Also the largest distance an embedded value
    /// has from the domain edge.
    pub epsilon: f32,

    /// Steepness of the soft score transition.
    pub beta: f32,

    /// Handling of ambiguous values during extraction.
    pub ambiguity: AmbiguityPolicy,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            beta: DEFAULT_BETA,
            ambiguity: AmbiguityPolicy::Abort,
        }
    }
}

impl CodecOptions {
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_beta(mut self, beta: f32) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_ambiguity_policy(mut self, ambiguity: AmbiguityPolicy) -> Self {
        self.ambiguity = ambiguity;
        self
    }

    /// Checks `0 < epsilon < 1` and a finite, positive `beta`.
    pub fn validate(&self) -> Result<()> {
        validate_epsilon(self.epsilon)?;
        validate_beta(self.beta)
    }
}

pub(crate) fn validate_epsilon(epsilon: f32) -> Result<()> {
    if !(epsilon > 0.0 && epsilon < 1.0) {
        return Err(StegoError::invalid_parameter(
            "epsilon",
            epsilon,
            "must lie in the open interval (0, 1)",
        ));
    }
    Ok(())
}

pub(crate) fn validate_beta(beta: f32) -> Result<()> {
    if !(beta.is_finite() && beta > 0.0) {
        return Err(StegoError::invalid_parameter(
            "beta",
            beta,
            "must be finite and greater than 0",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_documented_constants() {
        let options = CodecOptions::default();
        assert_eq!(options.epsilon, 2e-7);
        assert_eq!(options.beta, 15.0);
        assert_eq!(options.ambiguity, AmbiguityPolicy::Abort);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn should_reject_invalid_parameters() {
        let options = CodecOptions::default();
        assert!(options.with_epsilon(0.0).validate().is_err());
        assert!(options.with_epsilon(1.0).validate().is_err());
        assert!(options.with_epsilon(f32::NAN).validate().is_err());
        assert!(options.with_beta(0.0).validate().is_err());
        assert!(options.with_beta(f32::INFINITY).validate().is_err());
        assert!(options.with_beta(-3.0).validate().is_err());
    }

    #[test]
    fn should_chain_builder_methods() {
        let options = CodecOptions::default()
            .with_epsilon(1e-3)
            .with_beta(4.0)
            .with_ambiguity_policy(AmbiguityPolicy::Substitute(true));

        assert_eq!(options.epsilon, 1e-3);
        assert_eq!(options.beta, 4.0);
        assert_eq!(options.ambiguity, AmbiguityPolicy::Substitute(true));
    }
}
