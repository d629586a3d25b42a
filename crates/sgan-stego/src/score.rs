//! Differentiable approximation of the bit decision.
//!
//! `score(x, bit) = sigmoid(s * beta * sin(pi * x / 2))` with `s = -1` for bit
//! `1` and `s = +1` for bit `0`. The score is `0.5` at the domain center and
//! approaches `1` towards the extreme reserved for the bit, so it rises in
//! the same direction as the band test of the extractor and converges to a
//! step function as `beta` grows. It is only a training signal, decoding
//! always goes through [`crate::ExactExtractor`].

use std::f64::consts::FRAC_PI_2;

use crate::error::Result;
use crate::key::Key;
use crate::options::{validate_beta, CodecOptions};

/// Soft confidence that a value encodes a bit.
///
/// Pure function of `(x, bit, beta)`, defined for any finite `x`.
pub fn soft_score(x: f32, bit: bool, beta: f32) -> f32 {
    sigmoid(logit(x, bit, beta)) as f32
}

/// Derivative of [`soft_score`] with respect to `x`.
pub fn soft_score_gradient(x: f32, bit: bool, beta: f32) -> f32 {
    let s = sigmoid(logit(x, bit, beta));
    let inner = direction(bit) * f64::from(beta) * FRAC_PI_2 * (FRAC_PI_2 * f64::from(x)).cos();
    (s * (1.0 - s) * inner) as f32
}

#[inline]
fn direction(bit: bool) -> f64 {
    if bit {
        -1.0
    } else {
        1.0
    }
}

#[inline]
fn logit(x: f32, bit: bool, beta: f32) -> f64 {
    direction(bit) * f64::from(beta) * (FRAC_PI_2 * f64::from(x)).sin()
}

#[inline]
fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// [`soft_score`] with a fixed, validated `beta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftScorer {
    beta: f32,
}

impl SoftScorer {
    pub fn new(options: &CodecOptions) -> Result<Self> {
        Self::with_beta(options.beta)
    }

    pub fn with_beta(beta: f32) -> Result<Self> {
        validate_beta(beta)?;
        Ok(SoftScorer { beta })
    }

    #[inline]
    pub fn beta(&self) -> f32 {
        self.beta
    }

    #[inline]
    pub fn score(&self, x: f32, bit: bool) -> f32 {
        soft_score(x, bit, self.beta)
    }

    #[inline]
    pub fn gradient(&self, x: f32, bit: bool) -> f32 {
        soft_score_gradient(x, bit, self.beta)
    }

    /// Scores every keyed carrier value against its bit, in key order.
    pub fn score_all(&self, carrier: &[f32], key: &Key, bits: &[bool]) -> Result<Vec<f32>> {
        key.check_carrier(carrier.len())?;
        key.check_bits(bits.len())?;

        Ok(key
            .positions()
            .iter()
            .zip(bits)
            .map(|(&flat, &bit)| self.score(carrier[flat], bit))
            .collect())
    }
}

impl Default for SoftScorer {
    fn default() -> Self {
        SoftScorer {
            beta: crate::options::DEFAULT_BETA,
        }
    }
}
