//! Exact embedding of bits into carrier values.
//!
//! Bit `1` is represented by the band `[-1, -1 + epsilon]`, bit `0` by
//! `[1 - epsilon, 1]`. A value already inside the band of its bit is left
//! alone, every other value is moved into the band. No neighbouring value is
//! ever read, so embedding can be applied per coordinate in any order.

use log::{debug, trace};

use crate::error::{Result, StegoError};
use crate::jitter::{Jitter, JitterStrategy};
use crate::key::Key;
use crate::options::{validate_epsilon, CodecOptions};

/// Outcome of a successful [`ExactEmbedder::embed`] call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EmbedSummary {
    /// Number of keyed positions.
    pub positions: usize,
    /// Number of values that had to be moved into their band.
    pub modified: usize,
    /// Largest absolute change of a single value.
    pub max_distortion: f32,
}

/// Embeds bits at keyed carrier positions.
#[derive(Debug)]
pub struct ExactEmbedder<J = JitterStrategy> {
    epsilon: f32,
    jitter: J,
}

impl ExactEmbedder {
    /// Embedder with the default (fixed) jitter.
    pub fn new(options: &CodecOptions) -> Result<Self> {
        Self::with_jitter(options, JitterStrategy::default())
    }
}

impl<J: Jitter> ExactEmbedder<J> {
    /// Embedder placing moved values with the given jitter source.
    pub fn with_jitter(options: &CodecOptions, jitter: J) -> Result<Self> {
        validate_epsilon(options.epsilon)?;
        Ok(ExactEmbedder {
            epsilon: options.epsilon,
            jitter,
        })
    }

    #[inline]
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Embeds a single bit into a single value.
    ///
    /// # Returns
    /// * `Ok(x')` with `x'` inside the band of `bit`
    /// * `Err(StegoError::OutOfDomain)` if `x` is not inside [-1, 1]
    pub fn embed_value(&mut self, x: f32, bit: bool) -> Result<f32> {
        check_domain(x, Vec::new)?;
        if in_band(x, bit, self.epsilon) {
            return Ok(x);
        }
        let r = self.next_magnitude()?;
        Ok(place(bit, r, self.epsilon))
    }

    /// Embeds `bits` into `carrier` at the positions of `key`.
    ///
    /// The carrier is the dense row-major storage of `key.shape()`. All
    /// preconditions are checked before the first write: on error the
    /// carrier is left untouched.
    pub fn embed(&mut self, carrier: &mut [f32], key: &Key, bits: &[bool]) -> Result<EmbedSummary> {
        key.check_carrier(carrier.len())?;
        key.check_bits(bits.len())?;

        let mut writes = Vec::new();
        for (i, (&flat, &bit)) in key.positions().iter().zip(bits).enumerate() {
            let x = carrier[flat];
            check_domain(x, || key.coordinate(i))?;
            if !in_band(x, bit, self.epsilon) {
                let r = self.next_magnitude()?;
                writes.push((flat, place(bit, r, self.epsilon)));
            }
        }

        let mut max_distortion = 0.0f32;
        for &(flat, value) in &writes {
            trace!("position {flat}: {} -> {value}", carrier[flat]);
            max_distortion = max_distortion.max((carrier[flat] - value).abs());
            carrier[flat] = value;
        }

        let summary = EmbedSummary {
            positions: key.len(),
            modified: writes.len(),
            max_distortion,
        };
        debug!(
            "embedded {} bits, {} values modified, max distortion {}",
            summary.positions, summary.modified, summary.max_distortion
        );

        Ok(summary)
    }

    fn next_magnitude(&mut self) -> Result<f32> {
        let r = self.jitter.draw();
        if !(0.0..=1.0).contains(&r) {
            return Err(StegoError::invalid_parameter(
                "jitter",
                r,
                "magnitude must lie in [0, 1]",
            ));
        }
        Ok(r)
    }
}

/// Whether `x` already sits in the half open band reserved for `bit`.
#[inline]
fn in_band(x: f32, bit: bool, epsilon: f32) -> bool {
    if bit {
        x >= -1.0 && x < -1.0 + epsilon
    } else {
        x > 1.0 - epsilon && x <= 1.0
    }
}

#[inline]
fn place(bit: bool, r: f32, epsilon: f32) -> f32 {
    if bit {
        -1.0 + epsilon * r
    } else {
        1.0 - epsilon * r
    }
}

fn check_domain(x: f32, coordinate: impl FnOnce() -> Vec<usize>) -> Result<()> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(StegoError::OutOfDomain {
            coordinate: coordinate(),
            value: x,
        });
    }
    Ok(())
}
