//! Placement strategies inside the reserved bands.
//!
//! When a value has to be moved, the embedder places it at `-1 + epsilon * r`
//! (bit 1) or `1 - epsilon * r` (bit 0). The magnitude `r` comes from a
//! [`Jitter`] source and must lie in `[0, 1]`, any such value is decoded the
//! same way, so the round trip does not depend on the strategy.

use enum_dispatch::enum_dispatch;
use fastrand::Rng;

/// Source of band relative magnitudes in `[0, 1]`.
#[enum_dispatch]
pub trait Jitter {
    /// Draws the magnitude for the next modified value.
    fn draw(&mut self) -> f32;
}

/// The built-in strategies.
#[enum_dispatch(Jitter)]
#[derive(Debug)]
pub enum JitterStrategy {
    FixedJitter,
    RandomJitter,
}

impl Default for JitterStrategy {
    fn default() -> Self {
        FixedJitter::default().into()
    }
}

/// Always the same magnitude. The default of `1.0` puts every moved value
/// exactly on the inner edge of its band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter(pub f32);

impl Default for FixedJitter {
    fn default() -> Self {
        FixedJitter(1.0)
    }
}

impl Jitter for FixedJitter {
    #[inline]
    fn draw(&mut self) -> f32 {
        self.0
    }
}

/// Uniform magnitudes from an owned, seeded generator.
#[derive(Debug)]
pub struct RandomJitter {
    rng: Rng,
}

impl RandomJitter {
    pub fn new(seed: u64) -> Self {
        RandomJitter {
            rng: Rng::with_seed(seed),
        }
    }

    pub fn with_rng(rng: Rng) -> Self {
        RandomJitter { rng }
    }
}

impl Jitter for RandomJitter {
    #[inline]
    fn draw(&mut self) -> f32 {
        self.rng.f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_jitter_repeats_its_value() {
        let mut jitter = FixedJitter(0.25);
        assert_eq!(jitter.draw(), 0.25);
        assert_eq!(jitter.draw(), 0.25);
        assert_eq!(FixedJitter::default().draw(), 1.0);
    }

    #[test]
    fn random_jitter_is_seeded_and_in_range() {
        let mut a = RandomJitter::new(3);
        let mut b = RandomJitter::new(3);
        for _ in 0..1000 {
            let r = a.draw();
            assert_eq!(r, b.draw());
            assert!((0.0..=1.0).contains(&r));
        }
    }

    #[test]
    fn strategy_dispatches_to_variant() {
        let mut strategy: JitterStrategy = FixedJitter(0.5).into();
        assert_eq!(strategy.draw(), 0.5);

        let mut strategy = JitterStrategy::default();
        assert_eq!(strategy.draw(), 1.0);

        let mut strategy: JitterStrategy = RandomJitter::new(11).into();
        let mut reference = RandomJitter::new(11);
        assert_eq!(strategy.draw(), reference.draw());
    }
}
