//! Reading bits back from their reserved bands.

use log::{debug, warn};

use crate::error::{Result, StegoError};
use crate::key::Key;
use crate::options::{validate_epsilon, AmbiguityPolicy, CodecOptions};

/// Extracts bits from keyed carrier positions.
#[derive(Debug, Clone, Copy)]
pub struct ExactExtractor {
    epsilon: f32,
    policy: AmbiguityPolicy,
}

impl ExactExtractor {
    pub fn new(options: &CodecOptions) -> Result<Self> {
        validate_epsilon(options.epsilon)?;
        Ok(ExactExtractor {
            epsilon: options.epsilon,
            policy: options.ambiguity,
        })
    }

    /// Band membership of a value: `Some(true)` for `[-1, -1 + epsilon]`,
    /// `Some(false)` for `[1 - epsilon, 1]`, `None` otherwise.
    #[inline]
    pub fn classify(&self, x: f32) -> Option<bool> {
        if (-1.0..=-1.0 + self.epsilon).contains(&x) {
            Some(true)
        } else if (1.0 - self.epsilon..=1.0).contains(&x) {
            Some(false)
        } else {
            None
        }
    }

    /// Extracts the bit of a single value.
    ///
    /// Values outside both bands fail with [`StegoError::AmbiguousValue`],
    /// regardless of the configured policy.
    pub fn extract_value(&self, x: f32) -> Result<bool> {
        self.classify(x)
            .ok_or(StegoError::AmbiguousValue { value: x })
    }

    /// Extracts one bit per key position, in key order.
    ///
    /// Ambiguous values are handled by the configured [`AmbiguityPolicy`].
    pub fn extract(&self, carrier: &[f32], key: &Key) -> Result<Vec<bool>> {
        key.check_carrier(carrier.len())?;

        let mut substituted = 0;
        let bits = key
            .positions()
            .iter()
            .enumerate()
            .map(|(bit_index, &flat)| {
                let value = carrier[flat];
                if let Some(bit) = self.classify(value) {
                    return Ok(bit);
                }
                match self.policy {
                    AmbiguityPolicy::Abort => Err(StegoError::AmbiguousCoordinate {
                        bit_index,
                        coordinate: key.coordinate(bit_index),
                        value,
                    }),
                    AmbiguityPolicy::Substitute(bit) => {
                        substituted += 1;
                        Ok(bit)
                    }
                    AmbiguityPolicy::Nearest => {
                        substituted += 1;
                        Ok(value < 0.0)
                    }
                }
            })
            .collect::<Result<Vec<_>>>()?;

        if substituted > 0 {
            warn!(
                "{substituted} of {} values were ambiguous and resolved by {:?}",
                key.len(),
                self.policy
            );
        }
        debug!("extracted {} bits", bits.len());

        Ok(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::CarrierShape;

    fn extractor(policy: AmbiguityPolicy) -> ExactExtractor {
        ExactExtractor::new(&CodecOptions::default().with_ambiguity_policy(policy)).unwrap()
    }

    #[test]
    fn should_read_band_membership() {
        let e = extractor(AmbiguityPolicy::Abort);

        assert!(e.extract_value(-1.0).unwrap());
        assert!(e.extract_value(-1.0 + 2e-7).unwrap());
        assert!(!e.extract_value(1.0).unwrap());
        assert!(!e.extract_value(1.0 - 2e-7).unwrap());
    }

    #[test]
    fn should_reject_center_value() {
        let e = extractor(AmbiguityPolicy::Abort);
        assert!(matches!(
            e.extract_value(0.0),
            Err(StegoError::AmbiguousValue { value }) if value == 0.0
        ));
    }

    #[test]
    fn should_reject_values_outside_the_domain() {
        let e = extractor(AmbiguityPolicy::Abort);
        for x in [-1.5, 1.5, f32::NAN, 0.9] {
            assert!(e.extract_value(x).is_err(), "{x} should be ambiguous");
        }
    }

    #[test]
    fn should_report_the_ambiguous_coordinate() {
        let shape = CarrierShape::new([2, 2]).unwrap();
        let key = Key::from_coordinates(&shape, &[[0, 0], [1, 1]]).unwrap();
        let carrier = [-1.0, 0.0, 0.0, 0.4];

        match extractor(AmbiguityPolicy::Abort).extract(&carrier, &key) {
            Err(StegoError::AmbiguousCoordinate {
                bit_index,
                coordinate,
                value,
            }) => {
                assert_eq!(bit_index, 1);
                assert_eq!(coordinate, vec![1, 1]);
                assert_eq!(value, 0.4);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn should_apply_fallback_policies() {
        let shape = CarrierShape::new([4]).unwrap();
        let key = Key::from_coordinates(&shape, &[[0], [1], [2], [3]]).unwrap();
        let carrier = [-1.0, -0.3, 0.3, 1.0];

        let bits = extractor(AmbiguityPolicy::Substitute(false))
            .extract(&carrier, &key)
            .unwrap();
        assert_eq!(bits, vec![true, false, false, false]);

        let bits = extractor(AmbiguityPolicy::Nearest)
            .extract(&carrier, &key)
            .unwrap();
        assert_eq!(bits, vec![true, true, false, false]);
    }

    #[test]
    fn should_check_carrier_size() {
        let shape = CarrierShape::new([3]).unwrap();
        let key = Key::generate(&shape, 1, 0).unwrap();
        assert!(matches!(
            extractor(AmbiguityPolicy::Abort).extract(&[1.0, 1.0], &key),
            Err(StegoError::CarrierSizeMismatch { .. })
        ));
    }
}
