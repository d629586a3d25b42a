//! Seeded selection of carrier coordinates.
//!
//! A [`Key`] is the shared secret between the embedding and the extracting
//! side: an ordered list of distinct coordinates, where position `i` carries
//! bit `i` of the message. Keys are derived from `(shape, length, seed)`, the
//! same triple always yields the same ordered list.

use std::collections::{HashMap, HashSet};

use fastrand::Rng;
use log::debug;

use crate::error::{Result, StegoError};
use crate::shape::{CarrierShape, Coordinate};

/// Ordered set of distinct carrier coordinates.
///
/// Coordinates are kept as row-major flat indices into the carrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    shape: CarrierShape,
    positions: Vec<usize>,
}

impl Key {
    /// Draws `length` distinct coordinates from `shape` with a generator seeded by `seed`.
    pub fn generate(shape: &CarrierShape, length: usize, seed: u64) -> Result<Self> {
        let mut rng = Rng::with_seed(seed);
        Self::generate_with_rng(shape, length, &mut rng)
    }

    /// Draws `length` distinct coordinates from `shape` using a caller owned generator.
    ///
    /// Runs a partial Fisher-Yates shuffle over the flat index space that only
    /// materializes the swapped slots, so the cost grows with `length` and
    /// not with the size of the carrier. Ranges are drawn as `u64` to keep
    /// the sequence identical on 32 and 64 bit targets.
    ///
    /// # Returns
    /// * `Err(StegoError::Capacity)` if `length` exceeds the number of coordinates
    pub fn generate_with_rng(shape: &CarrierShape, length: usize, rng: &mut Rng) -> Result<Self> {
        let available = shape.len();
        if length > available {
            return Err(StegoError::Capacity {
                required: length,
                available,
            });
        }

        let total = available as u64;
        let mut swapped: HashMap<u64, u64> = HashMap::with_capacity(length);
        let mut positions = Vec::with_capacity(length);

        for i in 0..length as u64 {
            let j = rng.u64(i..total);
            let at_i = swapped.get(&i).copied().unwrap_or(i);
            let at_j = swapped.get(&j).copied().unwrap_or(j);
            swapped.insert(j, at_i);
            positions.push(at_j as usize);
        }

        debug!("generated key with {length} of {available} positions for shape {shape}");

        Ok(Key {
            shape: shape.clone(),
            positions,
        })
    }

    /// Builds a key from externally supplied coordinates.
    ///
    /// Every coordinate must lie inside `shape` and appear only once.
    pub fn from_coordinates<C: AsRef<[usize]>>(
        shape: &CarrierShape,
        coordinates: &[C],
    ) -> Result<Self> {
        let mut seen = HashSet::with_capacity(coordinates.len());
        let mut positions = Vec::with_capacity(coordinates.len());

        for coordinate in coordinates {
            let coordinate = coordinate.as_ref();
            let flat = shape.flat_index(coordinate)?;
            if !seen.insert(flat) {
                return Err(StegoError::DuplicateCoordinate {
                    coordinate: coordinate.to_vec(),
                });
            }
            positions.push(flat);
        }

        Ok(Key {
            shape: shape.clone(),
            positions,
        })
    }

    #[inline]
    pub fn shape(&self) -> &CarrierShape {
        &self.shape
    }

    /// Number of positions, equal to the number of bits the key carries.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Row-major flat indices in key order.
    #[inline]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Coordinate carrying bit `i`.
    pub fn coordinate(&self, i: usize) -> Coordinate {
        self.shape.coordinate(self.positions[i])
    }

    /// Coordinates in key order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.positions.iter().map(|&flat| self.shape.coordinate(flat))
    }

    /// Checks that a carrier slice covers exactly the shape of this key.
    pub(crate) fn check_carrier(&self, carrier_len: usize) -> Result<()> {
        if carrier_len != self.shape.len() {
            return Err(StegoError::CarrierSizeMismatch {
                expected: self.shape.len(),
                actual: carrier_len,
            });
        }
        Ok(())
    }

    /// Checks that a bit sequence has one bit per key position.
    pub(crate) fn check_bits(&self, bits_len: usize) -> Result<()> {
        if bits_len != self.len() {
            return Err(StegoError::LengthMismatch {
                key: self.len(),
                bits: bits_len,
            });
        }
        Ok(())
    }
}
