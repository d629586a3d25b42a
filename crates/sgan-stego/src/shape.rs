//! N-dimensional carrier extents and row-major coordinate arithmetic.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StegoError};

/// A coordinate inside a [`CarrierShape`], one index per dimension.
pub type Coordinate = Vec<usize>;

/// The addressable coordinate space of a carrier, e.g. `(channels, height, width)`.
///
/// Carriers are stored densely in row-major order, the last dimension varies fastest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CarrierShape {
    dims: Vec<usize>,
    len: usize,
}

impl CarrierShape {
    /// Creates a shape from its dimensions.
    ///
    /// Rejects empty shapes, zero sized dimensions and shapes whose total
    /// number of coordinates does not fit into `usize`.
    pub fn new(dims: impl Into<Vec<usize>>) -> Result<Self> {
        let dims = dims.into();
        if dims.is_empty() {
            return Err(StegoError::InvalidShape(
                "a shape needs at least one dimension".to_string(),
            ));
        }
        if let Some(axis) = dims.iter().position(|&d| d == 0) {
            return Err(StegoError::InvalidShape(format!(
                "dimension {axis} has size 0"
            )));
        }
        let len = dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| {
                StegoError::InvalidShape(format!("{dims:?} addresses more than usize::MAX cells"))
            })?;

        Ok(CarrierShape { dims, len })
    }

    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Total number of coordinates.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`, shapes with a zero sized dimension are rejected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Row-major flat index of a coordinate.
    pub fn flat_index(&self, coordinate: &[usize]) -> Result<usize> {
        if !self.contains(coordinate) {
            return Err(StegoError::CoordinateOutOfBounds {
                coordinate: coordinate.to_vec(),
                shape: self.to_string(),
            });
        }

        Ok(coordinate
            .iter()
            .zip(&self.dims)
            .fold(0, |flat, (&index, &dim)| flat * dim + index))
    }

    /// Coordinate of a row-major flat index.
    ///
    /// # Panics
    /// If `flat` is not smaller than [`CarrierShape::len`].
    pub fn coordinate(&self, flat: usize) -> Coordinate {
        assert!(flat < self.len, "flat index {flat} out of bounds");
        let mut coordinate = vec![0; self.dims.len()];
        let mut rest = flat;
        for (axis, &dim) in self.dims.iter().enumerate().rev() {
            coordinate[axis] = rest % dim;
            rest /= dim;
        }
        coordinate
    }

    /// Whether a coordinate has the right rank and lies inside every dimension.
    pub fn contains(&self, coordinate: &[usize]) -> bool {
        coordinate.len() == self.dims.len()
            && coordinate.iter().zip(&self.dims).all(|(&i, &d)| i < d)
    }
}

impl fmt::Display for CarrierShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, dim) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{dim}")?;
        }
        write!(f, ")")
    }
}

impl FromStr for CarrierShape {
    type Err = StegoError;

    /// Parses `1x8x8`, `1,8,8` or `(1, 8, 8)`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let dims = trimmed
            .split(|c: char| c == 'x' || c == ',')
            .map(|part| {
                part.trim()
                    .parse::<usize>()
                    .map_err(|e| StegoError::InvalidShape(format!("{s:?}: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        CarrierShape::new(dims)
    }
}

impl TryFrom<&[usize]> for CarrierShape {
    type Error = StegoError;

    fn try_from(dims: &[usize]) -> Result<Self> {
        CarrierShape::new(dims.to_vec())
    }
}
