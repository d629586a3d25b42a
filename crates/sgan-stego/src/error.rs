//! Error types for the embedding codec.

use std::fmt;
use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, StegoError>;

/// Errors that can occur while encoding, keying, embedding or extracting.
#[derive(Error)]
pub enum StegoError {
    /// A message character does not fit into a single byte.
    #[error("character {character:?} at position {position} is outside the 8-bit range")]
    Encoding { character: char, position: usize },

    /// More key positions were requested than the carrier has coordinates.
    #[error("capacity exceeded: {required} positions requested but the carrier only has {available}")]
    Capacity { required: usize, available: usize },

    /// A value lies in neither of the two reserved bands.
    #[error("ambiguous value {value}: not inside a reserved band")]
    AmbiguousValue { value: f32 },

    /// A keyed carrier value lies in neither of the two reserved bands.
    #[error("ambiguous value {value} for bit {bit_index} at coordinate {coordinate:?}")]
    AmbiguousCoordinate {
        bit_index: usize,
        coordinate: Vec<usize>,
        value: f32,
    },

    /// A carrier value is outside [-1, 1] or not finite.
    #[error("value {value} at coordinate {coordinate:?} is outside the domain [-1, 1]")]
    OutOfDomain { coordinate: Vec<usize>, value: f32 },

    /// The same coordinate appears twice in a supplied key.
    #[error("coordinate {coordinate:?} appears more than once in the key")]
    DuplicateCoordinate { coordinate: Vec<usize> },

    /// A supplied coordinate does not address a cell of the carrier.
    #[error("coordinate {coordinate:?} is out of bounds for shape {shape}")]
    CoordinateOutOfBounds { coordinate: Vec<usize>, shape: String },

    /// Key and bit sequence disagree in length.
    #[error("key has {key} positions but {bits} bits were given")]
    LengthMismatch { key: usize, bits: usize },

    /// The carrier slice does not match the shape of the key.
    #[error("carrier holds {actual} values but the shape addresses {expected}")]
    CarrierSizeMismatch { expected: usize, actual: usize },

    /// A carrier shape could not be built or parsed.
    #[error("invalid carrier shape: {0}")]
    InvalidShape(String),

    /// A tuning parameter or builder input is invalid.
    #[error("invalid parameter {param}={value}: {reason}")]
    InvalidParameter {
        param: &'static str,
        value: String,
        reason: String,
    },

    /// I/O error during bit operations.
    #[error("bit I/O error: {0}")]
    BitIo(#[from] std::io::Error),
}

impl fmt::Debug for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Use Display for Debug so unwrap() shows user-friendly messages
        write!(f, "{self}")
    }
}

impl StegoError {
    pub(crate) fn invalid_parameter(
        param: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        StegoError::InvalidParameter {
            param,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
