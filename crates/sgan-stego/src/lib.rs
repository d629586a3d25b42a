//! # sgan-stego
//!
//! Hides a byte message inside continuous carrier values in `[-1, 1]`, for
//! example the pixels of a normalized image tensor.
//!
//! - [`bits`] turns a message into a flat bit stream and back
//! - [`Key`] selects the carrier coordinates, seeded and reproducible
//! - [`ExactEmbedder`] moves each keyed value into the band of its bit,
//!   [`ExactExtractor`] reads the bands back
//! - [`SoftScorer`] gives a differentiable confidence for the same decision,
//!   used as a gradient signal by a learned detector
//!
//! The scheme conceals where a message is, it does not encrypt it.
//!
//! # Usage Examples
//!
//! ## Hide and unveil a message
//!
//! ```rust
//! use sgan_stego::CarrierShape;
//!
//! let shape = CarrierShape::new([1, 8, 8]).unwrap();
//! let mut carrier = vec![0.0f32; shape.len()];
//!
//! sgan_stego::api::hide::prepare()
//!     .with_message("Hi")
//!     .with_seed(42)
//!     .execute(&mut carrier, &shape)
//!     .expect("Failed to hide message");
//!
//! let message = sgan_stego::api::unveil::prepare()
//!     .with_seed(42)
//!     .with_message_len(2)
//!     .execute(&carrier, &shape)
//!     .expect("Failed to unveil message");
//!
//! assert_eq!(message, "Hi");
//! ```
//!
//! ## Work with the building blocks
//!
//! ```rust
//! use sgan_stego::{bits, CarrierShape, CodecOptions, ExactEmbedder, ExactExtractor, Key};
//!
//! let options = CodecOptions::default();
//! let shape = CarrierShape::new([2, 4, 4]).unwrap();
//! let mut carrier = vec![0.25f32; shape.len()];
//!
//! let message_bits = bits::encode("ok").unwrap();
//! let key = Key::generate(&shape, message_bits.len(), 7).unwrap();
//!
//! ExactEmbedder::new(&options).unwrap().embed(&mut carrier, &key, &message_bits).unwrap();
//! let extracted = ExactExtractor::new(&options).unwrap().extract(&carrier, &key).unwrap();
//!
//! assert_eq!(bits::decode(&extracted).unwrap(), "ok");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bits;
mod embedding;
mod error;
mod extraction;
mod jitter;
mod key;
mod options;
mod score;
mod shape;

pub use embedding::{EmbedSummary, ExactEmbedder};
pub use error::{Result, StegoError};
pub use extraction::ExactExtractor;
pub use jitter::{FixedJitter, Jitter, JitterStrategy, RandomJitter};
pub use key::Key;
pub use options::{AmbiguityPolicy, CodecOptions, DEFAULT_BETA, DEFAULT_EPSILON};
pub use score::{soft_score, soft_score_gradient, SoftScorer};
pub use shape::{CarrierShape, Coordinate};
