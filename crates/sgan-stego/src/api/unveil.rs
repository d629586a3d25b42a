use crate::error::{Result, StegoError};
use crate::extraction::ExactExtractor;
use crate::key::Key;
use crate::options::CodecOptions;
use crate::shape::CarrierShape;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    message_len: Option<usize>,
    seed: Option<u64>,
    key: Option<Key>,
    options: CodecOptions,
}

impl UnveilApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Number of characters that were hidden.
    pub fn with_message_len(mut self, message_len: usize) -> Self {
        self.message_len = Some(message_len);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Uses a known key instead of deriving one from seed and message length.
    pub fn with_key(mut self, key: Key) -> Self {
        self.key = Some(key);
        self
    }

    /// Unveils the message from `carrier`, the dense row-major storage of `shape`.
    pub fn execute(self, carrier: &[f32], shape: &CarrierShape) -> Result<String> {
        self.options.validate()?;
        let key = match (self.key, self.seed, self.message_len) {
            (Some(key), _, _) => {
                if key.shape() != shape {
                    return Err(StegoError::InvalidShape(format!(
                        "key was built for {} but the carrier has shape {shape}",
                        key.shape()
                    )));
                }
                key
            }
            (None, Some(seed), Some(message_len)) => {
                let length = message_len.checked_mul(8).ok_or_else(|| {
                    StegoError::invalid_parameter("message_len", message_len, "too large")
                })?;
                Key::generate(shape, length, seed)?
            }
            (None, None, _) => {
                return Err(StegoError::invalid_parameter(
                    "seed",
                    "none",
                    "a key seed or a key is required",
                ))
            }
            (None, _, None) => {
                return Err(StegoError::invalid_parameter(
                    "message_len",
                    "none",
                    "the message length is required to derive the key",
                ))
            }
        };

        let bits = ExactExtractor::new(&self.options)?.extract(carrier, &key)?;
        crate::bits::decode(&bits)
    }
}
