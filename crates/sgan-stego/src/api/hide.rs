use crate::embedding::{EmbedSummary, ExactEmbedder};
use crate::error::{Result, StegoError};
use crate::jitter::JitterStrategy;
use crate::key::Key;
use crate::options::CodecOptions;
use crate::shape::CarrierShape;

pub fn prepare() -> HideApi {
    HideApi::default()
}

/// What a successful hide produced: the key to hand to the unveiling side and
/// the embedding statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct HideOutcome {
    pub key: Key,
    pub summary: EmbedSummary,
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    seed: Option<u64>,
    jitter: JitterStrategy,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// Seed of the key generator, the unveiling side needs the same one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_jitter<J: Into<JitterStrategy>>(mut self, jitter: J) -> Self {
        self.jitter = jitter.into();
        self
    }

    /// Hides the message in `carrier`, the dense row-major storage of `shape`.
    pub fn execute(self, carrier: &mut [f32], shape: &CarrierShape) -> Result<HideOutcome> {
        self.options.validate()?;
        let Some(message) = self.message else {
            return Err(StegoError::invalid_parameter(
                "message",
                "none",
                "a message to hide is required",
            ));
        };
        let Some(seed) = self.seed else {
            return Err(StegoError::invalid_parameter(
                "seed",
                "none",
                "a key seed is required",
            ));
        };

        let bits = crate::bits::encode(&message)?;
        let key = Key::generate(shape, bits.len(), seed)?;
        let summary =
            ExactEmbedder::with_jitter(&self.options, self.jitter)?.embed(carrier, &key, &bits)?;

        Ok(HideOutcome { key, summary })
    }
}
