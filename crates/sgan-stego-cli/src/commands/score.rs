use clap::Args;
use sgan_stego::{CodecOptions, SoftScorer};

use crate::CliResult;

/// Prints the soft score and its gradient for one carrier value
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Carrier value, usually inside [-1, 1]
    #[arg(short = 'x', long, value_name = "value", allow_hyphen_values = true)]
    pub value: f32,

    /// The bit to score against, 0 or 1
    #[arg(short, long, value_name = "bit", value_parser = clap::value_parser!(u8).range(0..=1))]
    pub bit: u8,
}

impl ScoreArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let scorer = SoftScorer::new(&options)?;
        let bit = self.bit == 1;
        println!("score\t{}", scorer.score(self.value, bit));
        println!("gradient\t{}", scorer.gradient(self.value, bit));
        Ok(())
    }
}
