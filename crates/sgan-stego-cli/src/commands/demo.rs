use clap::Args;
use log::info;
use sgan_stego::{api, CarrierShape, CodecOptions, RandomJitter};

use crate::CliResult;

/// Hides a message in a seeded synthetic carrier and unveils it again
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", default_value = "Hi")]
    pub message: String,

    /// Carrier shape, e.g. 1x8x8
    #[arg(short, long, value_name = "shape", default_value = "1x8x8")]
    pub shape: CarrierShape,

    /// Seed of the key generator
    #[arg(long, value_name = "seed", default_value_t = 42)]
    pub seed: u64,

    /// Seed of the synthetic carrier values
    #[arg(long, value_name = "seed", default_value_t = 0)]
    pub carrier_seed: u64,

    /// Seed for random placement inside the bands, fixed placement if absent
    #[arg(long, value_name = "seed")]
    pub jitter_seed: Option<u64>,
}

impl DemoArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let mut rng = fastrand::Rng::with_seed(self.carrier_seed);
        let mut carrier: Vec<f32> = (0..self.shape.len())
            .map(|_| rng.f32() * 2.0 - 1.0)
            .collect();
        info!("synthetic carrier of shape {} created", self.shape);

        let mut hide = api::hide::prepare()
            .with_options(options)
            .with_message(&self.message)
            .with_seed(self.seed);
        if let Some(seed) = self.jitter_seed {
            hide = hide.with_jitter(RandomJitter::new(seed));
        }
        let outcome = hide.execute(&mut carrier, &self.shape)?;

        let unveiled = api::unveil::prepare()
            .with_options(options)
            .with_key(outcome.key)
            .execute(&carrier, &self.shape)?;

        println!("positions\t{}", outcome.summary.positions);
        println!("modified\t{}", outcome.summary.modified);
        println!("max distortion\t{}", outcome.summary.max_distortion);
        println!("unveiled\t{unveiled}");
        Ok(())
    }
}
