use clap::Args;
use sgan_stego::{CarrierShape, Key};

use crate::CliResult;

/// Prints the ordered coordinates of a key
#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Carrier shape, e.g. 3x64x64
    #[arg(short, long, value_name = "shape")]
    pub shape: CarrierShape,

    /// Number of coordinates, one per bit
    #[arg(short, long, value_name = "length")]
    pub length: usize,

    /// Seed of the key generator
    #[arg(long, value_name = "seed", default_value_t = 42)]
    pub seed: u64,
}

impl KeyArgs {
    pub fn run(self) -> CliResult<()> {
        let key = Key::generate(&self.shape, self.length, self.seed)?;
        for (i, coordinate) in key.coordinates().enumerate() {
            println!("{i}\t{coordinate:?}");
        }
        Ok(())
    }
}
