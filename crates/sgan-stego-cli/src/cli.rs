use clap::{Parser, Subcommand};
use sgan_stego::{CodecOptions, DEFAULT_BETA, DEFAULT_EPSILON};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Width of the reserved bands next to -1 and +1
    #[arg(long, global = true, default_value_t = DEFAULT_EPSILON)]
    pub epsilon: f32,

    /// Steepness of the soft score
    #[arg(long, global = true, default_value_t = DEFAULT_BETA)]
    pub beta: f32,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions::default()
            .with_epsilon(self.epsilon)
            .with_beta(self.beta)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Bits(bits::BitsArgs),
    Key(key::KeyArgs),
    Score(score::ScoreArgs),
    Demo(demo::DemoArgs),
}
