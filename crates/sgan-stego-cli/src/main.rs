use clap::Parser;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = sgan_stego::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.codec_options();

    match args.command {
        Commands::Bits(args) => args.run(),
        Commands::Key(args) => args.run(),
        Commands::Score(args) => args.run(options),
        Commands::Demo(args) => args.run(options),
    }
}
