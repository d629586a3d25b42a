use clap::Args;

use crate::CliResult;

/// Prints the bit stream of a message, eight bits per character
#[derive(Args, Debug)]
pub struct BitsArgs {
    /// A text message with characters up to code point 255
    #[arg(short, long, value_name = "text message")]
    pub message: String,
}

impl BitsArgs {
    pub fn run(self) -> CliResult<()> {
        let bits = sgan_stego::bits::encode(&self.message)?;
        println!("{}", sgan_stego::bits::format_bits(&bits));
        Ok(())
    }
}
