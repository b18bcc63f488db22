//! Standalone secret generation command.

use crate::cli::CliContext;
use crate::constants;
use crate::core::generator;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Length of the generated secret
    #[arg(long, default_value_t = constants::DEFAULT_SECRET_LENGTH)]
    pub length: usize,
}

pub fn run(_ctx: &CliContext, args: GenerateArgs) -> Result<()> {
    println!("{}", generator::generate(args.length));
    Ok(())
}
