use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = sphere_vault::cli::Cli::parse();
    cli.run()
}
