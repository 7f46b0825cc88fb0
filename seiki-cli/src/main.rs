//! `seiki` command-line entry point

use clap::Parser;
use seiki_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    cli.execute()
}
