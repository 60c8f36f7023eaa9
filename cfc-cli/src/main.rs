//! CFC CLI - estimate a monthly carbon footprint from the command line.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cfc-cli",
    version,
    about = "Carbon footprint calculator"
)]
struct Cli {
    #[command(subcommand)]
    command: cfc_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cfc_cmd::run(cli.command)
}
