//! Command implementations for the CFC CLI.
//!
//! Every subcommand goes through `cfc-core`; raw values are coerced with
//! the same parse-or-zero rule the web form uses.

use clap::Subcommand;

pub mod batch;
pub mod calculate;
pub mod reference;

#[derive(Subcommand)]
pub enum Command {
    /// Estimate one monthly footprint from activity quantities
    Calculate {
        #[command(flatten)]
        activities: calculate::ActivityArgs,

        /// Print the result and summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate a footprint for every row of an activities CSV
    Batch {
        /// CSV whose header names activity fields (camelCase or snake_case)
        #[arg(short = 'i', long)]
        input: String,

        /// Output CSV path (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Print the emission factor table
    Factors,

    /// Print tips for reducing a footprint
    Tips,
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Calculate { activities, json } => calculate::run_calculate(&activities, json),
        Command::Batch { input, output } => batch::run_batch(&input, output.as_deref()),
        Command::Factors => reference::run_factors(),
        Command::Tips => reference::run_tips(),
    }
}
