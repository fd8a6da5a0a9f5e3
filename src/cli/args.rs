//! CLI argument definitions

use clap::Parser;

use super::commands::Commands;

#[derive(Parser)]
#[command(name = "tips-cron")]
#[command(about = "Scheduled tasks for the tips results service", version)]
#[command(arg_required_else_help = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}
