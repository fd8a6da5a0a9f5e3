//! CLI subcommand definitions
//!
//! One subcommand per scheduled task.

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the daily results job and mirror its exit code
    Daily(DailyArgs),
    /// Backfill PF results for recent dates
    Backfill(BackfillArgs),
}

#[derive(Args)]
pub(crate) struct DailyArgs {
    /// Job command to run instead of the configured daily results job
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "JOB")]
    pub(crate) job: Vec<String>,
}

#[derive(Args)]
pub(crate) struct BackfillArgs {
    /// Compute offsets relative to this date instead of the current UTC date
    #[arg(long, value_name = "DATE")]
    pub(crate) as_of: Option<String>,

    /// Day offsets to backfill, in request order
    #[arg(long, value_delimiter = ',', value_name = "DAYS")]
    pub(crate) offsets: Option<Vec<u64>>,

    /// Base URL of the tips results service
    #[arg(long, value_name = "URL")]
    pub(crate) url: Option<String>,

    /// Stop after the first failed request instead of continuing
    #[arg(long)]
    pub(crate) strict: bool,

    /// Log the requests that would be sent without sending them
    #[arg(long)]
    pub(crate) dry_run: bool,
}
