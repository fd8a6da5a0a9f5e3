//! Daily results job runner
//!
//! Wraps one external job process: start banner, run to completion, mirror
//! its exit code. The completion banner is only printed when the job
//! succeeds, so schedulers grepping for it see failures as missing lines.

use std::process::Command;

use crate::consts::{CRAWLER_URL_ENV, DATABASE_URL_ENV, DEFAULT_CRAWLER_URL, UNSET};
use crate::error::JobError;
use crate::utils::now_stamp;

fn env_or(name: &str, fallback: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Run `job` (argv-style) to completion and return its exit code.
///
/// A job killed by a signal has no exit code and maps to 1.
pub(crate) fn run_daily(job: &[String]) -> Result<i32, JobError> {
    let (program, args) = job.split_first().ok_or(JobError::EmptyCommand)?;

    println!(
        "[{}] daily results job starting ({}={}, {}={})",
        now_stamp(),
        DATABASE_URL_ENV,
        env_or(DATABASE_URL_ENV, UNSET),
        CRAWLER_URL_ENV,
        env_or(CRAWLER_URL_ENV, DEFAULT_CRAWLER_URL),
    );

    let mut child = Command::new(program)
        .args(args)
        .spawn()
        .map_err(|source| JobError::Spawn {
            command: job.join(" "),
            source,
        })?;
    let status = child.wait().map_err(JobError::Wait)?;

    if !status.success() {
        return Ok(status.code().unwrap_or(1));
    }

    println!("[{}] daily results job finished", now_stamp());
    Ok(0)
}
