//! PF results backfill
//!
//! Results for a race day trickle in over the following days, so the cron
//! route is re-hit for a window of recent dates. Requests run sequentially
//! in offset order; larger offsets are further in the past.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::consts::{DATE_FORMAT, PF_RESULTS_ROUTE};
use crate::error::AppError;
use crate::utils::{days_before, now_stamp};

pub(crate) struct BackfillOptions {
    pub(crate) as_of: NaiveDate,
    pub(crate) base_url: String,
    pub(crate) offsets: Vec<u64>,
    pub(crate) strict: bool,
    pub(crate) dry_run: bool,
}

/// Reply shape of the cron route; the body is informational only
#[derive(Debug, Default, Deserialize)]
struct CronReply {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    race_results_inserted: Option<i64>,
}

fn request_url(base: &str, date: NaiveDate) -> String {
    format!(
        "{}{}?date={}",
        base.trim_end_matches('/'),
        PF_RESULTS_ROUTE,
        date.format(DATE_FORMAT)
    )
}

/// Issue one POST per offset and return the process exit code:
/// 0 when every request succeeded, 1 otherwise.
pub(crate) fn run(opts: &BackfillOptions) -> Result<i32, AppError> {
    let mut failures = 0usize;

    for &offset in &opts.offsets {
        let date = days_before(opts.as_of, offset)?;
        let url = request_url(&opts.base_url, date);
        println!(
            "[{}] backfilling PF results for {}",
            now_stamp(),
            date.format(DATE_FORMAT)
        );

        if opts.dry_run {
            println!("  would POST {url}");
            continue;
        }

        match ureq::post(&url).send_empty() {
            Ok(response) => {
                let status = response.status();
                let mut body = response.into_body();
                match serde_json::from_reader::<_, CronReply>(body.as_reader()) {
                    Ok(reply) if reply.ok => {
                        let rows = reply.race_results_inserted.unwrap_or(0);
                        println!("  {status}: {rows} race results inserted");
                    }
                    _ => println!("  {status}"),
                }
            }
            Err(e) => {
                failures += 1;
                eprintln!("  request for {date} failed: {e}");
                if opts.strict {
                    eprintln!("aborting backfill after failed request");
                    return Ok(1);
                }
            }
        }
    }

    Ok(if failures > 0 { 1 } else { 0 })
}
