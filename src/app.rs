use chrono::Utc;

use crate::backfill::{self, BackfillOptions};
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::consts::{DEFAULT_JOB, DEFAULT_OFFSETS, DEFAULT_SERVICE_URL, TIPS_BASE_URL_ENV};
use crate::error::AppError;
use crate::job;
use crate::utils::parse_date;

/// Dispatch the parsed command and return the process exit code.
pub(crate) fn run(cli: Cli, config: Config) -> Result<i32, AppError> {
    match cli.command {
        Commands::Daily(args) => {
            let job_cmd = resolve_job(args.job, config.job_command);
            Ok(job::run_daily(&job_cmd)?)
        }
        Commands::Backfill(args) => {
            let as_of = match &args.as_of {
                Some(s) => parse_date(s)?,
                None => Utc::now().date_naive(),
            };
            let base_url = resolve_base_url(
                args.url,
                std::env::var(TIPS_BASE_URL_ENV).ok(),
                config.service_url,
            );
            let offsets = args
                .offsets
                .or(config.offsets)
                .unwrap_or_else(|| DEFAULT_OFFSETS.to_vec());
            backfill::run(&BackfillOptions {
                as_of,
                base_url,
                offsets,
                strict: args.strict || config.strict,
                dry_run: args.dry_run,
            })
        }
    }
}

fn resolve_job(cli_job: Vec<String>, config_job: Option<Vec<String>>) -> Vec<String> {
    if !cli_job.is_empty() {
        return cli_job;
    }
    config_job.unwrap_or_else(|| DEFAULT_JOB.iter().map(|s| s.to_string()).collect())
}

/// CLI flag wins over the environment, which wins over the config file.
fn resolve_base_url(flag: Option<String>, env: Option<String>, config: Option<String>) -> String {
    flag.or(env.filter(|v| !v.is_empty()))
        .or(config)
        .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> String {
        v.to_string()
    }

    #[test]
    fn resolve_job_prefers_cli() {
        let job = resolve_job(vec![s("true")], Some(vec![s("false")]));
        assert_eq!(job, ["true"]);
    }

    #[test]
    fn resolve_job_falls_back_to_config_then_default() {
        let job = resolve_job(vec![], Some(vec![s("python3"), s("-m"), s("jobs.daily")]));
        assert_eq!(job, ["python3", "-m", "jobs.daily"]);

        let job = resolve_job(vec![], None);
        assert_eq!(job, ["python", "-m", "app.results_daily_job"]);
    }

    #[test]
    fn resolve_base_url_precedence() {
        assert_eq!(
            resolve_base_url(Some(s("http://flag")), Some(s("http://env")), Some(s("http://cfg"))),
            "http://flag"
        );
        assert_eq!(
            resolve_base_url(None, Some(s("http://env")), Some(s("http://cfg"))),
            "http://env"
        );
        assert_eq!(
            resolve_base_url(None, None, Some(s("http://cfg"))),
            "http://cfg"
        );
        assert_eq!(
            resolve_base_url(None, None, None),
            "https://tips-results-service.onrender.com"
        );
    }

    #[test]
    fn resolve_base_url_ignores_empty_env() {
        assert_eq!(
            resolve_base_url(None, Some(s("")), Some(s("http://cfg"))),
            "http://cfg"
        );
    }
}
