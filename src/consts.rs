/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Placeholder logged when a configuration variable is absent
pub(crate) const UNSET: &str = "unset";

/// Default base URL of the tips results service
pub(crate) const DEFAULT_SERVICE_URL: &str = "https://tips-results-service.onrender.com";

/// Default base URL of the RA crawler service (echoed by the daily job banner)
pub(crate) const DEFAULT_CRAWLER_URL: &str = "https://ra-crawler.onrender.com";

/// Cron route on the tips results service that imports PF results for a date
pub(crate) const PF_RESULTS_ROUTE: &str = "/cron/fetch-pf-results";

/// Environment variable overriding the tips results service base URL
pub(crate) const TIPS_BASE_URL_ENV: &str = "TIPS_BASE_URL";

/// Environment variables echoed in the daily job's start banner
pub(crate) const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub(crate) const CRAWLER_URL_ENV: &str = "RA_CRAWLER_BASE_URL";

/// Day offsets backfilled when none are given; PF results land 2-4 days late
pub(crate) const DEFAULT_OFFSETS: [u64; 3] = [2, 3, 4];

/// Job command used when neither the CLI nor the config names one
pub(crate) const DEFAULT_JOB: [&str; 3] = ["python", "-m", "app.results_daily_job"];
