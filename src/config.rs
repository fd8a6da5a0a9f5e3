use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    /// Base URL of the tips results service
    #[serde(default)]
    pub(crate) service_url: Option<String>,
    /// Day offsets to backfill, oldest-data-last order preserved
    #[serde(default)]
    pub(crate) offsets: Option<Vec<u64>>,
    /// Abort the backfill on the first failed request
    #[serde(default)]
    pub(crate) strict: bool,
    /// Daily job command, argv-style
    #[serde(default)]
    pub(crate) job_command: Option<Vec<String>>,
}

impl Config {
    pub(crate) fn load() -> Self {
        let config_paths = Self::get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        eprintln!("Loaded config from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/tips-cron/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("tips-cron").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support, etc.)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("tips-cron").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.tips-cron.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".tips-cron.toml"));
        }

        paths
    }
}
