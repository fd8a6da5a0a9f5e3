mod app;
mod backfill;
mod cli;
mod config;
mod consts;
mod error;
mod job;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();
    let config = Config::load();

    match app::run(cli, config) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
