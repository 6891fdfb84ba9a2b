//! rSleeptime library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use errors::AppResult;

/// Logging goes to stderr, quiet unless RUST_LOG asks for more.
fn init_logging() {
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    init_logging();

    // 2️⃣ load config once
    let cfg = Config::load()?;
    log::debug!("configuration: {:?}", cfg);

    // 3️⃣ interactive session
    cli::commands::plan::handle(&cli, &cfg)
}
