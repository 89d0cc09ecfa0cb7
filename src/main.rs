//! Binary entry point for the till.

use berber_kasa::commands::{self, Cli};
use berber_kasa::config;
use clap::Parser;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Initialize tracing as early as possible
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // .env is optional; env vars can be set externally
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let app_config = match config::load_app_configuration(cli.config.as_deref()) {
        Ok(app_config) => app_config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            eprintln!("Hata: {e}");
            return ExitCode::FAILURE;
        }
    };

    match commands::run(cli, &app_config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Hata: {e}");
            ExitCode::FAILURE
        }
    }
}
