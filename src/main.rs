//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `pollinate` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use pollinate::initialization::init_logger_with;
use pollinate::{list_tables, listing_text, registration_text, run_pollinate, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // A Laravel project keeps DB_DATABASE and APP_ENV in .env
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();
    let show_tables = opt.show_tables;
    let show_ignored = opt.show_ignored;
    let config = Config::from(opt);

    init_logger_with(config.effective_log_level(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = config.validate() {
        eprintln!("pollinate error: {e}");
        process::exit(1);
    }

    if show_tables || show_ignored {
        if show_tables {
            match list_tables(&config).await {
                Ok(tables) => print!("{}", listing_text("Tables:", &tables)),
                Err(e) => {
                    eprintln!("pollinate error: {:#}", e);
                    process::exit(1);
                }
            }
        }
        if show_ignored {
            print!("{}", listing_text("Ignored tables:", &config.ignore_tables));
        }
        return Ok(());
    }

    let silent = config.silent;
    match run_pollinate(config).await {
        Ok(report) => {
            if !silent {
                print!("{}", registration_text(&report));
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("pollinate error: {:#}", e);
            process::exit(1);
        }
    }
}
