//! USB HID keyboard gadget typist CLI
//!
//! Feeds text files to a host machine by writing keyboard input reports
//! to a Linux USB gadget endpoint.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Type {
            file,
            press_ms,
            settle_ms,
            write_timeout_ms,
            quiet,
        } => commands::typing::run(
            &cli.device,
            &file,
            press_ms,
            settle_ms,
            write_timeout_ms,
            quiet,
        ),

        Commands::Check { file } => {
            if commands::check::run(&file)? {
                Ok(())
            } else {
                std::process::exit(1);
            }
        }

        Commands::Keys => {
            commands::keys::run();
            Ok(())
        }
    }
}
