//! Gox CLI - parallel Go cross-compilation
//!
//! Entry point for the gox command-line application.

use anyhow::Result;
use clap::Parser;

use gox::cli::output::display_error;
use gox::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    // Run the build and handle errors
    match cli.run().await {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&anyhow::Error::from(e));
            std::process::exit(1);
        }
    }
}
