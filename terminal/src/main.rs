//! # journal
//!
//! Command-line client for the trading journal.
//!
//! ```text
//! journal login --email a@b.com --password secret
//! journal dashboard
//! journal trades list --open
//! journal trades close 3f2b9c1e-... --exit-price 110
//! ```

use clap::Parser;
use journal_terminal::cli::{self, Cli};
use journal_terminal::core::ClientConfig;
use journal_terminal::{debug, App, Result};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Optional; real environment variables take precedence
    let _ = dotenvy::dotenv();

    let _log_guard = debug::init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<bool> {
    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = cli.api_url {
        config = config.with_api_url(api_url);
    }

    let mut app = App::new(config)?;
    let output = cli::execute(&mut app, cli.command).await?;

    if output.success {
        println!("{}", output.text);
    } else {
        eprintln!("{}", output.text);
    }

    Ok(output.success)
}
