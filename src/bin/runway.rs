//! Runway CLI Binary
//!
//! Command-line interface for staged Cloud Run rollouts.

use clap::Parser;
use runway::cli::{map_error, Cli, RunContext};
use runway::error::CommandError;
use runway::logging::{init_logging, LoggingConfig};
use std::process;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{error, info};

/// Hard deadline for one invocation, covering every remote call.
const OPERATION_TIMEOUT: Duration = Duration::from_secs(120);

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    process::exit(run(cli));
}

#[tokio::main]
async fn run(cli: Cli) -> i32 {
    let result = match timeout(OPERATION_TIMEOUT, execute(&cli)).await {
        Ok(result) => result,
        Err(_) => Err(CommandError::Timeout(OPERATION_TIMEOUT.as_secs())),
    };

    match result {
        Ok(()) => {
            info!("command completed successfully");
            0
        }
        Err(e) => {
            error!("command failed: {}", e);
            eprintln!("ERROR: {}", map_error(&e));
            1
        }
    }
}

async fn execute(cli: &Cli) -> Result<(), CommandError> {
    let context = RunContext::new(cli).await?;
    context.execute(&cli.command).await
}

/// Build logging configuration from CLI flags.
/// Precedence: explicit --log-* flags override --verbose override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig::default();
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    config
}
