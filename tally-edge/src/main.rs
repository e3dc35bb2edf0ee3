use std::process::ExitCode;

use clap::Parser;
use tally_edge::cli::{self, Cli};
use tally_edge::setup_environment;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // 1. Environment (dotenv, config, logging)
    let config = match setup_environment() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    // 2. Run the command
    if let Err(e) = cli::run(cli, &config).await {
        tracing::error!(kind = cli::error_kind(&e), error = %e, "Command failed");
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
