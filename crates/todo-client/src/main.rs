//! todo - command-line client for a todo REST backend
//!
//! # Examples
//!
//! ```bash
//! # Create an account, then log in
//! todo register --email you@example.com --password secret --name "Your Name"
//! todo login --email you@example.com --password secret
//!
//! # Work with the list
//! todo add --title "Buy milk" --description "2 litres"
//! todo list
//! todo remove <id>
//!
//! todo logout
//! ```

use todo_client::{CliError, Runner, cli::Cli, logger};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = todo_config::Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let runner = Runner::from_config(&config, cli.server.as_deref())?.with_json(cli.json);

    let mut stdout = std::io::stdout().lock();
    runner.run(cli.command, &mut stdout).await
}
