use pb_migrate::{Cli, logger, run_migration};

use std::process::ExitCode;

use clap::Parser;
use log::{error, warn};
use tokio::sync::watch;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // .env is optional
    dotenvy::dotenv().ok();

    let config = match cli.load_config().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_file = match cli.log_file(&config) {
        Ok(log_file) => log_file,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(
        config.logging.level,
        log_file,
        config.logging.colored,
    ) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    config.log_summary();

    let (cancel_tx, cancel_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Ctrl+C received, stopping after the current user");
            cancel_tx.send(true).ok();
        }
    });

    let report = run_migration(&config, &cancel_rx).await;

    if cli.json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("{e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{report}");
    }

    if report.status.is_fatal() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
