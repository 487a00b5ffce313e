use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mars_rover::app::{exit_status, MissionController};
use mars_rover::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the result line
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = MissionController::new().run(&cli.mission());
    match &result {
        Ok(report) => println!("{}", report.final_position_line()),
        Err(err) => eprintln!("error: {err}"),
    }

    ExitCode::from(exit_status(&result))
}
