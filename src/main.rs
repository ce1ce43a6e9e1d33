use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use sigcga::{
    cli::Cli,
    error::{Result, ResultExt},
    experiment::run_experiment,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_experiment(&config, &mut out)?;
    out.flush().context("Failed to flush results")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the CSV table.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
