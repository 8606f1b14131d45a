//! ngup - Angular-aware dependency upgrade advisor
//!
//! Reads a package.json, looks every dependency up in the npm registry and
//! recommends the versions that fit a target Angular major.

use clap::Parser;
use ngup::cli::CliArgs;
use ngup::orchestrator::Orchestrator;
use ngup::output::{create_formatter, OutputConfig};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    init_logging(args.verbose, args.quiet);

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::debug!(error = %e, "Fatal error");
            eprintln!("Error: {}", e);

            for cause in e.chain().skip(1) {
                eprintln!("  caused by: {}", cause);
            }

            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over the verbosity flags
fn init_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level = match verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            };
            EnvFilter::new(format!("warn,ngup={}", level))
        })
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        path = %args.path.display(),
        "Starting ngup"
    );

    let orchestrator = Orchestrator::new(args.clone());
    let result = orchestrator.run().await?;

    let mut output_config = OutputConfig::from_cli(args.json, args.diff, args.verbose, args.quiet);
    output_config.color = io::stdout().is_terminal();
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
