use anyhow::Context;
use clap::Parser;
use netdiag::cli::Cli;
use netdiag::config::Settings;
use netdiag::output;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = cli.settings();

    if let Err(e) = init_tracing(&settings) {
        output::print_warning(&format!("{:#}", e));
    }

    match cli.command.execute(&settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            output::print_error(&e.to_string());
            ExitCode::from(e.exit_code())
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the level picked from the flags.
fn init_tracing(settings: &Settings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.default_log_directive()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .context("failed to initialize logging")
}
