//! Listen-ports subcommand implementation.
//!
//! Handles `netdiag listen-ports`: connect to every port on localhost and
//! report the ones that answer.

use crate::config::Settings;
use crate::error::CliResult;
use crate::output;
use crate::scanner::{scan_listeners, ScanOptions, TcpConnectScanner};
use clap::Parser;
use std::io::{self, Write};
use std::sync::Arc;

/// Check which ports are listening on localhost.
#[derive(Parser, Debug)]
pub struct ListenPortsCommand {}

impl ListenPortsCommand {
    /// Execute the listen-ports command.
    pub async fn execute(&self, settings: &Settings) -> CliResult<()> {
        // No connect timeout: loopback refusals come back immediately.
        let scanner = Arc::new(TcpConnectScanner::new(settings.scan_address, None));
        let options = ScanOptions::new().with_progress(settings.verbose);

        let summary = scan_listeners(scanner, settings.scan_range, &options).await;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        for port in &summary.open_ports {
            writeln!(out, "{}", output::listening_line(*port))?;
        }
        out.flush()?;

        if settings.verbose {
            output::print_info(&format!(
                "{} ports scanned on {} in {:.2}s, {} listening",
                summary.ports_scanned,
                summary.target,
                summary.duration.as_secs_f64(),
                summary.open_ports.len()
            ));
        }

        Ok(())
    }
}
