//! DNS lookup subcommand implementation.

use crate::config::Settings;
use crate::dns::resolver_for;
use crate::error::CliResult;
use crate::output;
use clap::Parser;
use std::io::{self, Write};
use tracing::debug;

/// Perform a DNS lookup using system or custom DNS server.
#[derive(Parser, Debug)]
pub struct DnsLookupCommand {
    /// Name to resolve
    #[arg(value_name = "DNS_RECORD")]
    pub record: String,

    /// DNS server to query on UDP port 53 instead of the system resolver
    #[arg(value_name = "DNS_SERVER")]
    pub server: Option<String>,
}

impl DnsLookupCommand {
    /// Execute the dns-lookup command.
    ///
    /// Unlike the other commands, a failed lookup is returned as an error so
    /// the process exits unsuccessfully.
    pub async fn execute(&self, settings: &Settings) -> CliResult<()> {
        let resolver = resolver_for(self.server.as_deref(), settings.dns_port).await?;
        debug!(record = %self.record, via = %resolver.describe(), "resolving");

        let ips = resolver.lookup(&self.record).await?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        for ip in ips {
            writeln!(out, "{}", output::address_record_line(&self.record, ip))?;
        }
        out.flush()?;

        Ok(())
    }
}
