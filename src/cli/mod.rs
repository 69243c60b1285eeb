//! CLI subcommand definitions and handlers.
//!
//! - `netdiag http <url>` - Fetch a URL
//! - `netdiag listen-ports` - Find listeners on localhost
//! - `netdiag check-port <host> <port>` - Dial one host and port
//! - `netdiag dns-lookup <record> [server]` - Resolve a name

mod check_port;
mod dns_lookup;
mod http;
mod listen_ports;

pub use check_port::CheckPortCommand;
pub use dns_lookup::DnsLookupCommand;
pub use http::HttpCommand;
pub use listen_ports::ListenPortsCommand;

use crate::config::Settings;
use crate::error::CliResult;
use clap::{Parser, Subcommand};

/// netdiag - quick network diagnostics.
#[derive(Parser, Debug)]
#[command(name = "netdiag")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Quick network diagnostics", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Settings derived from the global flags.
    pub fn settings(&self) -> Settings {
        Settings::with_flags(self.verbose, self.quiet)
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a GET request to the specified URL
    Http(HttpCommand),

    /// Check which ports are listening on localhost
    ListenPorts(ListenPortsCommand),

    /// Check if a specific port is open on a host
    CheckPort(CheckPortCommand),

    /// Perform a DNS lookup using system or custom DNS server
    DnsLookup(DnsLookupCommand),
}

impl Commands {
    /// Run the selected subcommand.
    pub async fn execute(&self, settings: &Settings) -> CliResult<()> {
        match self {
            Self::Http(cmd) => cmd.execute(settings).await,
            Self::ListenPorts(cmd) => cmd.execute(settings).await,
            Self::CheckPort(cmd) => cmd.execute(settings).await,
            Self::DnsLookup(cmd) => cmd.execute(settings).await,
        }
    }
}
