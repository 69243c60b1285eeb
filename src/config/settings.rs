//! Runtime settings.
//!
//! netdiag reads no configuration files. Settings holds the fixed
//! operating constants together with the global flags from the command
//! line, and is built once in `main`.

use crate::dns::DNS_PORT;
use crate::types::PortRange;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

/// Timeout for a single `check-port` dial, name resolution included.
pub const CHECK_PORT_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Verbose diagnostics and progress display.
    pub verbose: bool,
    /// Only errors on stderr.
    pub quiet: bool,
    /// Address the listener scan connects to.
    pub scan_address: IpAddr,
    /// Ports the listener scan walks over.
    pub scan_range: PortRange,
    /// Dial timeout for `check-port`.
    pub check_timeout: Duration,
    /// Port queried on a user-supplied DNS server.
    pub dns_port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            verbose: false,
            quiet: false,
            scan_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            scan_range: PortRange::full(),
            check_timeout: CHECK_PORT_TIMEOUT,
            dns_port: DNS_PORT,
        }
    }
}

impl Settings {
    /// Settings with the global flags applied.
    pub fn with_flags(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet: quiet && !verbose,
            ..Self::default()
        }
    }

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub fn default_log_directive(&self) -> &'static str {
        if self.verbose {
            "netdiag=debug"
        } else if self.quiet {
            "netdiag=error"
        } else {
            "netdiag=warn"
        }
    }
}
