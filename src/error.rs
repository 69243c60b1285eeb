//! Error types for netdiag.
//!
//! Uses `thiserror` for ergonomic error definitions.

use crate::types::PortError;
use std::time::Duration;
use thiserror::Error;

/// Error type for TCP connect attempts.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("connection refused")]
    ConnectionRefused,

    #[error("i/o timeout after {0:?}")]
    Timeout(Duration),

    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("host unreachable")]
    HostUnreachable,

    #[error("{0}")]
    ConnectionFailed(String),

    #[error(transparent)]
    InvalidPort(#[from] PortError),
}

impl ScanError {
    /// Classify an I/O error returned by a connect call.
    pub fn from_connect(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::ConnectionRefused => Self::ConnectionRefused,
            _ => {
                let message = err.to_string();
                let lower = message.to_lowercase();
                if lower.contains("no route to host") {
                    Self::HostUnreachable
                } else if lower.contains("unreachable") {
                    if lower.contains("host") {
                        Self::HostUnreachable
                    } else {
                        Self::NetworkUnreachable(message)
                    }
                } else {
                    Self::ConnectionFailed(message)
                }
            }
        }
    }
}

/// Error type for the HTTP fetch command.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unsupported protocol scheme \"{0}\"")]
    UnsupportedScheme(String),

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Error type for DNS lookups.
#[derive(Error, Debug)]
pub enum DnsError {
    #[error("failed to load system resolver configuration: {0}")]
    SystemConfig(String),

    #[error("lookup {name}: {reason}")]
    Lookup { name: String, reason: String },

    #[error("lookup {0}: no such host")]
    NoAddresses(String),

    #[error("invalid DNS server '{server}': {reason}")]
    InvalidServer { server: String, reason: String },
}

/// Error returned by a subcommand that should end the process unsuccessfully.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("DNS lookup failed: {0}")]
    Dns(#[from] DnsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Dns(_) | Self::Io(_) => 1,
        }
    }
}

/// Result type alias for connect operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Result type alias for HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// Result type alias for DNS operations.
pub type DnsResult<T> = Result<T, DnsError>;

/// Result type alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_refused_is_classified() {
        let err = io::Error::from(io::ErrorKind::ConnectionRefused);
        assert!(matches!(
            ScanError::from_connect(err),
            ScanError::ConnectionRefused
        ));
    }

    #[test]
    fn test_unreachable_is_classified() {
        let err = io::Error::new(io::ErrorKind::Other, "No route to host (host unreachable)");
        assert!(matches!(ScanError::from_connect(err), ScanError::HostUnreachable));

        let err = io::Error::new(io::ErrorKind::Other, "Network is unreachable");
        assert!(matches!(
            ScanError::from_connect(err),
            ScanError::NetworkUnreachable(_)
        ));
    }

    #[test]
    fn test_dns_failure_exit_code() {
        let err = CliError::from(DnsError::NoAddresses("nope.invalid".to_string()));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.to_string(),
            "DNS lookup failed: lookup nope.invalid: no such host"
        );
    }
}
