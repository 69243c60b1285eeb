//! Host and port pairs given on the command line.
//!
//! The port half may be a number or a well-known TCP service name
//! (`ssh`, `https`, ...). Both halves are kept verbatim so that messages
//! echo exactly what the user typed.

use crate::services::port_for_service;
use crate::types::{Port, PortError};
use std::fmt;

/// A `host` / `port` pair as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    port: String,
}

impl Endpoint {
    /// Create a new endpoint from raw arguments.
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
        }
    }

    /// The host half, unmodified.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The `host:port` form used in messages.
    pub fn address(&self) -> String {
        join_host_port(&self.host, &self.port)
    }

    /// Resolve the port half to a number, accepting service names.
    pub fn port(&self) -> Result<Port, PortError> {
        match self.port.parse::<Port>() {
            Ok(port) => Ok(port),
            Err(PortError::InvalidFormat(_)) if !self.port.is_empty() && !is_numeric(&self.port) => {
                port_for_service(&self.port)
                    .ok_or_else(|| PortError::UnknownService(self.port.clone()))
            }
            Err(e) => Err(e),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address())
    }
}

/// Join a host and port into `host:port`, bracketing IPv6 literals.
pub fn join_host_port(host: &str, port: &str) -> String {
    if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}

fn is_numeric(s: &str) -> bool {
    s.trim().chars().all(|c| c.is_ascii_digit())
}
