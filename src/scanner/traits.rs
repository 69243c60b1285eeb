//! Scanner trait abstraction.
//!
//! Defines a common interface for port scanner implementations,
//! enabling polymorphism and easier testing.

use crate::types::Port;
use async_trait::async_trait;
use std::fmt;
use std::net::IpAddr;

/// Status of a scanned port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortStatus {
    /// Port accepted a connection.
    Open,
    /// Connection was refused.
    Closed,
    /// No usable answer: timed out, unreachable, or some other error.
    Filtered,
}

impl fmt::Display for PortStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Filtered => write!(f, "filtered"),
        }
    }
}

/// Result of probing a single port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortResult {
    /// The port number that was scanned.
    pub port: Port,
    /// Status determined by the scan.
    pub status: PortStatus,
    /// Response time in milliseconds, for open ports.
    pub response_time_ms: Option<u64>,
}

impl PortResult {
    /// Create a new port result.
    pub fn new(port: Port, status: PortStatus) -> Self {
        Self {
            port,
            status,
            response_time_ms: None,
        }
    }

    /// Set the response time.
    pub fn with_response_time(mut self, time_ms: u64) -> Self {
        self.response_time_ms = Some(time_ms);
        self
    }

    /// Check if the port is open.
    pub fn is_open(&self) -> bool {
        self.status == PortStatus::Open
    }
}

/// Trait for port scanner implementations.
///
/// The listener scan only needs "did this port accept a connection",
/// so anything that can answer that for one port can drive a scan.
#[async_trait]
pub trait Scanner: Send + Sync {
    /// Scan a single port.
    async fn scan_port(&self, port: Port) -> PortResult;

    /// Get the target IP address.
    fn target(&self) -> IpAddr;
}
