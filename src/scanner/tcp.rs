//! TCP connect scanning.
//!
//! Both the listener scan and `check-port` come down to the same thing: ask
//! the operating system to complete a TCP handshake and close the socket
//! straight away. No data is sent.

use crate::error::{ScanError, ScanResult};
use crate::scanner::traits::{PortResult, PortStatus, Scanner};
use crate::types::{Endpoint, Port};
use async_trait::async_trait;
use std::net::{IpAddr, SocketAddr};
use std::time::{Duration, Instant};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, trace};

/// TCP Connect Scanner.
///
/// Uses standard socket connect() calls to determine port status.
/// Does not require elevated privileges.
pub struct TcpConnectScanner {
    target: IpAddr,
    timeout: Option<Duration>,
}

impl TcpConnectScanner {
    /// Create a new TCP connect scanner.
    ///
    /// # Arguments
    /// * `target` - Target IP address to scan
    /// * `timeout` - Per-connect timeout; `None` leaves it to the OS
    pub fn new(target: IpAddr, timeout: Option<Duration>) -> Self {
        Self { target, timeout }
    }

    /// Attempt to connect to the target address.
    async fn attempt_connect(&self, addr: SocketAddr) -> ScanResult<TcpStream> {
        match self.timeout {
            Some(limit) => match timeout(limit, TcpStream::connect(addr)).await {
                Ok(result) => result.map_err(ScanError::from_connect),
                Err(_) => Err(ScanError::Timeout(limit)),
            },
            None => TcpStream::connect(addr)
                .await
                .map_err(ScanError::from_connect),
        }
    }
}

#[async_trait]
impl Scanner for TcpConnectScanner {
    async fn scan_port(&self, port: Port) -> PortResult {
        let addr = SocketAddr::new(self.target, port.as_u16());
        let start = Instant::now();

        match self.attempt_connect(addr).await {
            Ok(stream) => {
                let response_time = start.elapsed().as_millis() as u64;
                drop(stream);
                PortResult::new(port, PortStatus::Open).with_response_time(response_time)
            }
            Err(e) => {
                trace!(%addr, error = %e, "connect failed");
                let status = match e {
                    ScanError::ConnectionRefused => PortStatus::Closed,
                    _ => PortStatus::Filtered,
                };
                PortResult::new(port, status)
            }
        }
    }

    fn target(&self) -> IpAddr {
        self.target
    }
}

/// Dial `endpoint` once, closing the connection as soon as it is up.
///
/// Name resolution for the host counts against `limit`.
pub async fn dial(endpoint: &Endpoint, limit: Duration) -> ScanResult<()> {
    let port = endpoint.port()?;
    let host = endpoint.host();

    debug!(address = %endpoint, ?limit, "dialing");
    match timeout(limit, TcpStream::connect((host, port.as_u16()))).await {
        Ok(Ok(stream)) => {
            debug!(
                address = %endpoint,
                peer = ?stream.peer_addr().ok(),
                "connected"
            );
            drop(stream);
            Ok(())
        }
        Ok(Err(e)) => Err(ScanError::from_connect(e)),
        Err(_) => Err(ScanError::Timeout(limit)),
    }
}
