//! # netdiag - Quick Network Diagnostics
//!
//! Four one-shot checks behind a single command:
//!
//! - **http**: GET a URL and print the body and status code
//! - **listen-ports**: find every TCP listener on localhost
//! - **check-port**: dial one host and port with a 5 second timeout
//! - **dns-lookup**: resolve a name through the system resolver or a chosen server
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use netdiag::scanner::{scan_listeners, ScanOptions, TcpConnectScanner};
//! use netdiag::types::PortRange;
//! use std::net::{IpAddr, Ipv4Addr};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let scanner = Arc::new(TcpConnectScanner::new(IpAddr::V4(Ipv4Addr::LOCALHOST), None));
//!     let summary = scan_listeners(scanner, PortRange::full(), &ScanOptions::new()).await;
//!
//!     for port in summary.open_ports {
//!         println!("Port {} is listening", port);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Validated port and endpoint types
//! - [`scanner`] - TCP connect scanning and the listener scan
//! - [`dns`] - Resolver strategies
//! - [`http`] - HTTP fetch
//! - [`cli`] - Subcommands
//! - [`config`] - Runtime settings
//! - [`error`] - Error types
//! - [`output`] - Output formatting

pub mod cli;
pub mod config;
pub mod dns;
pub mod error;
pub mod http;
pub mod output;
pub mod scanner;
pub mod services;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, DnsError, HttpError, ScanError};
pub use scanner::{PortResult, PortStatus, Scanner};
pub use types::{Endpoint, Port, PortRange};
