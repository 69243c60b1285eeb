//! Core type definitions using newtype patterns for type safety.
//!
//! These types prevent common logic errors by making invalid states unrepresentable
//! at compile time.

mod endpoint;
mod port;

pub use endpoint::{join_host_port, Endpoint};
pub use port::{Port, PortError, PortRange};
