//! Configuration for netdiag.
//!
//! There are no configuration files; see [`Settings`].

mod settings;

pub use settings::{Settings, CHECK_PORT_TIMEOUT};
