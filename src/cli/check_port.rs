//! Check-port subcommand implementation.

use crate::config::Settings;
use crate::error::CliResult;
use crate::output;
use crate::scanner::dial;
use crate::types::Endpoint;
use clap::Parser;
use tracing::debug;

/// Check if a specific port is open on a host.
#[derive(Parser, Debug)]
pub struct CheckPortCommand {
    /// Host name or IP address to connect to
    #[arg(value_name = "HOST")]
    pub host: String,

    /// Port number or well-known service name (e.g. 22, ssh)
    #[arg(value_name = "PORT")]
    pub port: String,
}

impl CheckPortCommand {
    /// Execute the check-port command.
    ///
    /// A failed dial is reported on stdout and is not an error.
    pub async fn execute(&self, settings: &Settings) -> CliResult<()> {
        let endpoint = Endpoint::new(&self.host, &self.port);
        let address = endpoint.address();

        match dial(&endpoint, settings.check_timeout).await {
            Ok(()) => println!("{}", output::connected_line(&address)),
            Err(e) => {
                debug!(%address, error = ?e, "dial failed");
                println!("{}", output::connect_failed_line(&address, &e));
            }
        }

        Ok(())
    }
}
