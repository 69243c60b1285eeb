//! HTTP subcommand implementation.

use crate::config::Settings;
use crate::error::CliResult;
use crate::http::HttpFetcher;
use crate::output;
use clap::Parser;
use std::io;
use tracing::debug;

/// Send a GET request to the specified URL.
#[derive(Parser, Debug)]
pub struct HttpCommand {
    /// URL to fetch, including the scheme (http:// or https://)
    #[arg(value_name = "URL")]
    pub url: String,
}

impl HttpCommand {
    /// Execute the http command.
    ///
    /// Request failures are printed on stdout and are not an error.
    pub async fn execute(&self, _settings: &Settings) -> CliResult<()> {
        let response = match HttpFetcher::new() {
            Ok(fetcher) => fetcher.get(&self.url).await,
            Err(e) => Err(e),
        };

        match response {
            Ok(response) => {
                let stdout = io::stdout();
                output::write_http_response(&mut stdout.lock(), &response)?;
            }
            Err(e) => {
                debug!(url = %self.url, error = ?e, "request failed");
                println!("{}", output::http_error_line(&e));
            }
        }

        Ok(())
    }
}
