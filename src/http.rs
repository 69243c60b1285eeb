//! Plain HTTP GET.

use crate::error::{HttpError, HttpResult};
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

/// Response of a GET request: status and the raw body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Thin wrapper around a `reqwest` client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher with the default redirect policy and no timeout.
    pub fn new() -> HttpResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("netdiag/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Send a GET request and read the whole body.
    pub async fn get(&self, url: &str) -> HttpResult<HttpResponse> {
        let url = parse_url(url)?;
        debug!(%url, "sending GET");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        debug!(status = status.as_u16(), bytes = body.len(), "response read");
        Ok(HttpResponse { status, body })
    }
}

/// Parse `raw` and require an http or https scheme.
pub fn parse_url(raw: &str) -> HttpResult<Url> {
    let url = Url::parse(raw).map_err(|e| HttpError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(HttpError::UnsupportedScheme(other.to_string())),
    }
}
