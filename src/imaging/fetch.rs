//! Fetching remote images over HTTP.
//!
//! [`Fetcher`] is the seam between the fill transform and the network so
//! tests can substitute a canned response. [`HttpFetcher`] is the real thing:
//! a blocking `reqwest` client with a whole-request timeout. Only 2xx
//! responses count as success.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Retrieves the raw bytes behind a URL.
pub trait Fetcher: Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Blocking HTTP fetcher.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::Status(status.as_u16()))
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send()?;
        check_status(response.status())?;
        let body = response.bytes()?;
        tracing::debug!(url, bytes = body.len(), "fetched remote source");
        Ok(body.to_vec())
    }
}
