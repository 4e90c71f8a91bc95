//! HTTP fetcher implementation
//!
//! This module builds the HTTP clients used across the pipeline and performs
//! the actual page fetches. Two clients exist because the timeouts differ:
//! page fetches get a longer allowance than metadata-file probes.
//! Failures are classified but never retried here; callers decide whether a
//! failed fetch is fatal (main page), a skip (priority page), or simply
//! "no data" (metadata files, sitemaps).

use crate::config::FetchConfig;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Classified failure of a single fetch
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP status {status}")]
    Status { status: u16 },

    #[error("Request timeout")]
    Timeout,

    #[error("Connection failed")]
    Connect,

    #[error("Network error: {0}")]
    Network(String),
}

/// Builds the HTTP client used for page fetches
///
/// # Arguments
///
/// * `config` - The fetch configuration (timeouts, user agent)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_page_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.page_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Builds the HTTP client used for metadata-file and sitemap fetches
///
/// Same construction as the page client with the shorter metadata timeout.
pub fn build_metadata_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.metadata_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its body text
///
/// A non-2xx status is a `FetchError::Status`; network problems are
/// classified into timeout, connect, and other. The body is returned as-is,
/// without content-type filtering: callers downstream parse HTML, XML, or
/// plain text as appropriate.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - Response body
/// * `Err(FetchError)` - Classified failure
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await.map_err(classify_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(classify_error)
}

fn classify_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if e.is_connect() {
        FetchError::Connect
    } else {
        FetchError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FetchConfig;

    #[test]
    fn test_build_page_client() {
        let config = FetchConfig::default();
        assert!(build_page_client(&config).is_ok());
    }

    #[test]
    fn test_build_metadata_client() {
        let config = FetchConfig::default();
        assert!(build_metadata_client(&config).is_ok());
    }

    // Fetch behavior against live responses is covered by the wiremock
    // integration tests.
}
