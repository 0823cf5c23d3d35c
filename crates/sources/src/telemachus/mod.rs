//! Telemachus datalink source
//!
//! Polls the flight simulator's HTTP datalink with one batched GET per
//! cycle and decodes the JSON reply.

mod decode;
mod query;

pub use decode::decode_snapshot;
pub use query::{DatalinkQuery, Endpoint};

use anyhow::{Context, Result};
use std::time::Duration;
use telemachus_dash_core::{DataSource, FetchError, SourceMetadata, TelemetrySnapshot};

/// HTTP telemetry source
///
/// Every request is bounded by `timeout`; a timed-out or refused request
/// is reported as a transport failure, which the dashboard shows as
/// "no signal". The datalink is always addressed directly, never through
/// a proxy.
pub struct TelemachusSource {
    metadata: SourceMetadata,
    client: reqwest::blocking::Client,
    url: String,
}

impl TelemachusSource {
    pub fn new(endpoint: &Endpoint, timeout: Duration) -> Result<Self> {
        let url = DatalinkQuery::from_registry().url(endpoint);
        reqwest::Url::parse(&url).with_context(|| format!("Invalid datalink URL: {}", url))?;

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()
            .context("Failed to build HTTP client")?;

        log::info!(
            "Polling datalink at {} (timeout {:?})",
            endpoint.base_url(),
            timeout
        );

        Ok(Self {
            metadata: SourceMetadata {
                id: "telemachus".to_string(),
                name: "Telemachus".to_string(),
                description: format!("Telemachus datalink at {}", endpoint.base_url()),
            },
            client,
            url,
        })
    }

    /// Full request URL, query included
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl DataSource for TelemachusSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn poll(&mut self) -> Result<TelemetrySnapshot, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let body = response.bytes().map_err(|e| {
            if e.is_timeout() {
                FetchError::Transport(e.to_string())
            } else {
                FetchError::Read(e.to_string())
            }
        })?;

        decode_snapshot(&body)
    }
}
