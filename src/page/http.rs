//! page::http
//!
//! HTTP implementation of the page probe.
//!
//! # Design
//!
//! A thin wrapper over a `reqwest::Client` with an explicit per-probe
//! timeout. Status mapping follows the probe contract: 404 means absent,
//! any other completed response means present. Transport failures map to
//! [`ProbeError`] variants instead of being folded into "absent".

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};

use super::traits::{PageProbe, ProbeError};

/// Default probe timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Page probe backed by an HTTP client.
///
/// # Example
///
/// ```ignore
/// use pagework::page::{HttpProbe, PageProbe};
///
/// let probe = HttpProbe::new();
/// let exists = probe.exists("https://example.com/chapter-1").await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
    timeout: Duration,
}

impl HttpProbe {
    /// Create a probe with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a probe that gives up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }

    /// Map a transport error to the probe error it represents.
    fn map_error(err: reqwest::Error) -> ProbeError {
        if err.is_timeout() {
            ProbeError::Timeout
        } else if err.is_builder() {
            ProbeError::InvalidUrl(err.to_string())
        } else {
            ProbeError::Network(err.to_string())
        }
    }
}

impl Default for HttpProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageProbe for HttpProbe {
    async fn exists(&self, url: &str) -> Result<bool, ProbeError> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(Self::map_error)?;

        let status = response.status();
        debug!("probe {} -> {}", url, status);

        Ok(status != StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_is_applied() {
        let probe = HttpProbe::new();
        assert_eq!(probe.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn with_timeout_overrides_default() {
        let probe = HttpProbe::with_timeout(Duration::from_secs(2));
        assert_eq!(probe.timeout, Duration::from_secs(2));
    }
}
