//! page::traits
//!
//! Capability traits for the page boundary.
//!
//! # Design
//!
//! The `PageProbe` trait is async because existence checks involve network
//! I/O; blocking is a caller's choice, made by picking a runtime, never an
//! implementation default. "The page is absent" and "the check could not
//! be completed" are different answers: absence is `Ok(false)`, an
//! unfinished request is an `Err`. Callers that fold the two together do
//! so explicitly.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from page probes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProbeError {
    /// The URL could not be parsed or requested as given.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete within the probe's timeout.
    #[error("probe timed out")]
    Timeout,

    /// Network or connection error before a response arrived.
    #[error("network error: {0}")]
    Network(String),
}

/// Capability to check whether a page exists at a URL.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// `Ok(false)` means the server answered and the page is absent
/// (a 404-equivalent response). Any other completed response - including
/// server errors - means something is there: `Ok(true)`. `Err` means the
/// question was never answered.
#[async_trait]
pub trait PageProbe: Send + Sync {
    /// Check whether `url` resolves to an existing page.
    async fn exists(&self, url: &str) -> Result<bool, ProbeError>;
}

/// Capability to report the current page address.
pub trait LocationSource {
    /// The current address, as the host renders it.
    fn current(&self) -> String;
}

/// A [`LocationSource`] fixed at construction time.
///
/// The implementation for tests, demos, and command-line callers, where
/// "the current address" is whatever the caller says it is.
#[derive(Debug, Clone)]
pub struct FixedLocation(String);

impl FixedLocation {
    /// Create a location source that always reports `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}

impl LocationSource for FixedLocation {
    fn current(&self) -> String {
        self.0.clone()
    }
}
