//! page::mock
//!
//! Mock page probe for deterministic testing.
//!
//! # Design
//!
//! The mock probe answers from an in-memory set of known URLs and can be
//! told to fail, so both outcomes of the probe contract - absent pages
//! and unanswerable requests - are exercisable without a network.
//!
//! # Example
//!
//! ```
//! use pagework::page::{MockProbe, PageProbe};
//!
//! # tokio_test::block_on(async {
//! let probe = MockProbe::new();
//! probe.add_page("https://example.com/exists");
//!
//! assert!(probe.exists("https://example.com/exists").await.unwrap());
//! assert!(!probe.exists("https://example.com/missing").await.unwrap());
//! # });
//! ```

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{PageProbe, ProbeError};

/// Mock probe for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share
/// state.
#[derive(Debug, Clone, Default)]
pub struct MockProbe {
    inner: Arc<Mutex<MockProbeInner>>,
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct MockProbeInner {
    /// URLs that exist.
    pages: HashSet<String>,
    /// Error to return instead of answering.
    fail_with: Option<ProbeError>,
    /// Every URL probed, in order.
    probed: Vec<String>,
}

impl MockProbe {
    /// Create a mock probe that knows no pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a URL as existing.
    pub fn add_page(&self, url: impl Into<String>) {
        self.inner.lock().unwrap().pages.insert(url.into());
    }

    /// Make every subsequent probe fail with `error`.
    pub fn fail_with(&self, error: ProbeError) {
        self.inner.lock().unwrap().fail_with = Some(error);
    }

    /// The URLs probed so far, in order.
    pub fn probed(&self) -> Vec<String> {
        self.inner.lock().unwrap().probed.clone()
    }
}

#[async_trait]
impl PageProbe for MockProbe {
    async fn exists(&self, url: &str) -> Result<bool, ProbeError> {
        let mut inner = self.inner.lock().unwrap();
        inner.probed.push(url.to_string());

        if let Some(error) = inner.fail_with.clone() {
            return Err(error);
        }
        Ok(inner.pages.contains(url))
    }
}
