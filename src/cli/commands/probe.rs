//! probe command - Check whether a page exists at a URL
//!
//! This is a synchronous wrapper that uses tokio to run the async probe.

use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

use crate::cli::Context;
use crate::page::{HttpProbe, PageProbe};

/// JSON output for the probe command.
#[derive(Debug, Serialize)]
struct ProbeOutput<'a> {
    url: &'a str,
    exists: bool,
}

/// Probe `url` and report whether a page is there.
///
/// Prints `present` or `absent` (or the JSON equivalent). A request that
/// cannot be completed is an error and exits nonzero; absence does not.
pub fn probe(ctx: &Context, url: &str, timeout_secs: u64) -> Result<()> {
    // Use tokio runtime to run async code
    let rt = tokio::runtime::Runtime::new()?;
    let exists = rt.block_on(probe_async(url, timeout_secs))?;

    if ctx.json {
        let output = ProbeOutput { url, exists };
        println!("{}", serde_json::to_string(&output)?);
    } else if !ctx.quiet {
        println!("{}", if exists { "present" } else { "absent" });
    }

    Ok(())
}

/// Async implementation of probe.
async fn probe_async(url: &str, timeout_secs: u64) -> Result<bool> {
    let probe = HttpProbe::with_timeout(Duration::from_secs(timeout_secs));
    Ok(probe.exists(url).await?)
}
