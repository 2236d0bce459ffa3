//! query command - Extract a decoded query parameter from a URL

use anyhow::{Context as _, Result};
use serde::Serialize;
use url::Url;

use crate::cli::Context;
use crate::core::query_param;

/// JSON output for the query command.
#[derive(Debug, Serialize)]
struct QueryOutput<'a> {
    url: &'a str,
    name: &'a str,
    value: Option<&'a str>,
}

/// Print the decoded value of the named query parameter.
///
/// An absent parameter prints nothing in plain mode and `null` in JSON
/// mode; both exit successfully - absence is an answer, not a failure.
pub fn query(ctx: &Context, url: &str, name: &str) -> Result<()> {
    let parsed = Url::parse(url).with_context(|| format!("invalid URL: {}", url))?;
    let value = query_param(&parsed, name);

    if ctx.json {
        let output = QueryOutput {
            url,
            name,
            value: value.as_deref(),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else if let Some(value) = value {
        println!("{}", value);
    } else if !ctx.quiet {
        eprintln!("parameter '{}' not present", name);
    }

    Ok(())
}
