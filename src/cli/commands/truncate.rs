//! truncate command - Word-boundary-safe truncation

use anyhow::Result;
use serde::Serialize;

use crate::cli::Context;
use crate::core;

/// JSON output for the truncate command.
#[derive(Debug, Serialize)]
struct TruncateOutput<'a> {
    input: &'a str,
    max_chars: usize,
    truncated: bool,
    result: &'a str,
}

/// Truncate the joined words to `max_chars` characters and print the
/// result.
pub fn truncate(ctx: &Context, max_chars: usize, suffix: Option<&str>, text: &[String]) -> Result<()> {
    let input = text.join(" ");
    let result = core::truncate(&input, max_chars, suffix);

    if ctx.json {
        let output = TruncateOutput {
            input: &input,
            max_chars,
            truncated: result != input,
            result: &result,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", result);
    }

    Ok(())
}
