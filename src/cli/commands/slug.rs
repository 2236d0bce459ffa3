//! slug command - Generate a URL-safe slug from text

use anyhow::Result;
use serde::Serialize;

use crate::cli::Context;
use crate::core::slugify;

/// JSON output for the slug command.
#[derive(Debug, Serialize)]
struct SlugOutput<'a> {
    input: &'a str,
    slug: &'a str,
}

/// Generate and print the slug of the joined words.
pub fn slug(ctx: &Context, text: &[String]) -> Result<()> {
    let input = text.join(" ");
    let slug = slugify(&input);

    if ctx.json {
        let output = SlugOutput {
            input: &input,
            slug: &slug,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", slug);
    }

    Ok(())
}
