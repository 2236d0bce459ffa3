//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable JSON output

use clap::{Parser, Subcommand, ValueEnum};

/// Pagework - slug, truncation, and document-tree utilities
#[derive(Parser, Debug)]
#[command(name = "pw")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit machine-readable JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a URL-safe slug from text
    #[command(
        name = "slug",
        long_about = "Generate a URL-safe slug from text.\n\n\
            Lowercases the input, transliterates accented characters, turns \
            whitespace into hyphens, spells out '&' as '-and-', and strips \
            everything else. The result contains only lowercase letters, \
            digits, underscores, and single hyphens."
    )]
    Slug {
        /// Text to slugify (words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Truncate text at a word boundary
    #[command(
        name = "truncate",
        long_about = "Truncate text to a character budget without cutting a word.\n\n\
            Text within the budget passes through unchanged. Longer text is cut \
            back to the last whole word inside the budget and relieved of a \
            trailing ':', ';', or ','."
    )]
    Truncate {
        /// Maximum number of characters to keep
        #[arg(short = 'c', long)]
        max_chars: usize,

        /// Suffix appended when truncation happens (e.g. " …")
        #[arg(short, long)]
        suffix: Option<String>,

        /// Text to truncate (words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Extract a decoded query parameter from a URL
    #[command(name = "query")]
    Query {
        /// URL to inspect
        url: String,

        /// Parameter name to extract
        name: String,
    },

    /// Check whether a page exists at a URL
    #[command(
        name = "probe",
        long_about = "Check whether a page exists at a URL.\n\n\
            Sends a GET request and reports 'present' for any completed \
            response except 404, and 'absent' for 404. A request that cannot \
            be completed (network failure, timeout) is an error, not 'absent'."
    )]
    Probe {
        /// URL to check
        url: String,

        /// Give up after this many seconds
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,
    },

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Shells with completion support.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_slug_command() {
        let cli = Cli::try_parse_from(["pw", "slug", "Hello", "World"]).unwrap();
        match cli.command {
            Command::Slug { text } => assert_eq!(text, vec!["Hello", "World"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn cli_parses_truncate_flags() {
        let cli =
            Cli::try_parse_from(["pw", "truncate", "-c", "13", "--suffix", "…", "some", "text"])
                .unwrap();
        match cli.command {
            Command::Truncate {
                max_chars,
                suffix,
                text,
            } => {
                assert_eq!(max_chars, 13);
                assert_eq!(suffix.as_deref(), Some("…"));
                assert_eq!(text, vec!["some", "text"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli = Cli::try_parse_from(["pw", "slug", "x", "--json", "--quiet"]).unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
    }

    #[test]
    fn slug_requires_text() {
        assert!(Cli::try_parse_from(["pw", "slug"]).is_err());
    }
}
