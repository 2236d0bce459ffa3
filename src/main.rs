//! pw - slug, truncation, and document-tree utilities.

use pagework::cli;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}
