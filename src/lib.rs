//! Pagework - slug, truncation, and document-tree utilities for rendered
//! page content.
//!
//! Pagework collects the small, stateless routines page-oriented tooling
//! keeps reaching for: turning free text into URL-safe slugs, truncating
//! strings without cutting words, locating the nearest preceding element of
//! a given tag in a document tree, and extracting decoded query parameters.
//! Everything platform-dependent (fetching a URL, reading a computed style,
//! knowing the current address) sits behind a narrow capability trait.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to the
//!   library)
//! - [`core`] - Pure algorithms: slugification, truncation, reverse regex
//!   search, query-parameter extraction
//! - [`tree`] - The [`tree::TreeNode`] capability trait, the
//!   nearest-preceding-sibling locator, and an arena-backed element tree
//! - [`style`] - Computed-style capability trait and ancestor position
//!   queries
//! - [`page`] - Page-boundary collaborators: the async existence probe and
//!   the current-location capability
//!
//! # Design Principles
//!
//! 1. Core routines are total: surprising input degrades to an empty or
//!    unchanged result, never a panic
//! 2. Identical input always yields identical output; no shared state
//! 3. Platform failures are distinct values, never silently folded into
//!    "not found"

pub mod cli;
pub mod core;
pub mod page;
pub mod style;
pub mod tree;
