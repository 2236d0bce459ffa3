//! core
//!
//! Pure text algorithms. Every routine here is a total, deterministic
//! function over its arguments: no shared state, no panics on surprising
//! input. The only outward dependency is the current-location capability
//! consumed by [`query::param_from_location`].
//!
//! # Modules
//!
//! - [`slug`] - Diacritic-aware slugification
//! - [`truncate`] - Word-boundary-safe truncation
//! - [`search`] - Reverse regex search (last match index)
//! - [`query`] - Decoded query-parameter extraction

pub mod query;
pub mod search;
pub mod slug;
pub mod truncate;

pub use query::{param_from_location, query_param, QueryError};
pub use search::last_index_of;
pub use slug::slugify;
pub use truncate::truncate;
