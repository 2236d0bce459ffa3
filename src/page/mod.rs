//! page
//!
//! Page-boundary collaborators: the capabilities a host environment
//! supplies and this crate only consumes.
//!
//! # Modules
//!
//! - [`traits`] - The [`PageProbe`] and [`LocationSource`] capability
//!   traits and [`ProbeError`]
//! - [`http`] - [`HttpProbe`], a reqwest-backed probe with an explicit
//!   timeout
//! - [`mock`] - [`MockProbe`], a deterministic probe for tests

pub mod http;
pub mod mock;
pub mod traits;

pub use http::HttpProbe;
pub use mock::MockProbe;
pub use traits::{FixedLocation, LocationSource, PageProbe, ProbeError};
