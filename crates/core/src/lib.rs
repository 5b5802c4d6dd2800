//! Domain logic for the summary service.
//!
//! Pure functions and shared types: video reference validation, thumbnail
//! selection, summary completeness checks, and plain-text export shaping.
//! No I/O happens in this crate.

pub mod error;
pub mod summary;
pub mod thumbnail;
pub mod types;
pub mod video;
