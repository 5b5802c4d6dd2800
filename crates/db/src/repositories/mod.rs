//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every summary operation
//! is scoped to an owner; a row belonging to another owner behaves as if
//! it did not exist.

pub mod summary_repo;

pub use summary_repo::SummaryRepo;
