//! Authentication: JWT validation.

pub mod jwt;
