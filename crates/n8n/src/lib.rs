//! n8n summarization webhook client library.
//!
//! Wraps the single outbound HTTP call to the workflow-automation webhook
//! that produces video summaries, validating its loosely-typed JSON
//! response into a [`payload::SummaryPayload`] at the boundary.

pub mod client;
pub mod error;
pub mod payload;
