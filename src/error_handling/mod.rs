//! Error handling.
//!
//! Error types are grouped into the categories operators alert on:
//! - **Config**: credential file or date flag problems
//! - **Connection** / **Query** / **NoResults**: store-side failures
//! - **Scan** / **Write**: serialization failures
//! - **Compression** / **Delivery**: external tool failures
//!
//! No error is recovered locally. Each one is wrapped with stage context by the
//! orchestrator and ends the run.

mod types;

// Re-export public API
pub use types::{ErrorCategory, ExportError, InitializationError};
