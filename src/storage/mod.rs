//! Database access.
//!
//! The store is reached through [`StoreConnector`] and [`StoreConnection`];
//! [`SqlxConnector`] is the production implementation.

pub mod connection;
pub mod models;
pub mod source;
#[cfg(test)]
pub(crate) mod test_helpers;

use async_trait::async_trait;

use crate::error_handling::ExportError;

// Re-export commonly used items
pub use connection::SqlxConnector;
pub use models::IssuedNameRecord;
pub use source::RecordQuerySource;

/// Forward-only iterator over query results.
///
/// Rows are decoded lazily; a decode failure is reported for the row where it
/// happens. The cursor owns its rows and outlives the connection.
pub type RecordCursor =
    Box<dyn Iterator<Item = Result<IssuedNameRecord, sqlx::Error>> + Send>;

/// Opens connections to the issuance store.
#[async_trait]
pub trait StoreConnector: Send + Sync {
    /// Connects using a connection URL read from the credential file.
    async fn connect(&self, dsn: &str) -> Result<Box<dyn StoreConnection>, ExportError>;
}

/// A live connection to the issuance store.
#[async_trait]
pub trait StoreConnection: Send {
    /// Runs the bounded issued-names query.
    ///
    /// `start` and `end` are `YYYY-MM-DD` strings; the range is half-open.
    async fn fetch_issued_names(
        &mut self,
        start: &str,
        end: &str,
    ) -> Result<RecordCursor, ExportError>;

    /// Releases the connection.
    async fn close(self: Box<Self>) -> Result<(), ExportError>;
}
