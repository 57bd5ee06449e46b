//! Database connection management.
//!
//! Connections go through the `sqlx` `Any` driver so the connection URL in the
//! credential file decides the backend (`mysql://` in production, `sqlite://`
//! for local runs and tests).

use async_trait::async_trait;
use log::debug;
use sqlx::any::{install_default_drivers, AnyRow};
use sqlx::{AnyConnection, Connection, FromRow};

use crate::config::ISSUED_NAMES_QUERY;
use crate::error_handling::ExportError;
use crate::storage::{IssuedNameRecord, RecordCursor, StoreConnection, StoreConnector};

/// Connector backed by `sqlx`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlxConnector;

#[async_trait]
impl StoreConnector for SqlxConnector {
    async fn connect(&self, dsn: &str) -> Result<Box<dyn StoreConnection>, ExportError> {
        install_default_drivers();

        let conn = AnyConnection::connect(dsn).await.map_err(|e| {
            debug!("Failed to connect to database: {e}");
            ExportError::Connection(e)
        })?;
        debug!("Connected to {} database", conn.backend_name());

        Ok(Box::new(SqlxConnection { conn }))
    }
}

/// A single `sqlx` connection.
pub struct SqlxConnection {
    conn: AnyConnection,
}

#[async_trait]
impl StoreConnection for SqlxConnection {
    async fn fetch_issued_names(
        &mut self,
        start: &str,
        end: &str,
    ) -> Result<RecordCursor, ExportError> {
        // fetch_all buffers the whole result set so the cursor does not borrow
        // the connection
        let rows: Vec<AnyRow> = sqlx::query(ISSUED_NAMES_QUERY)
            .bind(start)
            .bind(end)
            .fetch_all(&mut self.conn)
            .await
            .map_err(|e| {
                debug!("Failed to query issued names: {e}");
                ExportError::Query(e)
            })?;
        debug!("Query returned {} rows", rows.len());

        Ok(Box::new(
            rows.into_iter()
                .map(|row| IssuedNameRecord::from_row(&row)),
        ))
    }

    async fn close(self: Box<Self>) -> Result<(), ExportError> {
        self.conn.close().await.map_err(ExportError::Connection)
    }
}
