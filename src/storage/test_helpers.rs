//! Shared test helpers for storage and pipeline tests.
//!
//! Provides an in-memory store that records how it was used.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error_handling::ExportError;
use crate::storage::{IssuedNameRecord, RecordCursor, StoreConnection, StoreConnector};

/// A row the fake store will yield.
#[derive(Debug, Clone)]
pub enum FakeRow {
    /// Decodes successfully
    Record(IssuedNameRecord),
    /// Fails to decode (e.g. a NULL column)
    Undecodable,
}

/// Calls observed by a [`FakeStore`].
#[derive(Debug, Default)]
pub struct FakeStoreLog {
    pub dsns: Mutex<Vec<String>>,
    pub queries: Mutex<Vec<(String, String)>>,
    pub closes: AtomicUsize,
}

/// In-memory [`StoreConnector`].
#[derive(Debug, Default)]
pub struct FakeStore {
    pub rows: Vec<FakeRow>,
    pub fail_connect: bool,
    pub fail_query: bool,
    pub fail_close: bool,
    pub log: Arc<FakeStoreLog>,
}

impl FakeStore {
    /// A store whose query yields `records` in order.
    pub fn with_records(records: Vec<IssuedNameRecord>) -> Self {
        Self {
            rows: records.into_iter().map(FakeRow::Record).collect(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl StoreConnector for FakeStore {
    async fn connect(&self, dsn: &str) -> Result<Box<dyn StoreConnection>, ExportError> {
        self.log.dsns.lock().unwrap().push(dsn.to_string());
        if self.fail_connect {
            return Err(ExportError::Connection(sqlx::Error::PoolTimedOut));
        }
        Ok(Box::new(FakeConnection {
            rows: self.rows.clone(),
            fail_query: self.fail_query,
            fail_close: self.fail_close,
            log: Arc::clone(&self.log),
        }))
    }
}

struct FakeConnection {
    rows: Vec<FakeRow>,
    fail_query: bool,
    fail_close: bool,
    log: Arc<FakeStoreLog>,
}

#[async_trait]
impl StoreConnection for FakeConnection {
    async fn fetch_issued_names(
        &mut self,
        start: &str,
        end: &str,
    ) -> Result<RecordCursor, ExportError> {
        self.log
            .queries
            .lock()
            .unwrap()
            .push((start.to_string(), end.to_string()));
        if self.fail_query {
            return Err(ExportError::Query(sqlx::Error::Protocol(
                "syntax error near issuedNames".to_string(),
            )));
        }
        let rows = std::mem::take(&mut self.rows);
        Ok(Box::new(rows.into_iter().map(|row| match row {
            FakeRow::Record(record) => Ok(record),
            FakeRow::Undecodable => Err(sqlx::Error::ColumnDecode {
                index: "\"serial\"".to_string(),
                source: "unexpected null; try decoding as an `Option`".into(),
            }),
        })))
    }

    async fn close(self: Box<Self>) -> Result<(), ExportError> {
        self.log.closes.fetch_add(1, Ordering::SeqCst);
        if self.fail_close {
            return Err(ExportError::Connection(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}
