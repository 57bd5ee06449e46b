//! Issued-name record source.
//!
//! Reads the connection URL from the credential file, runs the window query and
//! hands back a detached cursor. The connection never outlives the query call.

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info, warn};

use crate::error_handling::ExportError;
use crate::storage::{RecordCursor, StoreConnection, StoreConnector};
use crate::window::ExportWindow;

/// Reads the credential file and returns the trimmed connection URL.
///
/// # Errors
///
/// Returns `ExportError::CredentialFile` if the file cannot be read or holds
/// only whitespace.
pub fn read_credentials(path: &Path) -> Result<String, ExportError> {
    let contents = fs::read_to_string(path).map_err(|source| ExportError::CredentialFile {
        path: path.to_path_buf(),
        source,
    })?;
    let dsn = contents.trim();
    if dsn.is_empty() {
        return Err(ExportError::CredentialFile {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidData, "file is empty"),
        });
    }
    Ok(dsn.to_string())
}

/// Query source over an injected store connector.
pub struct RecordQuerySource<'a> {
    connector: &'a dyn StoreConnector,
}

impl<'a> RecordQuerySource<'a> {
    /// Wraps `connector`.
    pub fn new(connector: &'a dyn StoreConnector) -> Self {
        Self { connector }
    }

    /// Opens a connection using the URL stored in `credential_path`.
    pub async fn open(
        &self,
        credential_path: &Path,
    ) -> Result<Box<dyn StoreConnection>, ExportError> {
        let dsn = read_credentials(credential_path)?;
        self.connector.connect(&dsn).await
    }

    /// Runs the issued-names query for `window`.
    ///
    /// The connection is closed before this returns, whatever the outcome. A
    /// query that matches nothing is reported as `ExportError::NoResults`
    /// instead of producing an empty file.
    pub async fn query(
        &self,
        credential_path: &Path,
        window: &ExportWindow,
    ) -> Result<RecordCursor, ExportError> {
        let mut conn = self.open(credential_path).await?;

        let start = window.start_stamp();
        let end = window.end_stamp();
        info!("Querying issued names with notBefore in {window}");
        let result = conn.fetch_issued_names(&start, &end).await;

        if let Err(e) = conn.close().await {
            warn!("Failed to close database connection: {e}");
        } else {
            debug!("Database connection closed");
        }

        let mut cursor = result?.peekable();
        if cursor.peek().is_none() {
            return Err(ExportError::NoResults { start, end });
        }
        Ok(Box::new(cursor))
    }
}
