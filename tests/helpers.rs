// Shared test helpers for database setup and tool recording.
//
// This module provides common utilities used across multiple test files to reduce duplication.
// Not every test file uses every helper.
#![allow(dead_code)]

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;

use stats_exporter::utils::{ProcessRunner, SystemProcessRunner, ToolCommand, ToolOutput};

/// One `issuedNames` row; `None` columns are stored as NULL.
pub type IssuedNameRow<'a> = (i64, &'a str, &'a str, Option<&'a str>);

/// Creates a SQLite database with an `issuedNames` table holding `rows` and
/// returns its connection URL.
pub async fn create_issued_names_db(dir: &Path, rows: &[IssuedNameRow<'_>]) -> String {
    let path = dir.join("boulder.db");
    let options = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::query(
        "CREATE TABLE issuedNames (
            id INTEGER PRIMARY KEY,
            reversedName TEXT NOT NULL,
            notBefore DATETIME NOT NULL,
            serial TEXT,
            renewal BOOLEAN NOT NULL DEFAULT 0
        )",
    )
    .execute(&pool)
    .await
    .expect("Failed to create issuedNames table");

    for (id, reversed_name, not_before, serial) in rows {
        sqlx::query(
            "INSERT INTO issuedNames (id, reversedName, notBefore, serial) VALUES (?, ?, ?, ?)",
        )
        .bind(*id)
        .bind(*reversed_name)
        .bind(*not_before)
        .bind(*serial)
        .execute(&pool)
        .await
        .expect("Failed to insert issued name");
    }
    pool.close().await;

    format!("sqlite://{}", path.display())
}

/// Writes a credential file containing `dsn` (with trailing whitespace).
pub fn write_credentials(dir: &Path, dsn: &str) -> PathBuf {
    let path = dir.join("dburl");
    std::fs::write(&path, format!("{dsn}\n")).expect("Failed to write credential file");
    path
}

/// Returns true if `gzip` can be run on this machine.
pub fn gzip_available() -> bool {
    std::process::Command::new("gzip")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Records every command. Programs listed in `real` are actually run; all
/// others succeed without doing anything, unless listed in `failing`.
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: Mutex<Vec<ToolCommand>>,
    pub real: Vec<&'static str>,
    pub failing: Vec<&'static str>,
}

impl RecordingRunner {
    pub fn programs(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.program.clone())
            .collect()
    }
}

#[async_trait]
impl ProcessRunner for RecordingRunner {
    async fn run(&self, command: &ToolCommand) -> io::Result<ToolOutput> {
        self.calls.lock().unwrap().push(command.clone());
        let program = command.program.as_str();
        if self.real.contains(&program) {
            return SystemProcessRunner.run(command).await;
        }
        Ok(ToolOutput {
            success: !self.failing.contains(&program),
            code: Some(if self.failing.contains(&program) { 1 } else { 0 }),
            combined_output: format!("{program}: scripted output"),
        })
    }
}
