//! Online backup of a store database

#![allow(clippy::result_large_err)]

use std::path::Path;
use std::time::Instant;

use crate::errors::{from_rusqlite, io_error, Result};
use roster_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::{Connection, DatabaseName};

/// Copy the main database of `conn` to `path`
///
/// Parent directories are created. An existing file at `path` is
/// overwritten.
///
/// # Errors
/// `Io` if the directory cannot be created, `Persistence` if the backup
/// itself fails.
pub fn backup_to(conn: &Connection, path: &Path) -> Result<()> {
    let start = Instant::now();
    log_op_start!("db_backup", path = %path.display());

    let result = copy(conn, path);

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => {
            log_op_end!("db_backup", duration_ms = duration_ms);
        }
        Err(e) => log_op_error!("db_backup", e.clone(), duration_ms = duration_ms),
    }
    result
}

fn copy(conn: &Connection, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create_backup_dir", e))?;
    }
    conn.backup(DatabaseName::Main, path, None)
        .map_err(from_rusqlite)
}
