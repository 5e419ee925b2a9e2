//! JSON document adapter
//!
//! The document is a single object with `students`, `instructors` and
//! `courses` arrays, pretty-printed with two-space indentation.

#![allow(clippy::result_large_err)]

use std::path::Path;
use std::time::Instant;

use crate::atomic::atomic_write;
use crate::errors::{from_core, io_error, serialization_error, Result};
use roster_core::records::LoadReport;
use roster_core::rules::validate_session;
use roster_core::{log_op_end, log_op_error, log_op_start, SchoolRecords, Session};

/// Write records to `path`, replacing any existing file atomically
///
/// # Errors
/// `Serialization` if encoding fails, `Io` if the file cannot be written.
pub fn save_json(path: &Path, records: &SchoolRecords) -> Result<()> {
    let start = Instant::now();
    log_op_start!("save_json", path = %path.display());

    let result = serde_json::to_string_pretty(records)
        .map_err(|e| serialization_error("save_json", e))
        .and_then(|mut text| {
            text.push('\n');
            atomic_write(path, text.as_bytes())
        });

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => {
            log_op_end!("save_json", duration_ms = duration_ms);
        }
        Err(e) => log_op_error!("save_json", e.clone(), duration_ms = duration_ms),
    }
    result
}

/// Read records from `path`
///
/// Missing top-level keys read as empty lists.
///
/// # Errors
/// `Io` if the file cannot be read, `Serialization` if it is not a valid
/// records document.
pub fn load_json(path: &Path) -> Result<SchoolRecords> {
    let text = std::fs::read_to_string(path).map_err(|e| io_error("load_json", e))?;
    serde_json::from_str(&text).map_err(|e| serialization_error("load_json", e))
}

/// Read records from `path` and rebuild a session from them
///
/// # Errors
/// Everything [`load_json`] returns, plus the loader's `Validation` and
/// `AlreadyExists` errors.
pub fn load_json_session(path: &Path) -> Result<(Session, LoadReport)> {
    let start = Instant::now();
    log_op_start!("load_json", path = %path.display());

    let result = load_json(path).and_then(|records| {
        let loaded = roster_core::load_records(&records).map_err(|e| from_core("load_json", e))?;
        validate_session(&loaded.0).map_err(|e| from_core("load_json", e))?;
        Ok(loaded)
    });

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok((session, report)) => {
            log_op_end!(
                "load_json",
                duration_ms = duration_ms,
                students = session.student_count(),
                dropped_links = report.dropped.len()
            );
        }
        Err(e) => log_op_error!("load_json", e.clone(), duration_ms = duration_ms),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::ExErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_missing_keys_default_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("school.json");
        std::fs::write(&path, r#"{"students": []}"#).unwrap();

        let records = load_json(&path).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_pretty_printed_with_two_space_indent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("school.json");
        save_json(&path, &SchoolRecords::default()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n  \"students\": []"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load_json(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Io);
    }

    #[test]
    fn test_malformed_document_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("school.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_json(&path).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Serialization);
    }
}
