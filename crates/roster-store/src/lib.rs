//! Roster Store - persistence for school records
//!
//! Provides:
//! - JSON document adapter with atomic writes
//! - SQLite schema with a checksummed migrations framework
//! - Repository layer saving and hydrating [`roster_core::SchoolRecords`]
//! - Online database backup

pub mod atomic;
pub mod backup;
pub mod db;
pub mod errors;
pub mod json_file;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use json_file::{load_json, load_json_session, save_json};
pub use repo::SqliteRepo;
