//! Repository layer for persisting school records to SQLite
//!
//! Writes go through [`SqliteRepo`]; reads come back as records through
//! [`hydration`] and are rebuilt with the core loader.

pub mod hydration;
pub mod sqlite_repo;

pub use hydration::{load_records, load_session};
pub use sqlite_repo::SqliteRepo;
