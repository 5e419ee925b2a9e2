//! Roster Core - in-memory records model for a school
//!
//! This crate provides:
//! - Validation primitives and the validated `Person` capability
//! - Student, Instructor and Course entities owned by a `Session` arena
//! - Enrollment and teaching operations that keep both sides of every link
//!   in step, plus unlink helpers for removal
//! - A flat, identifier-based record view and the two-phase load that
//!   rebuilds a session from it
//! - Invariant checks, table rendering and the logging facility

pub mod apply;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod records;
pub mod render;
pub mod rules;

// Re-export commonly used types
pub use apply::apply;
pub use commands::Command;
pub use errors::{ExError, ExErrorKind, Result, RosterError, ValidationReason};
pub use model::{
    Course, CourseHandle, EntityKind, EntityRef, Instructor, InstructorHandle, Person,
    PersonEdit, Personal, Student, StudentHandle,
};
pub use ops::{LinkOutcome, LinkStatus, Session};
pub use records::{load_records, LoadReport, SchoolRecords};
