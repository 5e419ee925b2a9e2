//! Flat, identifier-based records of a session
//!
//! Records replace handles with identifiers so a session can be written to
//! JSON or a database and rebuilt later with [`load::load_records`].

pub mod load;
pub mod view;

pub use load::{load_records, DropReason, DroppedLink, LoadReport};
pub use view::{CourseRecord, InstructorRecord, SchoolRecords, StudentRecord};
