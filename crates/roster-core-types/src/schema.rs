//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical across the core, the store and
//! the CLI so that log consumers can rely on them.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_STUDENT_ID: &str = "student_id";
pub const FIELD_INSTRUCTOR_ID: &str = "instructor_id";
pub const FIELD_COURSE_ID: &str = "course_id";

// Collection sizes
pub const FIELD_STUDENT_COUNT: &str = "student_count";
pub const FIELD_INSTRUCTOR_COUNT: &str = "instructor_count";
pub const FIELD_COURSE_COUNT: &str = "course_count";
pub const FIELD_DROPPED_LINKS: &str = "dropped_links";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
