use crate::errors::{Result, RosterError};
use crate::ops::Session;

use super::invariants;

/// Validate every relationship invariant of a session
///
/// Checks, in order: no dangling handles, no duplicate links, enrollment
/// reciprocity, teaching reciprocity.
///
/// # Errors
/// Returns the first violation found. For exhaustive reporting call the
/// individual functions in [`invariants`] directly.
pub fn validate_session(session: &Session) -> Result<()> {
    if let Some((kind, handle)) = invariants::find_dangling_handles(session).first() {
        return Err(RosterError::DanglingHandle {
            kind: *kind,
            handle: *handle,
        });
    }

    if let Some((kind, id)) = invariants::find_duplicate_links(session).first() {
        return Err(RosterError::DuplicateLink {
            kind: *kind,
            id: id.clone(),
        });
    }

    if let Some((student_id, course_id)) = invariants::find_enrollment_mismatches(session).first() {
        return Err(RosterError::EnrollmentMismatch {
            student_id: student_id.clone(),
            course_id: course_id.clone(),
        });
    }

    if let Some((instructor_id, course_id)) = invariants::find_teaching_mismatches(session).first()
    {
        return Err(RosterError::TeachingMismatch {
            instructor_id: instructor_id.clone(),
            course_id: course_id.clone(),
        });
    }

    Ok(())
}
