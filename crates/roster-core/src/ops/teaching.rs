//! Instructor/course teaching (one instructor to many courses)
//!
//! Two tiers: [`set_instructor`] is the raw setter that keeps both sides in
//! step but never refuses, and [`assign_course`] is the checked entry point
//! that refuses to take a course away from another instructor.

use super::session::Session;
use super::{LinkOutcome, LinkStatus};
use crate::errors::{Result, RosterError};
use crate::model::{CourseHandle, InstructorHandle, Personal};

/// Set or clear the instructor of a course
///
/// Adds the course to the new instructor's set if absent, removes it from
/// the previous instructor's set, and clears the course's instructor when
/// `instructor` is `None`. Performs no conflict check: an existing instructor
/// is silently replaced.
///
/// # Errors
/// `UnknownHandle` if the course or the new instructor is not in the
/// session. Nothing is mutated on error.
pub fn set_instructor(
    session: &mut Session,
    course: CourseHandle,
    instructor: Option<InstructorHandle>,
) -> Result<()> {
    let previous = session.course(course)?.instructor;
    if let Some(i) = instructor {
        session.instructor(i)?;
    }

    if previous != instructor {
        if let Some(prev) = previous {
            if let Some(p) = session.instructors.get_mut(&prev) {
                p.assigned_courses.retain(|h| *h != course);
            }
        }
        session.course_mut(course)?.instructor = instructor;
    }

    if let Some(i) = instructor {
        let inst = session.instructor_mut(i)?;
        if !inst.assigned_courses.contains(&course) {
            inst.assigned_courses.push(course);
        }
    }
    Ok(())
}

/// Assign a course to an instructor
///
/// Idempotent for the instructor already teaching the course.
///
/// # Arguments
/// * `session` - Session owning both entities
/// * `instructor` - Instructor taking the course
/// * `course` - Course to assign
///
/// # Errors
/// * `UnknownHandle` - If either handle is not in the session
/// * `InstructorConflict` - If the course is taught by a different
///   instructor; the course and both instructors are left unchanged
pub fn assign_course(
    session: &mut Session,
    instructor: InstructorHandle,
    course: CourseHandle,
) -> Result<LinkOutcome> {
    let name = session.instructor(instructor)?.name().to_string();
    let c = session.course(course)?;
    let course_name = c.course_name().to_string();
    let current = c.instructor;

    match current {
        Some(holder) if holder == instructor => {
            // Repairs a missing back-reference, otherwise a no-op
            set_instructor(session, course, Some(instructor))?;
            Ok(LinkOutcome::new(
                LinkStatus::AlreadyLinked,
                format!("{} already teaches {}", name, course_name),
            ))
        }
        Some(other) => {
            let holder = session.instructor(other)?;
            Err(RosterError::InstructorConflict {
                course_id: session.course(course)?.course_id().to_string(),
                instructor_id: holder.instructor_id().to_string(),
                instructor_name: holder.name().to_string(),
            })
        }
        None => {
            set_instructor(session, course, Some(instructor))?;
            Ok(LinkOutcome::new(
                LinkStatus::Linked,
                format!("{} assigned to teach {}", name, course_name),
            ))
        }
    }
}

/// Take a course away from the instructor teaching it
///
/// # Errors
/// `UnknownHandle` if either handle is not in the session.
pub fn unassign_course(
    session: &mut Session,
    instructor: InstructorHandle,
    course: CourseHandle,
) -> Result<LinkOutcome> {
    let name = session.instructor(instructor)?.name().to_string();
    let c = session.course(course)?;
    let course_name = c.course_name().to_string();

    if c.instructor != Some(instructor) {
        return Ok(LinkOutcome::new(
            LinkStatus::NotLinked,
            format!("{} does not teach {}", name, course_name),
        ));
    }
    set_instructor(session, course, None)?;
    Ok(LinkOutcome::new(
        LinkStatus::Unlinked,
        format!("{} no longer teaches {}", name, course_name),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, Instructor};

    fn setup() -> (Session, InstructorHandle, InstructorHandle, CourseHandle) {
        let mut session = Session::new();
        let grace = session
            .insert_instructor(Instructor::new("Grace", 45, "grace@navy.mil", "I1").unwrap())
            .unwrap();
        let alan = session
            .insert_instructor(Instructor::new("Alan", 41, "alan@bletchley.uk", "I2").unwrap())
            .unwrap();
        let c = session
            .insert_course(Course::new("CS101", "Intro").unwrap())
            .unwrap();
        (session, grace, alan, c)
    }

    #[test]
    fn test_assign_links_both_sides() {
        let (mut session, grace, _, c) = setup();
        let outcome = assign_course(&mut session, grace, c).unwrap();
        assert_eq!(outcome.status, LinkStatus::Linked);
        assert_eq!(outcome.message, "Grace assigned to teach Intro");
        assert_eq!(session.course(c).unwrap().instructor(), Some(grace));
        assert_eq!(session.instructor(grace).unwrap().assigned_courses(), &[c]);
    }

    #[test]
    fn test_assign_twice_is_idempotent() {
        let (mut session, grace, _, c) = setup();
        assign_course(&mut session, grace, c).unwrap();
        let outcome = assign_course(&mut session, grace, c).unwrap();
        assert_eq!(outcome.status, LinkStatus::AlreadyLinked);
        assert_eq!(outcome.message, "Grace already teaches Intro");
        assert_eq!(session.instructor(grace).unwrap().assigned_courses().len(), 1);
    }

    #[test]
    fn test_assign_conflict_leaves_everything_unchanged() {
        let (mut session, grace, alan, c) = setup();
        assign_course(&mut session, grace, c).unwrap();

        let err = assign_course(&mut session, alan, c).unwrap_err();
        assert_eq!(
            err,
            RosterError::InstructorConflict {
                course_id: "CS101".to_string(),
                instructor_id: "I1".to_string(),
                instructor_name: "Grace".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "CS101 already has an instructor (Grace). Unassign first if reassignment is intended."
        );
        assert_eq!(session.course(c).unwrap().instructor(), Some(grace));
        assert_eq!(session.instructor(grace).unwrap().assigned_courses(), &[c]);
        assert!(session.instructor(alan).unwrap().assigned_courses().is_empty());
    }

    #[test]
    fn test_set_instructor_moves_course_between_instructors() {
        let (mut session, grace, alan, c) = setup();
        set_instructor(&mut session, c, Some(grace)).unwrap();
        set_instructor(&mut session, c, Some(alan)).unwrap();

        assert_eq!(session.course(c).unwrap().instructor(), Some(alan));
        assert!(session.instructor(grace).unwrap().assigned_courses().is_empty());
        assert_eq!(session.instructor(alan).unwrap().assigned_courses(), &[c]);
    }

    #[test]
    fn test_set_instructor_none_clears_both_sides() {
        let (mut session, grace, _, c) = setup();
        set_instructor(&mut session, c, Some(grace)).unwrap();
        set_instructor(&mut session, c, None).unwrap();
        assert!(session.course(c).unwrap().instructor().is_none());
        assert!(session.instructor(grace).unwrap().assigned_courses().is_empty());
    }

    #[test]
    fn test_unassign() {
        let (mut session, grace, alan, c) = setup();
        assign_course(&mut session, grace, c).unwrap();

        let not_yours = unassign_course(&mut session, alan, c).unwrap();
        assert_eq!(not_yours.status, LinkStatus::NotLinked);
        assert_eq!(not_yours.message, "Alan does not teach Intro");
        assert_eq!(session.course(c).unwrap().instructor(), Some(grace));

        let outcome = unassign_course(&mut session, grace, c).unwrap();
        assert_eq!(outcome.status, LinkStatus::Unlinked);
        assert_eq!(outcome.message, "Grace no longer teaches Intro");
        assert!(session.course(c).unwrap().instructor().is_none());

        // Now free for someone else
        assign_course(&mut session, alan, c).unwrap();
        assert_eq!(session.course(c).unwrap().instructor(), Some(alan));
    }

    #[test]
    fn test_unknown_instructor_is_rejected_before_mutation() {
        let (mut session, grace, alan, c) = setup();
        assign_course(&mut session, grace, c).unwrap();
        session.remove_instructor(alan).unwrap();

        assert!(set_instructor(&mut session, c, Some(alan)).is_err());
        assert_eq!(session.course(c).unwrap().instructor(), Some(grace));
        assert_eq!(session.instructor(grace).unwrap().assigned_courses(), &[c]);
    }
}
