//! Dynamically-typed entry point for relationship mutations
//!
//! ## Atomicity Contract
//!
//! - **Kinds first**: every argument is narrowed to its expected kind before
//!   the session is touched, so a `TypeConflict` never leaves a half link
//! - **All-or-nothing**: the typed operations validate their handles before
//!   mutating, so any error leaves the session as it was
//! - **No panics**: invalid input returns typed errors
//!
//! ## Example
//!
//! ```
//! use roster_core::{apply, Command, Course, EntityRef, Session, Student};
//!
//! let mut session = Session::new();
//! let s = session.insert_student(Student::new("Ada", 20, "ada@example.org", "S1").unwrap()).unwrap();
//! let c = session.insert_course(Course::new("CS101", "Intro").unwrap()).unwrap();
//!
//! let outcome = apply(
//!     &mut session,
//!     Command::Register { student: EntityRef::Student(s), course: EntityRef::Course(c) },
//! )
//! .unwrap();
//! assert_eq!(outcome.message, "Ada registered for Intro");
//! ```

use crate::commands::Command;
use crate::errors::Result;
use crate::model::{EntityRef, Personal};
use crate::ops::{enrollment, teaching, unlink, LinkOutcome, LinkStatus, Session};

/// Apply a command to a session
///
/// # Errors
/// * `TypeConflict` - If an argument is of the wrong entity kind
/// * `UnknownHandle` - If a handle is not in the session
/// * `InstructorConflict` - From `AssignCourse` when the course is taken
pub fn apply(session: &mut Session, cmd: Command) -> Result<LinkOutcome> {
    match cmd {
        Command::Register { student, course } => {
            let student = student.expect_student()?;
            let course = course.expect_course()?;
            enrollment::register(session, student, course)
        }

        Command::AddStudent { course, student } => {
            let course = course.expect_course()?;
            let student = student.expect_student()?;
            enrollment::add_student(session, course, student)
        }

        Command::AssignCourse { instructor, course } => {
            let instructor = instructor.expect_instructor()?;
            let course = course.expect_course()?;
            teaching::assign_course(session, instructor, course)
        }

        Command::SetInstructor { course, instructor } => {
            let course = course.expect_course()?;
            let instructor = instructor.map(EntityRef::expect_instructor).transpose()?;
            let previous = session.course(course)?.instructor();
            teaching::set_instructor(session, course, instructor)?;

            let course_name = session.course(course)?.course_name().to_string();
            let outcome = match instructor {
                Some(i) if previous == Some(i) => LinkOutcome::new(
                    LinkStatus::AlreadyLinked,
                    format!("{} already teaches {}", session.instructor(i)?.name(), course_name),
                ),
                Some(i) => LinkOutcome::new(
                    LinkStatus::Linked,
                    format!(
                        "{} assigned to teach {}",
                        session.instructor(i)?.name(),
                        course_name
                    ),
                ),
                None if previous.is_some() => LinkOutcome::new(
                    LinkStatus::Unlinked,
                    format!("{} has no instructor", course_name),
                ),
                None => LinkOutcome::new(
                    LinkStatus::NotLinked,
                    format!("{} has no instructor", course_name),
                ),
            };
            Ok(outcome)
        }

        Command::DropCourse { student, course } => {
            let student = student.expect_student()?;
            let course = course.expect_course()?;
            enrollment::drop_course(session, student, course)
        }

        Command::UnassignCourse { instructor, course } => {
            let instructor = instructor.expect_instructor()?;
            let course = course.expect_course()?;
            teaching::unassign_course(session, instructor, course)
        }

        Command::UnlinkEverything { entity } => {
            let (removed, label) = match entity {
                EntityRef::Student(s) => (
                    unlink::unlink_student_from_everything(session, s)?,
                    session.student(s)?.name().to_string(),
                ),
                EntityRef::Instructor(i) => (
                    unlink::unlink_instructor_from_everything(session, i)?,
                    session.instructor(i)?.name().to_string(),
                ),
                EntityRef::Course(c) => (
                    unlink::unlink_course_from_everything(session, c)?,
                    session.course(c)?.course_name().to_string(),
                ),
            };
            let status = if removed > 0 {
                LinkStatus::Unlinked
            } else {
                LinkStatus::NotLinked
            };
            Ok(LinkOutcome::new(
                status,
                format!("{} unlinked from {} relationship(s)", label, removed),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RosterError;
    use crate::model::{Course, EntityKind, Instructor, Student};

    #[test]
    fn test_wrong_kind_is_type_conflict_without_mutation() {
        let mut session = Session::new();
        let s = session
            .insert_student(Student::new("Ada", 20, "ada@example.org", "S1").unwrap())
            .unwrap();
        let i = session
            .insert_instructor(Instructor::new("Grace", 45, "grace@navy.mil", "I1").unwrap())
            .unwrap();

        let err = apply(
            &mut session,
            Command::Register {
                student: EntityRef::Student(s),
                course: EntityRef::Instructor(i),
            },
        )
        .unwrap_err();

        assert_eq!(
            err,
            RosterError::TypeConflict {
                expected: EntityKind::Course,
                found: EntityKind::Instructor,
            }
        );
        assert!(session.student(s).unwrap().registered_courses().is_empty());
    }

    #[test]
    fn test_set_instructor_clear() {
        let mut session = Session::new();
        let i = session
            .insert_instructor(Instructor::new("Grace", 45, "grace@navy.mil", "I1").unwrap())
            .unwrap();
        let c = session.insert_course(Course::new("C1", "Math").unwrap()).unwrap();

        let set = apply(
            &mut session,
            Command::SetInstructor {
                course: EntityRef::Course(c),
                instructor: Some(EntityRef::Instructor(i)),
            },
        )
        .unwrap();
        assert_eq!(set.status, LinkStatus::Linked);

        let cleared = apply(
            &mut session,
            Command::SetInstructor {
                course: EntityRef::Course(c),
                instructor: None,
            },
        )
        .unwrap();
        assert_eq!(cleared.status, LinkStatus::Unlinked);
        assert!(session.instructor(i).unwrap().assigned_courses().is_empty());
    }
}
