//! Student/course enrollment (many-to-many)
//!
//! `register` and `add_student` are the two public faces of the same link;
//! both go through [`link`] so the student and course sides can never drift
//! apart. `drop_course` goes through [`unlink`].

use super::session::Session;
use super::{LinkOutcome, LinkStatus};
use crate::errors::Result;
use crate::model::{CourseHandle, Personal, StudentHandle};

/// Register a student for a course
///
/// Idempotent: registering twice leaves a single link and reports
/// `AlreadyLinked`.
///
/// # Arguments
/// * `session` - Session owning both entities
/// * `student` - Student to register
/// * `course` - Course to register for
///
/// # Errors
/// `UnknownHandle` if either handle is not in the session. Nothing is
/// mutated on error.
pub fn register(
    session: &mut Session,
    student: StudentHandle,
    course: CourseHandle,
) -> Result<LinkOutcome> {
    let (name, course_name) = names(session, student, course)?;
    let outcome = if link(session, student, course)? {
        LinkOutcome::new(
            LinkStatus::Linked,
            format!("{} registered for {}", name, course_name),
        )
    } else {
        LinkOutcome::new(
            LinkStatus::AlreadyLinked,
            format!("{} is already registered in {}", name, course_name),
        )
    };
    Ok(outcome)
}

/// Enroll a student in a course, from the course side
///
/// Produces the same link as [`register`]; only the messages differ.
///
/// # Errors
/// `UnknownHandle` if either handle is not in the session.
pub fn add_student(
    session: &mut Session,
    course: CourseHandle,
    student: StudentHandle,
) -> Result<LinkOutcome> {
    let (name, course_name) = names(session, student, course)?;
    let outcome = if link(session, student, course)? {
        LinkOutcome::new(
            LinkStatus::Linked,
            format!("{} enrolled in {}", name, course_name),
        )
    } else {
        LinkOutcome::new(
            LinkStatus::AlreadyLinked,
            format!("{} is already enrolled in {}", name, course_name),
        )
    };
    Ok(outcome)
}

/// Remove a student's registration in a course
///
/// Idempotent: dropping a course the student never took reports `NotLinked`.
///
/// # Errors
/// `UnknownHandle` if either handle is not in the session.
pub fn drop_course(
    session: &mut Session,
    student: StudentHandle,
    course: CourseHandle,
) -> Result<LinkOutcome> {
    let (name, course_name) = names(session, student, course)?;
    let outcome = if unlink(session, student, course)? {
        LinkOutcome::new(
            LinkStatus::Unlinked,
            format!("{} dropped {}", name, course_name),
        )
    } else {
        LinkOutcome::new(
            LinkStatus::NotLinked,
            format!("{} is not registered in {}", name, course_name),
        )
    };
    Ok(outcome)
}

fn names(
    session: &Session,
    student: StudentHandle,
    course: CourseHandle,
) -> Result<(String, String)> {
    let name = session.student(student)?.name().to_string();
    let course_name = session.course(course)?.course_name().to_string();
    Ok((name, course_name))
}

/// Ensure the link exists on both sides; returns true if anything changed
pub(crate) fn link(
    session: &mut Session,
    student: StudentHandle,
    course: CourseHandle,
) -> Result<bool> {
    let (s, c) = session.student_and_course_mut(student, course)?;
    let mut changed = false;
    if !s.registered_courses.contains(&course) {
        s.registered_courses.push(course);
        changed = true;
    }
    if !c.enrolled_students.contains(&student) {
        c.enrolled_students.push(student);
        changed = true;
    }
    Ok(changed)
}

/// Ensure the link is absent on both sides; returns true if anything changed
pub(crate) fn unlink(
    session: &mut Session,
    student: StudentHandle,
    course: CourseHandle,
) -> Result<bool> {
    let (s, c) = session.student_and_course_mut(student, course)?;
    let before = s.registered_courses.len() + c.enrolled_students.len();
    s.registered_courses.retain(|h| *h != course);
    c.enrolled_students.retain(|h| *h != student);
    Ok(s.registered_courses.len() + c.enrolled_students.len() != before)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RosterError;
    use crate::model::{Course, EntityKind, Student};

    fn setup() -> (Session, StudentHandle, CourseHandle) {
        let mut session = Session::new();
        let s = session
            .insert_student(Student::new("Ada", 20, "ada@example.org", "S1").unwrap())
            .unwrap();
        let c = session
            .insert_course(Course::new("CS101", "Intro").unwrap())
            .unwrap();
        (session, s, c)
    }

    #[test]
    fn test_register_links_both_sides() {
        let (mut session, s, c) = setup();
        let outcome = register(&mut session, s, c).unwrap();
        assert_eq!(outcome.status, LinkStatus::Linked);
        assert_eq!(outcome.message, "Ada registered for Intro");
        assert_eq!(session.student(s).unwrap().registered_courses(), &[c]);
        assert_eq!(session.course(c).unwrap().enrolled_students(), &[s]);
    }

    #[test]
    fn test_register_twice_is_idempotent() {
        let (mut session, s, c) = setup();
        register(&mut session, s, c).unwrap();
        let outcome = register(&mut session, s, c).unwrap();
        assert_eq!(outcome.status, LinkStatus::AlreadyLinked);
        assert_eq!(outcome.message, "Ada is already registered in Intro");
        assert_eq!(session.student(s).unwrap().registered_courses().len(), 1);
        assert_eq!(session.course(c).unwrap().enrolled_students().len(), 1);
    }

    #[test]
    fn test_add_student_after_register_reports_already_enrolled() {
        let (mut session, s, c) = setup();
        register(&mut session, s, c).unwrap();
        let outcome = add_student(&mut session, c, s).unwrap();
        assert_eq!(outcome.status, LinkStatus::AlreadyLinked);
        assert_eq!(outcome.message, "Ada is already enrolled in Intro");
    }

    #[test]
    fn test_add_student_message() {
        let (mut session, s, c) = setup();
        let outcome = add_student(&mut session, c, s).unwrap();
        assert_eq!(outcome.message, "Ada enrolled in Intro");
        assert!(session.student(s).unwrap().is_registered_in(c));
    }

    #[test]
    fn test_drop_course_unlinks_and_is_idempotent() {
        let (mut session, s, c) = setup();
        register(&mut session, s, c).unwrap();

        let first = drop_course(&mut session, s, c).unwrap();
        assert_eq!(first.status, LinkStatus::Unlinked);
        assert_eq!(first.message, "Ada dropped Intro");
        assert!(session.student(s).unwrap().registered_courses().is_empty());
        assert!(session.course(c).unwrap().enrolled_students().is_empty());

        let second = drop_course(&mut session, s, c).unwrap();
        assert_eq!(second.status, LinkStatus::NotLinked);
        assert_eq!(second.message, "Ada is not registered in Intro");
    }

    #[test]
    fn test_unknown_course_leaves_student_untouched() {
        let (mut session, s, c) = setup();
        session.remove_course(c).unwrap();
        let err = register(&mut session, s, c).unwrap_err();
        assert!(matches!(
            err,
            RosterError::UnknownHandle {
                kind: EntityKind::Course,
                ..
            }
        ));
        assert!(session.student(s).unwrap().registered_courses().is_empty());
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let (mut session, s, c1) = setup();
        let c2 = session
            .insert_course(Course::new("CS102", "Data").unwrap())
            .unwrap();
        register(&mut session, s, c2).unwrap();
        register(&mut session, s, c1).unwrap();
        assert_eq!(session.student(s).unwrap().registered_courses(), &[c2, c1]);
    }
}
