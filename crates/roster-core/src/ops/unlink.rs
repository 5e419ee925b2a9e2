//! Remove every relationship an entity participates in
//!
//! Callers run these before `Session::remove_*`, which refuses to remove a
//! linked entity.

use super::session::Session;
use super::{enrollment, teaching};
use crate::errors::Result;
use crate::model::{CourseHandle, InstructorHandle, StudentHandle};

/// Drop the student from every course it is registered in
///
/// Returns the number of links removed.
///
/// # Errors
/// `UnknownHandle` if the student is not in the session.
pub fn unlink_student_from_everything(
    session: &mut Session,
    student: StudentHandle,
) -> Result<usize> {
    let courses = session.student(student)?.registered_courses().to_vec();
    let mut removed = 0;
    for course in courses {
        if enrollment::unlink(session, student, course)? {
            removed += 1;
        }
    }
    Ok(removed)
}

/// Clear this instructor from every course it teaches
///
/// # Errors
/// `UnknownHandle` if the instructor is not in the session.
pub fn unlink_instructor_from_everything(
    session: &mut Session,
    instructor: InstructorHandle,
) -> Result<usize> {
    let courses = session.instructor(instructor)?.assigned_courses().to_vec();
    let mut removed = 0;
    for course in courses {
        if session.course(course)?.instructor() == Some(instructor) {
            teaching::set_instructor(session, course, None)?;
            removed += 1;
        }
    }
    // Anything left was one-sided; drop it so nothing points at a removed course
    session.instructor_mut(instructor)?.assigned_courses.clear();
    Ok(removed)
}

/// Remove the course's instructor and every enrolled student
///
/// # Errors
/// `UnknownHandle` if the course is not in the session.
pub fn unlink_course_from_everything(session: &mut Session, course: CourseHandle) -> Result<usize> {
    let c = session.course(course)?;
    let students = c.enrolled_students().to_vec();
    let instructor = c.instructor();

    let mut removed = 0;
    for student in students {
        if enrollment::unlink(session, student, course)? {
            removed += 1;
        }
    }
    if instructor.is_some() {
        teaching::set_instructor(session, course, None)?;
        removed += 1;
    }
    Ok(removed)
}
