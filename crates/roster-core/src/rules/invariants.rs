use std::collections::HashSet;
use std::hash::Hash;

use crate::model::EntityKind;
use crate::ops::Session;

/// Find enrollments recorded on only one side
///
/// Returns list of (student_id, course_id) tuples. Links whose other end is
/// missing from the session are left to [`find_dangling_handles`].
pub fn find_enrollment_mismatches(session: &Session) -> Vec<(String, String)> {
    let mut mismatches = Vec::new();

    for (sh, student) in session.students() {
        for ch in student.registered_courses() {
            if let Ok(course) = session.course(*ch) {
                if !course.has_student(sh) {
                    mismatches.push((
                        student.student_id().to_string(),
                        course.course_id().to_string(),
                    ));
                }
            }
        }
    }

    for (ch, course) in session.courses() {
        for sh in course.enrolled_students() {
            if let Ok(student) = session.student(*sh) {
                if !student.is_registered_in(ch) {
                    mismatches.push((
                        student.student_id().to_string(),
                        course.course_id().to_string(),
                    ));
                }
            }
        }
    }

    mismatches
}

/// Find teaching links recorded on only one side
///
/// Covers both a course naming an instructor that does not list it and an
/// instructor listing a course that names someone else (or nobody).
///
/// Returns list of (instructor_id, course_id) tuples
pub fn find_teaching_mismatches(session: &Session) -> Vec<(String, String)> {
    let mut mismatches = Vec::new();

    for (ch, course) in session.courses() {
        if let Some(ih) = course.instructor() {
            if let Ok(instructor) = session.instructor(ih) {
                if !instructor.teaches(ch) {
                    mismatches.push((
                        instructor.instructor_id().to_string(),
                        course.course_id().to_string(),
                    ));
                }
            }
        }
    }

    for (ih, instructor) in session.instructors() {
        for ch in instructor.assigned_courses() {
            if let Ok(course) = session.course(*ch) {
                if course.instructor() != Some(ih) {
                    mismatches.push((
                        instructor.instructor_id().to_string(),
                        course.course_id().to_string(),
                    ));
                }
            }
        }
    }

    mismatches
}

/// Find relationship entries pointing at entities not in the session
///
/// Returns list of (kind, raw handle) tuples for the missing targets
pub fn find_dangling_handles(session: &Session) -> Vec<(EntityKind, u64)> {
    let mut dangling = Vec::new();

    for (_, student) in session.students() {
        for ch in student.registered_courses() {
            if session.course(*ch).is_err() {
                dangling.push((EntityKind::Course, ch.raw()));
            }
        }
    }

    for (_, instructor) in session.instructors() {
        for ch in instructor.assigned_courses() {
            if session.course(*ch).is_err() {
                dangling.push((EntityKind::Course, ch.raw()));
            }
        }
    }

    for (_, course) in session.courses() {
        if let Some(ih) = course.instructor() {
            if session.instructor(ih).is_err() {
                dangling.push((EntityKind::Instructor, ih.raw()));
            }
        }
        for sh in course.enrolled_students() {
            if session.student(*sh).is_err() {
                dangling.push((EntityKind::Student, sh.raw()));
            }
        }
    }

    dangling
}

/// Find entities whose relationship list repeats a handle
///
/// Returns list of (kind, id) tuples for the owning entity
pub fn find_duplicate_links(session: &Session) -> Vec<(EntityKind, String)> {
    let mut duplicates = Vec::new();

    for (_, student) in session.students() {
        if has_repeats(student.registered_courses()) {
            duplicates.push((EntityKind::Student, student.student_id().to_string()));
        }
    }
    for (_, instructor) in session.instructors() {
        if has_repeats(instructor.assigned_courses()) {
            duplicates.push((
                EntityKind::Instructor,
                instructor.instructor_id().to_string(),
            ));
        }
    }
    for (_, course) in session.courses() {
        if has_repeats(course.enrolled_students()) {
            duplicates.push((EntityKind::Course, course.course_id().to_string()));
        }
    }

    duplicates
}

fn has_repeats<T: Eq + Hash>(items: &[T]) -> bool {
    let mut seen = HashSet::new();
    items.iter().any(|item| !seen.insert(item))
}
