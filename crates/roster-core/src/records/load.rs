//! Two-phase reconstruction of a session from records
//!
//! Phase 1 builds every entity from its scalar fields. Phase 2 resolves the
//! identifier lists into handles and links them through the same functions
//! the interactive operations use, so each link is added at most once no
//! matter how many records mention it.
//!
//! A reference to an identifier that does not exist is skipped, never an
//! error. Every skipped link is reported in the returned [`LoadReport`].

use std::collections::HashMap;

use crate::errors::Result;
use crate::model::{
    Course, CourseHandle, EntityKind, Instructor, InstructorHandle, Student, StudentHandle,
};
use crate::ops::{enrollment, teaching, Session};

use super::view::SchoolRecords;

/// Why a link named in the records was not restored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// The referenced identifier does not exist
    Unresolved,
    /// The course is already taught by a different instructor
    InstructorConflict,
}

/// One link named by a record that the load skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedLink {
    pub from_kind: EntityKind,
    pub from_id: String,
    pub to_kind: EntityKind,
    pub to_id: String,
    pub reason: DropReason,
}

/// Summary of a load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub dropped: Vec<DroppedLink>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty()
    }

    fn drop_link(
        &mut self,
        from: (EntityKind, &str),
        to: (EntityKind, &str),
        reason: DropReason,
    ) {
        self.dropped.push(DroppedLink {
            from_kind: from.0,
            from_id: from.1.to_string(),
            to_kind: to.0,
            to_id: to.1.to_string(),
            reason,
        });
    }
}

/// Rebuild a session from records
///
/// # Errors
/// * `Validation` - If any scalar field of any record is invalid
/// * `AlreadyExists` - If two records of the same kind share an identifier
pub fn load_records(records: &SchoolRecords) -> Result<(Session, LoadReport)> {
    let mut session = Session::new();
    let mut students: HashMap<&str, StudentHandle> = HashMap::new();
    let mut instructors: HashMap<&str, InstructorHandle> = HashMap::new();
    let mut courses: HashMap<&str, CourseHandle> = HashMap::new();

    // Phase 1: scalars only
    for record in &records.students {
        let handle = session.insert_student(Student::from_record(record)?)?;
        students.insert(record.student_id.trim(), handle);
    }
    for record in &records.instructors {
        let handle = session.insert_instructor(Instructor::from_record(record)?)?;
        instructors.insert(record.instructor_id.trim(), handle);
    }
    for record in &records.courses {
        let handle = session.insert_course(Course::from_record(record)?)?;
        courses.insert(record.course_id.trim(), handle);
    }

    let mut report = LoadReport::default();

    // Phase 2a: course -> instructor
    for record in &records.courses {
        let Some(instructor_id) = record.instructor_id.as_deref() else {
            continue;
        };
        let course = courses[record.course_id.trim()];
        match instructors.get(instructor_id.trim()) {
            Some(&instructor) => teaching::set_instructor(&mut session, course, Some(instructor))?,
            None => report.drop_link(
                (EntityKind::Course, &record.course_id),
                (EntityKind::Instructor, instructor_id),
                DropReason::Unresolved,
            ),
        }
    }

    // Phase 2b: course -> students
    for record in &records.courses {
        let course = courses[record.course_id.trim()];
        for student_id in &record.enrolled_student_ids {
            match students.get(student_id.trim()) {
                Some(&student) => {
                    enrollment::link(&mut session, student, course)?;
                }
                None => report.drop_link(
                    (EntityKind::Course, &record.course_id),
                    (EntityKind::Student, student_id),
                    DropReason::Unresolved,
                ),
            }
        }
    }

    // Phase 2c: student -> courses
    for record in &records.students {
        let student = students[record.student_id.trim()];
        for course_id in &record.registered_course_ids {
            match courses.get(course_id.trim()) {
                Some(&course) => {
                    enrollment::link(&mut session, student, course)?;
                }
                None => report.drop_link(
                    (EntityKind::Student, &record.student_id),
                    (EntityKind::Course, course_id),
                    DropReason::Unresolved,
                ),
            }
        }
    }

    // Phase 2d: instructor -> courses, never overriding another instructor
    for record in &records.instructors {
        let instructor = instructors[record.instructor_id.trim()];
        for course_id in &record.assigned_course_ids {
            let Some(&course) = courses.get(course_id.trim()) else {
                report.drop_link(
                    (EntityKind::Instructor, &record.instructor_id),
                    (EntityKind::Course, course_id),
                    DropReason::Unresolved,
                );
                continue;
            };
            let current = session.course(course)?.instructor();
            match current {
                Some(holder) if holder != instructor => report.drop_link(
                    (EntityKind::Instructor, &record.instructor_id),
                    (EntityKind::Course, course_id),
                    DropReason::InstructorConflict,
                ),
                _ => teaching::set_instructor(&mut session, course, Some(instructor))?,
            }
        }
    }

    if !report.is_clean() {
        tracing::warn!(
            component = module_path!(),
            op = "load_records",
            dropped_links = report.dropped.len(),
            "records referenced missing or conflicting entities; links skipped"
        );
        for dropped in &report.dropped {
            tracing::debug!(
                component = module_path!(),
                op = "load_records",
                from = %format!("{} {}", dropped.from_kind, dropped.from_id),
                to = %format!("{} {}", dropped.to_kind, dropped.to_id),
                reason = ?dropped.reason,
                "link skipped"
            );
        }
    }

    Ok((session, report))
}
