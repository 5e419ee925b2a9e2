use super::handle::{InstructorHandle, StudentHandle};
use crate::errors::Result;
use crate::records::CourseRecord;
use crate::rules::fields::{require_identifier, require_nonempty_string};

/// A course offered by the school
///
/// Holds at most one instructor and an ordered, duplicate-free list of
/// enrolled students. Both back-references are maintained by the operations in
/// `ops::teaching` and `ops::enrollment`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    course_id: String,
    course_name: String,
    pub(crate) instructor: Option<InstructorHandle>,
    pub(crate) enrolled_students: Vec<StudentHandle>,
}

impl Course {
    /// Create a course with no instructor and no students
    ///
    /// # Errors
    /// `Validation` if the id or the name fails its check.
    pub fn new(course_id: &str, course_name: &str) -> Result<Self> {
        Ok(Self {
            course_id: require_identifier(course_id, "course_id")?,
            course_name: require_nonempty_string(course_name, "course_name")?,
            instructor: None,
            enrolled_students: Vec::new(),
        })
    }

    /// Build from the scalar part of a record; links are wired later
    ///
    /// # Errors
    /// `Validation` if the id or the name fails its check.
    pub fn from_record(record: &CourseRecord) -> Result<Self> {
        Self::new(&record.course_id, &record.course_name)
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    /// # Errors
    /// `Validation` if `name` is blank; the old name is kept.
    pub fn set_course_name(&mut self, name: &str) -> Result<()> {
        self.course_name = require_nonempty_string(name, "course_name")?;
        Ok(())
    }

    pub fn instructor(&self) -> Option<InstructorHandle> {
        self.instructor
    }

    pub fn enrolled_students(&self) -> &[StudentHandle] {
        &self.enrolled_students
    }

    pub fn has_student(&self, student: StudentHandle) -> bool {
        self.enrolled_students.contains(&student)
    }

    /// Number of relationship links this course participates in
    pub fn link_count(&self) -> usize {
        self.enrolled_students.len() + usize::from(self.instructor.is_some())
    }
}
