use super::handle::CourseHandle;
use super::person::{Person, Personal};
use crate::errors::Result;
use crate::records::StudentRecord;
use crate::rules::fields::require_identifier;

/// A person enrolled at the school
///
/// `registered_courses` is ordered by registration time and never holds the
/// same course twice. It is only mutated by the enrollment operations, which
/// update the course side in the same call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    person: Person,
    student_id: String,
    pub(crate) registered_courses: Vec<CourseHandle>,
}

impl Student {
    /// Create a student with no registrations
    ///
    /// # Errors
    /// `Validation` if any field fails its check.
    pub fn new(name: &str, age: i64, email: &str, student_id: &str) -> Result<Self> {
        let person = Person::new(name, age, email)?;
        Ok(Self {
            person,
            student_id: require_identifier(student_id, "student_id")?,
            registered_courses: Vec::new(),
        })
    }

    /// Build from the scalar part of a record; course ids are wired later
    ///
    /// # Errors
    /// `Validation` if any scalar field fails its check.
    pub fn from_record(record: &StudentRecord) -> Result<Self> {
        Self::new(&record.name, record.age, &record.email, &record.student_id)
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn registered_courses(&self) -> &[CourseHandle] {
        &self.registered_courses
    }

    pub fn is_registered_in(&self, course: CourseHandle) -> bool {
        self.registered_courses.contains(&course)
    }
}

impl Personal for Student {
    fn person(&self) -> &Person {
        &self.person
    }

    fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}
