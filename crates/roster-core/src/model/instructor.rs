use super::handle::CourseHandle;
use super::person::{Person, Personal};
use crate::errors::Result;
use crate::records::InstructorRecord;
use crate::rules::fields::require_identifier;

/// A person teaching at the school
///
/// Every course in `assigned_courses` names this instructor as its
/// instructor; a course appears in at most one instructor's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructor {
    person: Person,
    instructor_id: String,
    pub(crate) assigned_courses: Vec<CourseHandle>,
}

impl Instructor {
    /// Create an instructor with no assigned courses
    ///
    /// # Errors
    /// `Validation` if any field fails its check.
    pub fn new(name: &str, age: i64, email: &str, instructor_id: &str) -> Result<Self> {
        let person = Person::new(name, age, email)?;
        Ok(Self {
            person,
            instructor_id: require_identifier(instructor_id, "instructor_id")?,
            assigned_courses: Vec::new(),
        })
    }

    /// Build from the scalar part of a record; course ids are wired later
    ///
    /// # Errors
    /// `Validation` if any scalar field fails its check.
    pub fn from_record(record: &InstructorRecord) -> Result<Self> {
        Self::new(
            &record.name,
            record.age,
            &record.email,
            &record.instructor_id,
        )
    }

    pub fn instructor_id(&self) -> &str {
        &self.instructor_id
    }

    pub fn assigned_courses(&self) -> &[CourseHandle] {
        &self.assigned_courses
    }

    pub fn teaches(&self, course: CourseHandle) -> bool {
        self.assigned_courses.contains(&course)
    }
}

impl Personal for Instructor {
    fn person(&self) -> &Person {
        &self.person
    }

    fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}
