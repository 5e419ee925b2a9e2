use serde::{Deserialize, Serialize};

use crate::model::{Course, Instructor, Personal, Student};
use crate::ops::Session;

/// Serialized form of a student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub age: i64,
    pub email: String,
    pub student_id: String,
    #[serde(default)]
    pub registered_course_ids: Vec<String>,
}

/// Serialized form of an instructor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorRecord {
    pub name: String,
    pub age: i64,
    pub email: String,
    pub instructor_id: String,
    #[serde(default)]
    pub assigned_course_ids: Vec<String>,
}

/// Serialized form of a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub course_id: String,
    pub course_name: String,
    #[serde(default)]
    pub instructor_id: Option<String>,
    #[serde(default)]
    pub enrolled_student_ids: Vec<String>,
}

/// The whole school as one document
///
/// Missing top-level keys read as empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolRecords {
    #[serde(default)]
    pub students: Vec<StudentRecord>,
    #[serde(default)]
    pub instructors: Vec<InstructorRecord>,
    #[serde(default)]
    pub courses: Vec<CourseRecord>,
}

impl SchoolRecords {
    pub fn is_empty(&self) -> bool {
        self.students.is_empty() && self.instructors.is_empty() && self.courses.is_empty()
    }
}

impl StudentRecord {
    pub fn from_student(session: &Session, student: &Student) -> Self {
        Self {
            name: student.name().to_string(),
            age: i64::from(student.age()),
            email: student.email().to_string(),
            student_id: student.student_id().to_string(),
            registered_course_ids: student
                .registered_courses()
                .iter()
                .filter_map(|h| session.course(*h).ok())
                .map(|c| c.course_id().to_string())
                .collect(),
        }
    }
}

impl InstructorRecord {
    pub fn from_instructor(session: &Session, instructor: &Instructor) -> Self {
        Self {
            name: instructor.name().to_string(),
            age: i64::from(instructor.age()),
            email: instructor.email().to_string(),
            instructor_id: instructor.instructor_id().to_string(),
            assigned_course_ids: instructor
                .assigned_courses()
                .iter()
                .filter_map(|h| session.course(*h).ok())
                .map(|c| c.course_id().to_string())
                .collect(),
        }
    }
}

impl CourseRecord {
    pub fn from_course(session: &Session, course: &Course) -> Self {
        Self {
            course_id: course.course_id().to_string(),
            course_name: course.course_name().to_string(),
            instructor_id: course
                .instructor()
                .and_then(|h| session.instructor(h).ok())
                .map(|i| i.instructor_id().to_string()),
            enrolled_student_ids: course
                .enrolled_students()
                .iter()
                .filter_map(|h| session.student(*h).ok())
                .map(|s| s.student_id().to_string())
                .collect(),
        }
    }
}

impl Session {
    /// Flatten the session into identifier-based records
    ///
    /// Entities appear in handle order and relationship lists keep their
    /// insertion order.
    pub fn to_records(&self) -> SchoolRecords {
        SchoolRecords {
            students: self
                .students()
                .map(|(_, s)| StudentRecord::from_student(self, s))
                .collect(),
            instructors: self
                .instructors()
                .map(|(_, i)| InstructorRecord::from_instructor(self, i))
                .collect(),
            courses: self
                .courses()
                .map(|(_, c)| CourseRecord::from_course(self, c))
                .collect(),
        }
    }
}
