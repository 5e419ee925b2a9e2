use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, RosterError};

/// The three entity kinds a session owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Student,
    Instructor,
    Course,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Student => "student",
            EntityKind::Instructor => "instructor",
            EntityKind::Course => "course",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! entity_handle {
    ($(#[$doc:meta])* $name:ident, $kind:expr) => {
        $(#[$doc])*
        ///
        /// Only meaningful to the session that issued it. Another session
        /// reports it as an unknown handle.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name {
            session: u64,
            raw: u64,
        }

        impl $name {
            pub(crate) fn new(session: u64, raw: u64) -> Self {
                Self { session, raw }
            }

            /// Raw handle value (stable for the lifetime of the session)
            pub fn raw(self) -> u64 {
                self.raw
            }

            pub const KIND: EntityKind = $kind;
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", $kind, self.raw)
            }
        }
    };
}

entity_handle!(
    /// Non-owning reference to a Student held by a `Session`
    StudentHandle,
    EntityKind::Student
);
entity_handle!(
    /// Non-owning reference to an Instructor held by a `Session`
    InstructorHandle,
    EntityKind::Instructor
);
entity_handle!(
    /// Non-owning reference to a Course held by a `Session`
    CourseHandle,
    EntityKind::Course
);

/// A handle of any kind
///
/// Used at the dynamically-typed command boundary, where the kind of each
/// argument is only known at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Student(StudentHandle),
    Instructor(InstructorHandle),
    Course(CourseHandle),
}

impl EntityRef {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Student(_) => EntityKind::Student,
            EntityRef::Instructor(_) => EntityKind::Instructor,
            EntityRef::Course(_) => EntityKind::Course,
        }
    }

    /// Narrow to a student handle
    ///
    /// # Errors
    /// `TypeConflict` if this is not a student.
    pub fn expect_student(self) -> Result<StudentHandle> {
        match self {
            EntityRef::Student(h) => Ok(h),
            other => Err(type_conflict(EntityKind::Student, other)),
        }
    }

    /// Narrow to an instructor handle
    ///
    /// # Errors
    /// `TypeConflict` if this is not an instructor.
    pub fn expect_instructor(self) -> Result<InstructorHandle> {
        match self {
            EntityRef::Instructor(h) => Ok(h),
            other => Err(type_conflict(EntityKind::Instructor, other)),
        }
    }

    /// Narrow to a course handle
    ///
    /// # Errors
    /// `TypeConflict` if this is not a course.
    pub fn expect_course(self) -> Result<CourseHandle> {
        match self {
            EntityRef::Course(h) => Ok(h),
            other => Err(type_conflict(EntityKind::Course, other)),
        }
    }
}

fn type_conflict(expected: EntityKind, found: EntityRef) -> RosterError {
    RosterError::TypeConflict {
        expected,
        found: found.kind(),
    }
}

impl From<StudentHandle> for EntityRef {
    fn from(h: StudentHandle) -> Self {
        EntityRef::Student(h)
    }
}

impl From<InstructorHandle> for EntityRef {
    fn from(h: InstructorHandle) -> Self {
        EntityRef::Instructor(h)
    }
}

impl From<CourseHandle> for EntityRef {
    fn from(h: CourseHandle) -> Self {
        EntityRef::Course(h)
    }
}
