pub mod course;
pub mod handle;
pub mod instructor;
pub mod person;
pub mod student;

pub use course::Course;
pub use handle::{CourseHandle, EntityKind, EntityRef, InstructorHandle, StudentHandle};
pub use instructor::Instructor;
pub use person::{Person, PersonEdit, Personal};
pub use student::Student;
