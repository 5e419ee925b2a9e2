use roster_core::{
    Course, CourseHandle, Instructor, InstructorHandle, Session, Student, StudentHandle,
};

/// Create a new empty Session for testing
#[allow(dead_code)]
pub fn new_session() -> Session {
    Session::new()
}

/// Insert a student with a derived name and email
#[allow(dead_code)]
pub fn add_student(session: &mut Session, id: &str, name: &str) -> StudentHandle {
    let email = format!("{}@school.example", id.to_lowercase());
    session
        .insert_student(Student::new(name, 20, &email, id).expect("valid student"))
        .expect("unique student id")
}

/// Insert an instructor with a derived email
#[allow(dead_code)]
pub fn add_instructor(session: &mut Session, id: &str, name: &str) -> InstructorHandle {
    let email = format!("{}@school.example", id.to_lowercase());
    session
        .insert_instructor(Instructor::new(name, 40, &email, id).expect("valid instructor"))
        .expect("unique instructor id")
}

/// Insert a course
#[allow(dead_code)]
pub fn add_course(session: &mut Session, id: &str, name: &str) -> CourseHandle {
    session
        .insert_course(Course::new(id, name).expect("valid course"))
        .expect("unique course id")
}

/// Panic unless every relationship invariant holds
#[allow(dead_code)]
pub fn assert_consistent(session: &Session) {
    if let Err(e) = roster_core::rules::validate_session(session) {
        panic!("session is inconsistent: {}", e);
    }
}
