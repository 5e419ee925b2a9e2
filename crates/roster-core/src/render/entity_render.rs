use crate::errors::Result;
use crate::model::{CourseHandle, InstructorHandle, Personal, StudentHandle};
use crate::ops::Session;

/// Render a student profile to Markdown
///
/// Generates:
/// - Name and id as H1
/// - The introduction line
/// - Age and email
/// - Registered courses in registration order
///
/// # Errors
/// * `UnknownHandle` - If the student is not in the session
pub fn render_student(session: &Session, handle: StudentHandle) -> Result<String> {
    let student = session.student(handle)?;

    let mut output = String::new();
    output.push_str(&format!("# {} ({})\n\n", student.name(), student.student_id()));
    output.push_str(&format!("{}\n\n", student.introduce()));
    output.push_str(&format!("**Age**: {}\n\n", student.age()));
    output.push_str(&format!("**Email**: {}\n\n", student.email()));

    output.push_str("## Registered Courses\n\n");
    if student.registered_courses().is_empty() {
        output.push_str("None\n");
    }
    for ch in student.registered_courses() {
        let course = session.course(*ch)?;
        output.push_str(&format!(
            "- {} {}\n",
            course.course_id(),
            course.course_name()
        ));
    }

    Ok(output)
}

/// Render an instructor profile to Markdown
///
/// # Errors
/// * `UnknownHandle` - If the instructor is not in the session
pub fn render_instructor(session: &Session, handle: InstructorHandle) -> Result<String> {
    let instructor = session.instructor(handle)?;

    let mut output = String::new();
    output.push_str(&format!(
        "# {} ({})\n\n",
        instructor.name(),
        instructor.instructor_id()
    ));
    output.push_str(&format!("{}\n\n", instructor.introduce()));
    output.push_str(&format!("**Age**: {}\n\n", instructor.age()));
    output.push_str(&format!("**Email**: {}\n\n", instructor.email()));

    output.push_str("## Assigned Courses\n\n");
    if instructor.assigned_courses().is_empty() {
        output.push_str("None\n");
    }
    for ch in instructor.assigned_courses() {
        let course = session.course(*ch)?;
        output.push_str(&format!(
            "- {} {}\n",
            course.course_id(),
            course.course_name()
        ));
    }

    Ok(output)
}

/// Render a course with its instructor and roster to Markdown
///
/// # Errors
/// * `UnknownHandle` - If the course is not in the session
pub fn render_course(session: &Session, handle: CourseHandle) -> Result<String> {
    let course = session.course(handle)?;

    let mut output = String::new();
    output.push_str(&format!(
        "# {} ({})\n\n",
        course.course_name(),
        course.course_id()
    ));

    match course.instructor() {
        Some(ih) => {
            let instructor = session.instructor(ih)?;
            output.push_str(&format!(
                "**Instructor**: {} ({})\n\n",
                instructor.name(),
                instructor.instructor_id()
            ));
        }
        None => output.push_str("**Instructor**: none\n\n"),
    }

    output.push_str(&format!(
        "## Enrolled Students ({})\n\n",
        course.enrolled_students().len()
    ));
    for sh in course.enrolled_students() {
        let student = session.student(*sh)?;
        output.push_str(&format!("- {} {}\n", student.student_id(), student.name()));
    }

    Ok(output)
}
