#![allow(dead_code)]

use roster_core::model::{Course, Instructor, Student};
use roster_core::ops::{enrollment, teaching};
use roster_core::{SchoolRecords, Session};

/// Two students, one instructor, two courses; Ada takes both, Bob takes Math
pub fn sample_session() -> Session {
    let mut session = Session::new();
    let ada = session
        .insert_student(Student::new("Ada", 20, "ada@example.org", "S1").unwrap())
        .unwrap();
    let bob = session
        .insert_student(Student::new("Bob", 22, "bob@example.org", "S2").unwrap())
        .unwrap();
    let grace = session
        .insert_instructor(Instructor::new("Grace", 45, "grace@navy.mil", "I1").unwrap())
        .unwrap();
    let math = session
        .insert_course(Course::new("M1", "Math").unwrap())
        .unwrap();
    let art = session
        .insert_course(Course::new("A1", "Art").unwrap())
        .unwrap();

    enrollment::register(&mut session, ada, math).unwrap();
    enrollment::register(&mut session, ada, art).unwrap();
    enrollment::register(&mut session, bob, math).unwrap();
    teaching::assign_course(&mut session, grace, math).unwrap();
    session
}

pub fn sample_records() -> SchoolRecords {
    sample_session().to_records()
}

/// Records with every id list sorted, for order-insensitive comparison
pub fn topology(records: &SchoolRecords) -> SchoolRecords {
    let mut r = records.clone();
    r.students.sort_by(|a, b| a.student_id.cmp(&b.student_id));
    r.instructors.sort_by(|a, b| a.instructor_id.cmp(&b.instructor_id));
    r.courses.sort_by(|a, b| a.course_id.cmp(&b.course_id));
    for s in &mut r.students {
        s.registered_course_ids.sort();
    }
    for i in &mut r.instructors {
        i.assigned_course_ids.sort();
    }
    for c in &mut r.courses {
        c.enrolled_student_ids.sort();
    }
    r
}
