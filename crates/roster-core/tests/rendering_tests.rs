mod common;

use common::{add_course, add_instructor, add_student, new_session};
use roster_core::ops::{enrollment, teaching};
use roster_core::render::{self, ColumnFilter, Table, TableKind};

// ===== ENTITY RENDER TESTS =====

#[test]
fn test_render_student_lists_courses_in_registration_order() {
    let mut session = new_session();
    let ada = add_student(&mut session, "S1", "Ada");
    let db = add_course(&mut session, "DB1", "Databases");
    let os = add_course(&mut session, "OS1", "Operating Systems");
    enrollment::register(&mut session, ada, os).unwrap();
    enrollment::register(&mut session, ada, db).unwrap();

    let output = render::render_student(&session, ada).unwrap();

    assert!(output.starts_with("# Ada (S1)\n\n"));
    assert!(output.contains("Hi, my name is Ada, I am 20 years old."));
    let os_pos = output.find("- OS1 Operating Systems").unwrap();
    let db_pos = output.find("- DB1 Databases").unwrap();
    assert!(os_pos < db_pos);
}

#[test]
fn test_render_instructor_without_courses() {
    let mut session = new_session();
    let grace = add_instructor(&mut session, "I1", "Grace");

    let output = render::render_instructor(&session, grace).unwrap();

    assert!(output.contains("## Assigned Courses\n\nNone\n"));
}

#[test]
fn test_render_course_shows_instructor_and_roster() {
    let mut session = new_session();
    let ada = add_student(&mut session, "S1", "Ada");
    let bob = add_student(&mut session, "S2", "Bob");
    let grace = add_instructor(&mut session, "I1", "Grace");
    let c = add_course(&mut session, "CS101", "Intro");
    enrollment::add_student(&mut session, c, ada).unwrap();
    enrollment::add_student(&mut session, c, bob).unwrap();
    teaching::assign_course(&mut session, grace, c).unwrap();

    let output = render::render_course(&session, c).unwrap();

    assert!(output.contains("**Instructor**: Grace (I1)"));
    assert!(output.contains("## Enrolled Students (2)"));
    assert!(output.contains("- S1 Ada\n- S2 Bob\n"));
}

#[test]
fn test_render_is_deterministic() {
    let mut session = new_session();
    let ada = add_student(&mut session, "S1", "Ada");
    let c = add_course(&mut session, "CS101", "Intro");
    enrollment::register(&mut session, ada, c).unwrap();

    let first = render::render_course(&session, c).unwrap();
    let second = render::render_course(&session, c).unwrap();
    assert_eq!(first, second);
}

// ===== TABLE TESTS =====

#[test]
fn test_student_table_formats_course_list() {
    let mut session = new_session();
    let ada = add_student(&mut session, "S1", "Ada");
    let a = add_course(&mut session, "A1", "Art");
    let m = add_course(&mut session, "M1", "Math");
    enrollment::register(&mut session, ada, m).unwrap();
    enrollment::register(&mut session, ada, a).unwrap();

    let table = Table::build(&session, TableKind::Students);

    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0][4], "Math M1, Art A1");
}

#[test]
fn test_course_table_with_filters() {
    let mut session = new_session();
    let ada = add_student(&mut session, "S1", "Ada");
    let grace = add_instructor(&mut session, "I1", "Grace");
    let c1 = add_course(&mut session, "C1", "Compilers");
    add_course(&mut session, "C2", "Databases");
    enrollment::register(&mut session, ada, c1).unwrap();
    teaching::assign_course(&mut session, grace, c1).unwrap();

    let filters = vec![
        ColumnFilter::parse(TableKind::Courses, "instructor=GRACE").unwrap(),
        ColumnFilter::parse(TableKind::Courses, "students=s1-").unwrap(),
    ];
    let table = Table::build(&session, TableKind::Courses).filtered(&filters);

    assert_eq!(table.rows.len(), 1);
    assert_eq!(
        table.to_markdown(),
        "| Course ID | Course Name | Instructor | Enrolled Students |\n\
         |---|---|---|---|\n\
         | C1 | Compilers | Grace | S1-Ada |\n"
    );
}

#[test]
fn test_unknown_filter_column_is_rejected() {
    assert!(ColumnFilter::parse(TableKind::Students, "instructor=x").is_err());
    assert!(ColumnFilter::parse(TableKind::Students, "no-equals-sign").is_err());
}
