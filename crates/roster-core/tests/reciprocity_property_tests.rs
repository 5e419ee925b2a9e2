//! Random operation sequences never break link reciprocity
mod common;

use common::{add_course, add_instructor, add_student, new_session};
use proptest::prelude::*;
use proptest::test_runner::Config;
use roster_core::ops::{enrollment, teaching, unlink};
use roster_core::rules::invariants;
use roster_core::{
    CourseHandle, InstructorHandle, RosterError, SchoolRecords, Session, StudentHandle,
};

#[derive(Debug, Clone)]
enum Op {
    Register(usize, usize),
    AddStudent(usize, usize),
    Drop(usize, usize),
    Assign(usize, usize),
    SetInstructor(usize, Option<usize>),
    Unassign(usize, usize),
    UnlinkStudent(usize),
    UnlinkInstructor(usize),
    UnlinkCourse(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..4usize, 0..3usize).prop_map(|(s, c)| Op::Register(s, c)),
        (0..4usize, 0..3usize).prop_map(|(s, c)| Op::AddStudent(s, c)),
        (0..4usize, 0..3usize).prop_map(|(s, c)| Op::Drop(s, c)),
        (0..2usize, 0..3usize).prop_map(|(i, c)| Op::Assign(i, c)),
        (0..3usize, proptest::option::of(0..2usize)).prop_map(|(c, i)| Op::SetInstructor(c, i)),
        (0..2usize, 0..3usize).prop_map(|(i, c)| Op::Unassign(i, c)),
        (0..4usize).prop_map(Op::UnlinkStudent),
        (0..2usize).prop_map(Op::UnlinkInstructor),
        (0..3usize).prop_map(Op::UnlinkCourse),
    ]
}

struct World {
    session: Session,
    students: Vec<StudentHandle>,
    instructors: Vec<InstructorHandle>,
    courses: Vec<CourseHandle>,
}

fn world() -> World {
    let mut session = new_session();
    let students = (0..4)
        .map(|n| add_student(&mut session, &format!("S{}", n), &format!("Student {}", n)))
        .collect();
    let instructors = (0..2)
        .map(|n| add_instructor(&mut session, &format!("I{}", n), &format!("Instructor {}", n)))
        .collect();
    let courses = (0..3)
        .map(|n| add_course(&mut session, &format!("C{}", n), &format!("Course {}", n)))
        .collect();
    World {
        session,
        students,
        instructors,
        courses,
    }
}

fn run(w: &mut World, op: &Op) {
    let s = &mut w.session;
    let result = match *op {
        Op::Register(a, b) => enrollment::register(s, w.students[a], w.courses[b]).map(|_| ()),
        Op::AddStudent(a, b) => enrollment::add_student(s, w.courses[b], w.students[a]).map(|_| ()),
        Op::Drop(a, b) => enrollment::drop_course(s, w.students[a], w.courses[b]).map(|_| ()),
        Op::Assign(a, b) => teaching::assign_course(s, w.instructors[a], w.courses[b]).map(|_| ()),
        Op::SetInstructor(c, i) => {
            teaching::set_instructor(s, w.courses[c], i.map(|i| w.instructors[i]))
        }
        Op::Unassign(a, b) => teaching::unassign_course(s, w.instructors[a], w.courses[b]).map(|_| ()),
        Op::UnlinkStudent(a) => unlink::unlink_student_from_everything(s, w.students[a]).map(|_| ()),
        Op::UnlinkInstructor(a) => {
            unlink::unlink_instructor_from_everything(s, w.instructors[a]).map(|_| ())
        }
        Op::UnlinkCourse(a) => unlink::unlink_course_from_everything(s, w.courses[a]).map(|_| ()),
    };
    // Refusing to steal a taught course is the only expected failure
    if let Err(e) = result {
        assert!(
            matches!(e, RosterError::InstructorConflict { .. }),
            "{:?} failed with {}",
            op,
            e
        );
    }
}

/// Relationship lists as sets; the load order of links may differ
fn topology(mut records: SchoolRecords) -> SchoolRecords {
    for s in &mut records.students {
        s.registered_course_ids.sort();
    }
    for i in &mut records.instructors {
        i.assigned_course_ids.sort();
    }
    for c in &mut records.courses {
        c.enrolled_student_ids.sort();
    }
    records
}

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn reciprocity_holds_after_any_sequence(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut w = world();
        for op in &ops {
            run(&mut w, op);
            prop_assert!(invariants::find_enrollment_mismatches(&w.session).is_empty(), "after {:?}", op);
            prop_assert!(invariants::find_teaching_mismatches(&w.session).is_empty(), "after {:?}", op);
            prop_assert!(invariants::find_duplicate_links(&w.session).is_empty(), "after {:?}", op);
        }
    }

    #[test]
    fn flatten_then_load_preserves_topology(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut w = world();
        for op in &ops {
            run(&mut w, op);
        }
        let flat = w.session.to_records();
        let (loaded, report) = roster_core::load_records(&flat).expect("load");
        prop_assert!(report.is_clean());
        prop_assert_eq!(topology(loaded.to_records()), topology(flat));
    }
}
