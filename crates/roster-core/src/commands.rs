//! Command inventory for relationship mutations
//!
//! Arguments are [`EntityRef`]s, so a front-end that only knows "some entity"
//! can hand them over untyped; `apply()` checks each kind before anything is
//! touched.

use crate::model::EntityRef;

/// A relationship mutation to run through `apply()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Register a student for a course (student side)
    Register { student: EntityRef, course: EntityRef },

    /// Enroll a student in a course (course side)
    AddStudent { course: EntityRef, student: EntityRef },

    /// Assign a course to an instructor, refusing to replace another one
    AssignCourse {
        instructor: EntityRef,
        course: EntityRef,
    },

    /// Set or clear a course's instructor without a conflict check
    SetInstructor {
        course: EntityRef,
        instructor: Option<EntityRef>,
    },

    /// Remove a student's registration
    DropCourse { student: EntityRef, course: EntityRef },

    /// Take a course away from its instructor
    UnassignCourse {
        instructor: EntityRef,
        course: EntityRef,
    },

    /// Remove every link of one entity, whatever its kind
    UnlinkEverything { entity: EntityRef },
}

impl Command {
    /// Operation name used in logs
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::Register { .. } => "register",
            Command::AddStudent { .. } => "add_student",
            Command::AssignCourse { .. } => "assign_course",
            Command::SetInstructor { .. } => "set_instructor",
            Command::DropCourse { .. } => "drop_course",
            Command::UnassignCourse { .. } => "unassign_course",
            Command::UnlinkEverything { .. } => "unlink_everything",
        }
    }
}
