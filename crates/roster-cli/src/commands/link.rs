//! Relationship commands
//!
//! Usage:
//!   roster register|drop <STUDENT_ID> <COURSE_ID>
//!   roster assign|unassign <INSTRUCTOR_ID> <COURSE_ID>
//!
//! Every command goes through `roster_core::apply`; the session is saved only
//! when the outcome reports a change.

use clap::Args;
use roster_core::{apply, Command, Session};

use crate::config::Settings;
use crate::session_file;

#[derive(Debug, Args)]
pub struct EnrollmentArgs {
    pub student_id: String,
    pub course_id: String,
}

#[derive(Debug, Args)]
pub struct TeachingArgs {
    pub instructor_id: String,
    pub course_id: String,
}

pub fn execute_register(
    settings: &Settings,
    args: EnrollmentArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    run(settings, |session| {
        Ok(Command::Register {
            student: session.require_student(&args.student_id)?.into(),
            course: session.require_course(&args.course_id)?.into(),
        })
    })
}

pub fn execute_drop(
    settings: &Settings,
    args: EnrollmentArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    run(settings, |session| {
        Ok(Command::DropCourse {
            student: session.require_student(&args.student_id)?.into(),
            course: session.require_course(&args.course_id)?.into(),
        })
    })
}

pub fn execute_assign(
    settings: &Settings,
    args: TeachingArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    run(settings, |session| {
        Ok(Command::AssignCourse {
            instructor: session.require_instructor(&args.instructor_id)?.into(),
            course: session.require_course(&args.course_id)?.into(),
        })
    })
}

pub fn execute_unassign(
    settings: &Settings,
    args: TeachingArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    run(settings, |session| {
        Ok(Command::UnassignCourse {
            instructor: session.require_instructor(&args.instructor_id)?.into(),
            course: session.require_course(&args.course_id)?.into(),
        })
    })
}

fn run<F>(settings: &Settings, build: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(&Session) -> roster_core::Result<Command>,
{
    let mut session = session_file::load(&settings.data)?;
    let cmd = build(&session)?;
    let outcome = apply(&mut session, cmd)?;
    if outcome.changed() {
        session_file::save(&settings.data, &session)?;
    }
    println!("{}", outcome.message);
    Ok(())
}
