//! Course commands
//!
//! Usage: roster course add|rename|enroll|remove|show ...

use clap::{Args, Subcommand};
use roster_core::model::Course;
use roster_core::render::render_course;
use roster_core::{apply, Command};

use crate::config::Settings;
use crate::session_file;

#[derive(Debug, Args)]
pub struct CourseArgs {
    #[command(subcommand)]
    pub command: CourseCommand,
}

#[derive(Debug, Subcommand)]
pub enum CourseCommand {
    /// Add a new course
    Add {
        /// Unique course identifier
        id: String,
        /// Display name
        name: String,
    },
    /// Change a course's display name
    Rename { id: String, name: String },
    /// Enroll a student, from the course side
    Enroll { id: String, student_id: String },
    /// Unlink the course from its instructor and students, then remove it
    Remove { id: String },
    /// Print one course as Markdown
    Show { id: String },
}

/// Execute course command
pub fn execute(settings: &Settings, args: CourseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = session_file::load(&settings.data)?;

    match args.command {
        CourseCommand::Add { id, name } => {
            let course = Course::new(&id, &name)?;
            let label = format!("{} ({})", course.course_id(), course.course_name());
            session.insert_course(course)?;
            session_file::save(&settings.data, &session)?;
            println!("✓ Added course {}", label);
        }
        CourseCommand::Rename { id, name } => {
            let handle = session.require_course(&id)?;
            session.rename_course(handle, &name)?;
            session_file::save(&settings.data, &session)?;
            println!("✓ Renamed course {}", id);
        }
        CourseCommand::Enroll { id, student_id } => {
            let course = session.require_course(&id)?;
            let student = session.require_student(&student_id)?;
            let outcome = apply(
                &mut session,
                Command::AddStudent {
                    course: course.into(),
                    student: student.into(),
                },
            )?;
            if outcome.changed() {
                session_file::save(&settings.data, &session)?;
            }
            println!("{}", outcome.message);
        }
        CourseCommand::Remove { id } => {
            let handle = session.require_course(&id)?;
            let outcome = apply(
                &mut session,
                Command::UnlinkEverything {
                    entity: handle.into(),
                },
            )?;
            session.remove_course(handle)?;
            session_file::save(&settings.data, &session)?;
            println!("{}", outcome.message);
            println!("✓ Removed course {}", id);
        }
        CourseCommand::Show { id } => {
            let handle = session.require_course(&id)?;
            print!("{}", render_course(&session, handle)?);
        }
    }

    Ok(())
}
