//! Student and instructor commands
//!
//! Usage: roster student|instructor add|edit|remove|show ...
//!
//! Both kinds carry the same person fields, so the argument types and the
//! edit path are shared.

use clap::{Args, Subcommand};
use roster_core::model::{Instructor, PersonEdit, Personal, Student};
use roster_core::render::{render_instructor, render_student};
use roster_core::rules::fields::parse_nonneg_int;
use roster_core::{apply, Command};

use crate::config::Settings;
use crate::session_file;

#[derive(Debug, Args)]
pub struct StudentArgs {
    #[command(subcommand)]
    pub command: PersonCommand,
}

#[derive(Debug, Args)]
pub struct InstructorArgs {
    #[command(subcommand)]
    pub command: PersonCommand,
}

#[derive(Debug, Subcommand)]
pub enum PersonCommand {
    /// Add a new record
    Add(AddArgs),
    /// Change name, age or email
    Edit(EditArgs),
    /// Unlink from every course, then remove
    Remove(IdArgs),
    /// Print one record as Markdown
    Show(IdArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Unique identifier
    pub id: String,

    #[arg(long)]
    pub name: String,

    /// Whole number of years
    #[arg(long, allow_hyphen_values = true)]
    pub age: String,

    #[arg(long)]
    pub email: String,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Identifier of the record to edit
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub age: Option<String>,

    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Debug, Args)]
pub struct IdArgs {
    pub id: String,
}

/// Execute student command
pub fn execute_student(
    settings: &Settings,
    args: StudentArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = session_file::load(&settings.data)?;

    match args.command {
        PersonCommand::Add(add) => {
            let age = parse_nonneg_int(&add.age, "age")?;
            let student = Student::new(&add.name, i64::from(age), &add.email, &add.id)?;
            let label = format!("{} ({})", student.student_id(), student.name());
            session.insert_student(student)?;
            session_file::save(&settings.data, &session)?;
            println!("✓ Added student {}", label);
        }
        PersonCommand::Edit(edit) => {
            let handle = session.require_student(&edit.id)?;
            session.edit_student(handle, &person_edit(&edit)?)?;
            session_file::save(&settings.data, &session)?;
            println!("✓ Updated student {}", edit.id);
        }
        PersonCommand::Remove(target) => {
            let handle = session.require_student(&target.id)?;
            let outcome = apply(
                &mut session,
                Command::UnlinkEverything {
                    entity: handle.into(),
                },
            )?;
            session.remove_student(handle)?;
            session_file::save(&settings.data, &session)?;
            println!("{}", outcome.message);
            println!("✓ Removed student {}", target.id);
        }
        PersonCommand::Show(target) => {
            let handle = session.require_student(&target.id)?;
            print!("{}", render_student(&session, handle)?);
        }
    }

    Ok(())
}

/// Execute instructor command
pub fn execute_instructor(
    settings: &Settings,
    args: InstructorArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = session_file::load(&settings.data)?;

    match args.command {
        PersonCommand::Add(add) => {
            let age = parse_nonneg_int(&add.age, "age")?;
            let instructor = Instructor::new(&add.name, i64::from(age), &add.email, &add.id)?;
            let label = format!("{} ({})", instructor.instructor_id(), instructor.name());
            session.insert_instructor(instructor)?;
            session_file::save(&settings.data, &session)?;
            println!("✓ Added instructor {}", label);
        }
        PersonCommand::Edit(edit) => {
            let handle = session.require_instructor(&edit.id)?;
            session.edit_instructor(handle, &person_edit(&edit)?)?;
            session_file::save(&settings.data, &session)?;
            println!("✓ Updated instructor {}", edit.id);
        }
        PersonCommand::Remove(target) => {
            let handle = session.require_instructor(&target.id)?;
            let outcome = apply(
                &mut session,
                Command::UnlinkEverything {
                    entity: handle.into(),
                },
            )?;
            session.remove_instructor(handle)?;
            session_file::save(&settings.data, &session)?;
            println!("{}", outcome.message);
            println!("✓ Removed instructor {}", target.id);
        }
        PersonCommand::Show(target) => {
            let handle = session.require_instructor(&target.id)?;
            print!("{}", render_instructor(&session, handle)?);
        }
    }

    Ok(())
}

fn person_edit(edit: &EditArgs) -> Result<PersonEdit, Box<dyn std::error::Error>> {
    let age = edit
        .age
        .as_deref()
        .map(|raw| parse_nonneg_int(raw, "age"))
        .transpose()?;

    if let Some(email) = &edit.email {
        tracing::debug!(
            component = module_path!(),
            op = "edit_email",
            email = %roster_core_types::Sensitive::new(email),
            "email change requested"
        );
    }

    Ok(PersonEdit {
        name: edit.name.clone(),
        age: age.map(i64::from),
        email: edit.email.clone(),
    })
}
