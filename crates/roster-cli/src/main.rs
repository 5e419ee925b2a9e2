//! Roster CLI
//!
//! Command-line interface for the school roster

use clap::{Parser, Subcommand};
use roster_core::errors::{ExError, RosterError};
use roster_core::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

mod commands;
mod config;
mod session_file;

use config::Settings;

#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(about = "Roster - Students, instructors and courses", long_about = None)]
struct Cli {
    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Student operations
    Student(commands::person::StudentArgs),
    /// Instructor operations
    Instructor(commands::person::InstructorArgs),
    /// Course operations
    Course(commands::course::CourseArgs),
    /// Register a student for a course
    Register(commands::link::EnrollmentArgs),
    /// Drop a student's registration in a course
    Drop(commands::link::EnrollmentArgs),
    /// Assign a course to an instructor
    Assign(commands::link::TeachingArgs),
    /// Take a course away from its instructor
    Unassign(commands::link::TeachingArgs),
    /// List one entity kind as a table
    List(commands::list::ListArgs),
    /// SQLite database operations
    Db(commands::db::DbArgs),
}

impl Commands {
    fn op_name(&self) -> &'static str {
        match self {
            Commands::Student(_) => "cli_student",
            Commands::Instructor(_) => "cli_instructor",
            Commands::Course(_) => "cli_course",
            Commands::Register(_) => "cli_register",
            Commands::Drop(_) => "cli_drop",
            Commands::Assign(_) => "cli_assign",
            Commands::Unassign(_) => "cli_unassign",
            Commands::List(_) => "cli_list",
            Commands::Db(_) => "cli_db",
        }
    }
}

fn main() {
    let cli = Cli::parse();
    roster_core::logging_facility::init(cli.settings.log_format.profile());

    let op = cli.command.op_name();
    let start = Instant::now();
    log_op_start!(op);

    let settings = &cli.settings;
    let result = match cli.command {
        Commands::Student(args) => commands::person::execute_student(settings, args),
        Commands::Instructor(args) => commands::person::execute_instructor(settings, args),
        Commands::Course(args) => commands::course::execute(settings, args),
        Commands::Register(args) => commands::link::execute_register(settings, args),
        Commands::Drop(args) => commands::link::execute_drop(settings, args),
        Commands::Assign(args) => commands::link::execute_assign(settings, args),
        Commands::Unassign(args) => commands::link::execute_unassign(settings, args),
        Commands::List(args) => commands::list::execute(settings, args),
        Commands::Db(args) => commands::db::execute(settings, args),
    };

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => {
            log_op_end!(op, duration_ms = duration_ms);
        }
        Err(e) => log_failure(op, e.as_ref(), duration_ms),
    }

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log a failed command with its error code when the error carries one
fn log_failure(op: &str, err: &(dyn std::error::Error + 'static), duration_ms: u64) {
    if let Some(ex) = err.downcast_ref::<ExError>() {
        log_op_error!(op, ex.clone(), duration_ms = duration_ms);
    } else if let Some(re) = err.downcast_ref::<RosterError>() {
        log_op_error!(op, re.clone(), duration_ms = duration_ms);
    } else {
        tracing::error!(
            component = module_path!(),
            op,
            event = roster_core_types::schema::EVENT_END_ERROR,
            duration_ms,
            error = %err,
        );
    }
}
