//! Database commands
//!
//! Usage: roster db save [--replace] | load | backup <PATH>

use clap::{Args, Subcommand};
use roster_store::{db, repo, SqliteRepo};
use std::path::PathBuf;

use crate::config::Settings;
use crate::session_file;

#[derive(Debug, Args)]
pub struct DbArgs {
    #[command(subcommand)]
    pub command: DbCommand,
}

#[derive(Debug, Subcommand)]
pub enum DbCommand {
    /// Write the working session into the database
    Save {
        /// Clear every table first instead of upserting
        #[arg(long)]
        replace: bool,
    },
    /// Replace the working session with the database contents
    Load,
    /// Copy the database to another file
    Backup {
        /// Destination file
        path: PathBuf,
    },
}

/// Execute db command
pub fn execute(settings: &Settings, args: DbArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        DbCommand::Save { replace } => {
            let session = session_file::load(&settings.data)?;
            let mut conn = db::open_store(&settings.db)?;
            if replace {
                SqliteRepo::wipe(&mut conn)?;
            }
            SqliteRepo::save_all(&mut conn, &session.to_records())?;
            println!(
                "✓ Saved {} students, {} instructors, {} courses to {}",
                session.student_count(),
                session.instructor_count(),
                session.course_count(),
                settings.db.display()
            );
        }
        DbCommand::Load => {
            let conn = db::open_store(&settings.db)?;
            let (session, report) = repo::load_session(&conn)?;
            if !report.is_clean() {
                eprintln!(
                    "warning: {} link(s) in {} could not be restored",
                    report.dropped.len(),
                    settings.db.display()
                );
            }
            session_file::save(&settings.data, &session)?;
            println!(
                "✓ Loaded {} students, {} instructors, {} courses from {}",
                session.student_count(),
                session.instructor_count(),
                session.course_count(),
                settings.db.display()
            );
        }
        DbCommand::Backup { path } => {
            let conn = db::open_store(&settings.db)?;
            roster_store::backup::backup_to(&conn, &path)?;
            println!("✓ Backed up {} to {}", settings.db.display(), path.display());
        }
    }

    Ok(())
}
