//! List command
//!
//! Usage: roster list students|instructors|courses [--filter COLUMN=TEXT]...

use clap::{Args, ValueEnum};
use roster_core::render::{ColumnFilter, Table, TableKind};

use crate::config::Settings;
use crate::session_file;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which table to print
    #[arg(value_enum)]
    pub kind: ListKind,

    /// Keep rows whose COLUMN contains TEXT, case-insensitively; repeatable
    #[arg(long = "filter", value_name = "COLUMN=TEXT")]
    pub filters: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Students,
    Instructors,
    Courses,
}

impl From<ListKind> for TableKind {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Students => TableKind::Students,
            ListKind::Instructors => TableKind::Instructors,
            ListKind::Courses => TableKind::Courses,
        }
    }
}

/// Execute list command
pub fn execute(settings: &Settings, args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let kind = TableKind::from(args.kind);
    let filters = args
        .filters
        .iter()
        .map(|expr| ColumnFilter::parse(kind, expr))
        .collect::<Result<Vec<_>, _>>()?;

    let session = session_file::load(&settings.data)?;
    let table = Table::build(&session, kind).filtered(&filters);
    print!("{}", table.to_markdown());
    Ok(())
}
