//! Flat tables of the session, one per entity kind
//!
//! Rows are plain strings so front-ends can filter and print them without
//! touching the model.

use crate::errors::{Result, RosterError, ValidationReason};
use crate::model::Personal;
use crate::ops::Session;

/// Which entity kind a table lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Students,
    Instructors,
    Courses,
}

/// One column: filter key and display heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub heading: &'static str,
}

const fn col(key: &'static str, heading: &'static str) -> Column {
    Column { key, heading }
}

const STUDENT_COLUMNS: [Column; 5] = [
    col("id", "Student ID"),
    col("name", "Name"),
    col("age", "Age"),
    col("email", "Email"),
    col("courses", "Registered Courses"),
];

const INSTRUCTOR_COLUMNS: [Column; 5] = [
    col("id", "Instructor ID"),
    col("name", "Name"),
    col("age", "Age"),
    col("email", "Email"),
    col("courses", "Assigned Courses"),
];

const COURSE_COLUMNS: [Column; 4] = [
    col("id", "Course ID"),
    col("name", "Course Name"),
    col("instructor", "Instructor"),
    col("students", "Enrolled Students"),
];

impl TableKind {
    pub fn columns(&self) -> &'static [Column] {
        match self {
            TableKind::Students => &STUDENT_COLUMNS,
            TableKind::Instructors => &INSTRUCTOR_COLUMNS,
            TableKind::Courses => &COURSE_COLUMNS,
        }
    }

    /// Position of the column with this key (case-insensitive)
    pub fn column_index(&self, key: &str) -> Option<usize> {
        self.columns()
            .iter()
            .position(|c| c.key.eq_ignore_ascii_case(key.trim()))
    }
}

/// Case-insensitive substring match on one column
///
/// A blank needle matches every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFilter {
    column: usize,
    needle: String,
}

impl ColumnFilter {
    pub fn new(column: usize, text: &str) -> Self {
        Self {
            column,
            needle: text.trim().to_lowercase(),
        }
    }

    /// Parse `KEY=TEXT`, where KEY is one of the table's column keys
    ///
    /// # Errors
    /// `Validation` on field `filter` if there is no `=` or the key is not a
    /// column of `kind`.
    pub fn parse(kind: TableKind, expr: &str) -> Result<Self> {
        let malformed = || RosterError::validation("filter", ValidationReason::Malformed);
        let (key, text) = expr.split_once('=').ok_or_else(malformed)?;
        let column = kind.column_index(key).ok_or_else(malformed)?;
        Ok(Self::new(column, text))
    }

    pub fn matches(&self, row: &[String]) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        row.get(self.column)
            .map(|value| value.to_lowercase().contains(&self.needle))
            .unwrap_or(false)
    }
}

/// Headings plus rows for one entity kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub kind: TableKind,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Build the table for `kind` in session order
    pub fn build(session: &Session, kind: TableKind) -> Self {
        let rows = match kind {
            TableKind::Students => student_rows(session),
            TableKind::Instructors => instructor_rows(session),
            TableKind::Courses => course_rows(session),
        };
        Self { kind, rows }
    }

    /// Keep only rows that match every filter
    pub fn filtered(mut self, filters: &[ColumnFilter]) -> Self {
        self.rows.retain(|row| filters.iter().all(|f| f.matches(row)));
        self
    }

    pub fn headings(&self) -> Vec<&'static str> {
        self.kind.columns().iter().map(|c| c.heading).collect()
    }

    pub fn to_markdown(&self) -> String {
        render_markdown_table(&self.headings(), &self.rows)
    }
}

fn course_list<'a>(
    session: &Session,
    courses: impl Iterator<Item = &'a crate::model::CourseHandle>,
) -> String {
    courses
        .filter_map(|h| session.course(*h).ok())
        .map(|c| format!("{} {}", c.course_name(), c.course_id()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn student_rows(session: &Session) -> Vec<Vec<String>> {
    session
        .students()
        .map(|(_, s)| {
            vec![
                s.student_id().to_string(),
                s.name().to_string(),
                s.age().to_string(),
                s.email().to_string(),
                course_list(session, s.registered_courses().iter()),
            ]
        })
        .collect()
}

fn instructor_rows(session: &Session) -> Vec<Vec<String>> {
    session
        .instructors()
        .map(|(_, i)| {
            vec![
                i.instructor_id().to_string(),
                i.name().to_string(),
                i.age().to_string(),
                i.email().to_string(),
                course_list(session, i.assigned_courses().iter()),
            ]
        })
        .collect()
}

fn course_rows(session: &Session) -> Vec<Vec<String>> {
    session
        .courses()
        .map(|(_, c)| {
            let instructor = c
                .instructor()
                .and_then(|h| session.instructor(h).ok())
                .map(|i| i.name().to_string())
                .unwrap_or_default();
            let students = c
                .enrolled_students()
                .iter()
                .filter_map(|h| session.student(*h).ok())
                .map(|s| format!("{}-{}", s.student_id(), s.name()))
                .collect::<Vec<_>>()
                .join(", ");
            vec![
                c.course_id().to_string(),
                c.course_name().to_string(),
                instructor,
                students,
            ]
        })
        .collect()
}

/// Render a Markdown pipe table
///
/// Pipe characters inside cells are escaped.
pub fn render_markdown_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut output = String::new();

    output.push_str(&format!("| {} |\n", headers.join(" | ")));
    output.push_str(&format!(
        "|{}|\n",
        headers.iter().map(|_| "---").collect::<Vec<_>>().join("|")
    ));

    for row in rows {
        let cells: Vec<String> = row.iter().map(|cell| cell.replace('|', "\\|")).collect();
        output.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    output
}
