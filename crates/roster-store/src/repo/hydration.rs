//! Hydration layer - reads school records back out of SQLite
//!
//! Rows come back in identifier order. Registrations are folded into the
//! student records in insertion order, and course enrollment lists are left
//! empty since the core loader links both sides from either one.

#![allow(clippy::result_large_err)]

use std::collections::HashMap;

use crate::errors::{from_core, from_rusqlite, Result};
use roster_core::records::{CourseRecord, InstructorRecord, LoadReport, StudentRecord};
use roster_core::rules::validate_session;
use roster_core::{SchoolRecords, Session};
use rusqlite::Connection;

/// Read every row into records
pub fn load_records(conn: &Connection) -> Result<SchoolRecords> {
    let mut students = load_students(conn)?;
    let instructors = load_instructors(conn)?;
    let courses = load_courses(conn)?;

    let index: HashMap<String, usize> = students
        .iter()
        .enumerate()
        .map(|(i, s)| (s.student_id.clone(), i))
        .collect();

    let mut stmt = conn
        .prepare("SELECT student_id, course_id FROM registrations ORDER BY rowid")
        .map_err(from_rusqlite)?;
    let registrations = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    for (student_id, course_id) in registrations {
        if let Some(&i) = index.get(&student_id) {
            students[i].registered_course_ids.push(course_id);
        }
    }

    Ok(SchoolRecords {
        students,
        instructors,
        courses,
    })
}

/// Read every row and rebuild a session from it
///
/// # Errors
/// `Persistence` on any database failure; the core loader's errors are
/// passed through with `op = "db_load"`.
pub fn load_session(conn: &Connection) -> Result<(Session, LoadReport)> {
    let records = load_records(conn)?;
    let (session, report) =
        roster_core::load_records(&records).map_err(|e| from_core("db_load", e))?;
    validate_session(&session).map_err(|e| from_core("db_load", e))?;
    Ok((session, report))
}

fn load_students(conn: &Connection) -> Result<Vec<StudentRecord>> {
    let mut stmt = conn
        .prepare("SELECT student_id, name, age, email FROM students ORDER BY student_id")
        .map_err(from_rusqlite)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(StudentRecord {
                student_id: row.get(0)?,
                name: row.get(1)?,
                age: row.get(2)?,
                email: row.get(3)?,
                registered_course_ids: Vec::new(),
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}

fn load_instructors(conn: &Connection) -> Result<Vec<InstructorRecord>> {
    let mut stmt = conn
        .prepare("SELECT instructor_id, name, age, email FROM instructors ORDER BY instructor_id")
        .map_err(from_rusqlite)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(InstructorRecord {
                instructor_id: row.get(0)?,
                name: row.get(1)?,
                age: row.get(2)?,
                email: row.get(3)?,
                assigned_course_ids: Vec::new(),
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}

fn load_courses(conn: &Connection) -> Result<Vec<CourseRecord>> {
    let mut stmt = conn
        .prepare("SELECT course_id, course_name, instructor_id FROM courses ORDER BY course_id")
        .map_err(from_rusqlite)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(CourseRecord {
                course_id: row.get(0)?,
                course_name: row.get(1)?,
                instructor_id: row.get(2)?,
                enrolled_student_ids: Vec::new(),
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}
