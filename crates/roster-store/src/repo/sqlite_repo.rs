//! SQLite repository implementation
//!
//! Persists a [`SchoolRecords`] snapshot into the four tables created by
//! `001_initial_schema`.

#![allow(clippy::result_large_err)]

use std::time::Instant;

use crate::errors::{from_rusqlite, Result};
use roster_core::records::{CourseRecord, InstructorRecord, StudentRecord};
use roster_core::{log_op_end, log_op_error, log_op_start, SchoolRecords};
use rusqlite::{Connection, Transaction};

/// SQLite repository for students, instructors and courses
pub struct SqliteRepo;

impl SqliteRepo {
    /// Save every record in one transaction
    ///
    /// Rows are upserted by identifier, so saving twice is harmless. Rows
    /// already in the database that the records do not mention are kept;
    /// call [`SqliteRepo::wipe`] first for a full replace. The registrations
    /// table is always rewritten from the student records.
    ///
    /// # Errors
    /// `Persistence` if any statement fails; nothing is committed then.
    pub fn save_all(conn: &mut Connection, records: &SchoolRecords) -> Result<()> {
        let start = Instant::now();
        log_op_start!(
            "db_save",
            students = records.students.len(),
            instructors = records.instructors.len(),
            courses = records.courses.len()
        );

        let result = Self::save_all_inner(conn, records);
        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(()) => {
                log_op_end!("db_save", duration_ms = duration_ms);
            }
            Err(e) => log_op_error!("db_save", e.clone(), duration_ms = duration_ms),
        }
        result
    }

    fn save_all_inner(conn: &mut Connection, records: &SchoolRecords) -> Result<()> {
        let tx = conn.transaction().map_err(from_rusqlite)?;

        for student in &records.students {
            Self::persist_student_tx(&tx, student)?;
        }
        for instructor in &records.instructors {
            Self::persist_instructor_tx(&tx, instructor)?;
        }
        // Courses first without their instructor so the foreign key never
        // points at a row written later in the same pass
        for course in &records.courses {
            Self::persist_course_tx(&tx, course)?;
        }
        for course in &records.courses {
            tx.execute(
                "UPDATE courses SET instructor_id = ?1 WHERE course_id = ?2",
                rusqlite::params![course.instructor_id, course.course_id],
            )
            .map_err(from_rusqlite)?;
        }
        tx.execute("DELETE FROM registrations", [])
            .map_err(from_rusqlite)?;
        for student in &records.students {
            Self::persist_registrations_tx(&tx, student)?;
        }

        tx.commit().map_err(from_rusqlite)?;
        Ok(())
    }

    /// Upsert one student row
    pub fn persist_student_tx(tx: &Transaction, student: &StudentRecord) -> Result<()> {
        tx.execute(
            "INSERT INTO students (student_id, name, age, email)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(student_id) DO UPDATE SET
                name = excluded.name,
                age = excluded.age,
                email = excluded.email",
            rusqlite::params![student.student_id, student.name, student.age, student.email],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }

    /// Upsert one instructor row
    pub fn persist_instructor_tx(tx: &Transaction, instructor: &InstructorRecord) -> Result<()> {
        tx.execute(
            "INSERT INTO instructors (instructor_id, name, age, email)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(instructor_id) DO UPDATE SET
                name = excluded.name,
                age = excluded.age,
                email = excluded.email",
            rusqlite::params![
                instructor.instructor_id,
                instructor.name,
                instructor.age,
                instructor.email
            ],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }

    /// Upsert one course row, leaving its instructor untouched
    pub fn persist_course_tx(tx: &Transaction, course: &CourseRecord) -> Result<()> {
        tx.execute(
            "INSERT INTO courses (course_id, course_name)
             VALUES (?1, ?2)
             ON CONFLICT(course_id) DO UPDATE SET
                course_name = excluded.course_name",
            rusqlite::params![course.course_id, course.course_name],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }

    /// Insert the registrations of one student
    pub fn persist_registrations_tx(tx: &Transaction, student: &StudentRecord) -> Result<()> {
        for course_id in &student.registered_course_ids {
            tx.execute(
                "INSERT OR IGNORE INTO registrations (student_id, course_id) VALUES (?1, ?2)",
                rusqlite::params![student.student_id, course_id],
            )
            .map_err(from_rusqlite)?;
        }
        Ok(())
    }

    /// Delete every row from every data table
    ///
    /// The schema and its recorded migrations are kept.
    pub fn wipe(conn: &mut Connection) -> Result<()> {
        let tx = conn.transaction().map_err(from_rusqlite)?;
        tx.execute_batch(
            "DELETE FROM registrations;
             DELETE FROM courses;
             DELETE FROM instructors;
             DELETE FROM students;",
        )
        .map_err(from_rusqlite)?;
        tx.commit().map_err(from_rusqlite)?;

        tracing::info!(component = module_path!(), op = "db_wipe", "tables cleared");
        Ok(())
    }

    /// Number of rows in each data table, as (students, instructors, courses, registrations)
    pub fn row_counts(conn: &Connection) -> Result<(i64, i64, i64, i64)> {
        let count = |table: &str| -> Result<i64> {
            conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })
            .map_err(from_rusqlite)
        };
        Ok((
            count("students")?,
            count("instructors")?,
            count("courses")?,
            count("registrations")?,
        ))
    }
}
