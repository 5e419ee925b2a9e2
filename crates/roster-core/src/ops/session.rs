use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::errors::{Result, RosterError};
use crate::model::{
    Course, CourseHandle, EntityKind, Instructor, InstructorHandle, PersonEdit, Personal, Student,
    StudentHandle,
};

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// In-memory owner of every student, instructor and course
///
/// Entities live in one map per kind, keyed by a handle allocated from a
/// single counter that only moves forward, so a removed handle is never
/// handed out again. Relationships are stored as handles inside the entities
/// and are only mutated by the functions in `ops::enrollment`,
/// `ops::teaching` and `ops::unlink`.
///
/// Handles carry the id of the session that issued them, so a handle from
/// another session never resolves here. A clone keeps the id and accepts the
/// original's handles.
///
/// Not thread-safe; a session is owned by one caller at a time.
#[derive(Debug, Clone)]
pub struct Session {
    id: u64,
    next_handle: u64,
    pub(crate) students: BTreeMap<StudentHandle, Student>,
    pub(crate) instructors: BTreeMap<InstructorHandle, Instructor>,
    pub(crate) courses: BTreeMap<CourseHandle, Course>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            id: NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed),
            next_handle: 0,
            students: BTreeMap::new(),
            instructors: BTreeMap::new(),
            courses: BTreeMap::new(),
        }
    }
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> (u64, u64) {
        self.next_handle += 1;
        (self.id, self.next_handle)
    }

    // ===== Insertion =====

    /// Take ownership of a student and return its handle
    ///
    /// Link handles the value carries are discarded; links are only made
    /// through the relationship operations.
    ///
    /// # Errors
    /// `AlreadyExists` if another student already uses the same `student_id`.
    pub fn insert_student(&mut self, mut student: Student) -> Result<StudentHandle> {
        if self.find_student(student.student_id()).is_some() {
            return Err(RosterError::AlreadyExists {
                kind: EntityKind::Student,
                id: student.student_id().to_string(),
            });
        }
        student.registered_courses.clear();
        let (session, raw) = self.allocate();
        let handle = StudentHandle::new(session, raw);
        self.students.insert(handle, student);
        Ok(handle)
    }

    /// Take ownership of an instructor and return its handle
    ///
    /// Link handles the value carries are discarded; links are only made
    /// through the relationship operations.
    ///
    /// # Errors
    /// `AlreadyExists` if another instructor already uses the same `instructor_id`.
    pub fn insert_instructor(&mut self, mut instructor: Instructor) -> Result<InstructorHandle> {
        if self.find_instructor(instructor.instructor_id()).is_some() {
            return Err(RosterError::AlreadyExists {
                kind: EntityKind::Instructor,
                id: instructor.instructor_id().to_string(),
            });
        }
        instructor.assigned_courses.clear();
        let (session, raw) = self.allocate();
        let handle = InstructorHandle::new(session, raw);
        self.instructors.insert(handle, instructor);
        Ok(handle)
    }

    /// Take ownership of a course and return its handle
    ///
    /// Link handles the value carries are discarded; links are only made
    /// through the relationship operations.
    ///
    /// # Errors
    /// `AlreadyExists` if another course already uses the same `course_id`.
    pub fn insert_course(&mut self, mut course: Course) -> Result<CourseHandle> {
        if self.find_course(course.course_id()).is_some() {
            return Err(RosterError::AlreadyExists {
                kind: EntityKind::Course,
                id: course.course_id().to_string(),
            });
        }
        course.instructor = None;
        course.enrolled_students.clear();
        let (session, raw) = self.allocate();
        let handle = CourseHandle::new(session, raw);
        self.courses.insert(handle, course);
        Ok(handle)
    }

    // ===== Handle lookups =====

    /// # Errors
    /// `UnknownHandle` if the handle is not in this session.
    pub fn student(&self, handle: StudentHandle) -> Result<&Student> {
        self.students
            .get(&handle)
            .ok_or_else(|| unknown(EntityKind::Student, handle.raw()))
    }

    pub(crate) fn student_mut(&mut self, handle: StudentHandle) -> Result<&mut Student> {
        self.students
            .get_mut(&handle)
            .ok_or_else(|| unknown(EntityKind::Student, handle.raw()))
    }

    /// # Errors
    /// `UnknownHandle` if the handle is not in this session.
    pub fn instructor(&self, handle: InstructorHandle) -> Result<&Instructor> {
        self.instructors
            .get(&handle)
            .ok_or_else(|| unknown(EntityKind::Instructor, handle.raw()))
    }

    pub(crate) fn instructor_mut(&mut self, handle: InstructorHandle) -> Result<&mut Instructor> {
        self.instructors
            .get_mut(&handle)
            .ok_or_else(|| unknown(EntityKind::Instructor, handle.raw()))
    }

    /// # Errors
    /// `UnknownHandle` if the handle is not in this session.
    pub fn course(&self, handle: CourseHandle) -> Result<&Course> {
        self.courses
            .get(&handle)
            .ok_or_else(|| unknown(EntityKind::Course, handle.raw()))
    }

    pub(crate) fn course_mut(&mut self, handle: CourseHandle) -> Result<&mut Course> {
        self.courses
            .get_mut(&handle)
            .ok_or_else(|| unknown(EntityKind::Course, handle.raw()))
    }

    /// Borrow a student and a course mutably at the same time
    pub(crate) fn student_and_course_mut(
        &mut self,
        student: StudentHandle,
        course: CourseHandle,
    ) -> Result<(&mut Student, &mut Course)> {
        let s = self
            .students
            .get_mut(&student)
            .ok_or_else(|| unknown(EntityKind::Student, student.raw()))?;
        let c = self
            .courses
            .get_mut(&course)
            .ok_or_else(|| unknown(EntityKind::Course, course.raw()))?;
        Ok((s, c))
    }

    // ===== Field updates =====

    /// Change a student's person fields
    ///
    /// # Errors
    /// `UnknownHandle` for a bad handle, `Validation` if any supplied field
    /// fails. Nothing is changed on error.
    pub fn edit_student(&mut self, handle: StudentHandle, edit: &PersonEdit) -> Result<()> {
        self.student_mut(handle)?.apply_edit(edit)
    }

    /// Change an instructor's person fields
    ///
    /// # Errors
    /// `UnknownHandle` for a bad handle, `Validation` if any supplied field
    /// fails. Nothing is changed on error.
    pub fn edit_instructor(&mut self, handle: InstructorHandle, edit: &PersonEdit) -> Result<()> {
        self.instructor_mut(handle)?.apply_edit(edit)
    }

    /// # Errors
    /// `UnknownHandle` for a bad handle, `Validation` if `name` is blank.
    pub fn rename_course(&mut self, handle: CourseHandle, name: &str) -> Result<()> {
        self.course_mut(handle)?.set_course_name(name)
    }

    // ===== Identifier lookups =====

    pub fn find_student(&self, student_id: &str) -> Option<StudentHandle> {
        self.students
            .iter()
            .find(|(_, s)| s.student_id() == student_id)
            .map(|(h, _)| *h)
    }

    pub fn find_instructor(&self, instructor_id: &str) -> Option<InstructorHandle> {
        self.instructors
            .iter()
            .find(|(_, i)| i.instructor_id() == instructor_id)
            .map(|(h, _)| *h)
    }

    pub fn find_course(&self, course_id: &str) -> Option<CourseHandle> {
        self.courses
            .iter()
            .find(|(_, c)| c.course_id() == course_id)
            .map(|(h, _)| *h)
    }

    /// # Errors
    /// `NotFound` if no student has this id.
    pub fn require_student(&self, student_id: &str) -> Result<StudentHandle> {
        self.find_student(student_id)
            .ok_or_else(|| not_found(EntityKind::Student, student_id))
    }

    /// # Errors
    /// `NotFound` if no instructor has this id.
    pub fn require_instructor(&self, instructor_id: &str) -> Result<InstructorHandle> {
        self.find_instructor(instructor_id)
            .ok_or_else(|| not_found(EntityKind::Instructor, instructor_id))
    }

    /// # Errors
    /// `NotFound` if no course has this id.
    pub fn require_course(&self, course_id: &str) -> Result<CourseHandle> {
        self.find_course(course_id)
            .ok_or_else(|| not_found(EntityKind::Course, course_id))
    }

    // ===== Iteration =====

    /// Students in handle (insertion) order
    pub fn students(&self) -> impl Iterator<Item = (StudentHandle, &Student)> {
        self.students.iter().map(|(h, s)| (*h, s))
    }

    /// Instructors in handle (insertion) order
    pub fn instructors(&self) -> impl Iterator<Item = (InstructorHandle, &Instructor)> {
        self.instructors.iter().map(|(h, i)| (*h, i))
    }

    /// Courses in handle (insertion) order
    pub fn courses(&self) -> impl Iterator<Item = (CourseHandle, &Course)> {
        self.courses.iter().map(|(h, c)| (*h, c))
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn instructor_count(&self) -> usize {
        self.instructors.len()
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty() && self.instructors.is_empty() && self.courses.is_empty()
    }

    // ===== Removal =====

    /// Remove a student that has no registrations
    ///
    /// # Errors
    /// `UnknownHandle` for a bad handle, `StillLinked` while the student is
    /// registered in any course.
    pub fn remove_student(&mut self, handle: StudentHandle) -> Result<Student> {
        let student = self.student(handle)?;
        let links = student.registered_courses().len();
        if links > 0 {
            return Err(RosterError::StillLinked {
                kind: EntityKind::Student,
                id: student.student_id().to_string(),
                links,
            });
        }
        self.students
            .remove(&handle)
            .ok_or_else(|| unknown(EntityKind::Student, handle.raw()))
    }

    /// Remove an instructor that teaches nothing
    ///
    /// # Errors
    /// `UnknownHandle` for a bad handle, `StillLinked` while any course is
    /// assigned.
    pub fn remove_instructor(&mut self, handle: InstructorHandle) -> Result<Instructor> {
        let instructor = self.instructor(handle)?;
        let links = instructor.assigned_courses().len();
        if links > 0 {
            return Err(RosterError::StillLinked {
                kind: EntityKind::Instructor,
                id: instructor.instructor_id().to_string(),
                links,
            });
        }
        self.instructors
            .remove(&handle)
            .ok_or_else(|| unknown(EntityKind::Instructor, handle.raw()))
    }

    /// Remove a course with no instructor and no students
    ///
    /// # Errors
    /// `UnknownHandle` for a bad handle, `StillLinked` otherwise.
    pub fn remove_course(&mut self, handle: CourseHandle) -> Result<Course> {
        let course = self.course(handle)?;
        let links = course.link_count();
        if links > 0 {
            return Err(RosterError::StillLinked {
                kind: EntityKind::Course,
                id: course.course_id().to_string(),
                links,
            });
        }
        self.courses
            .remove(&handle)
            .ok_or_else(|| unknown(EntityKind::Course, handle.raw()))
    }
}

fn unknown(kind: EntityKind, handle: u64) -> RosterError {
    RosterError::UnknownHandle { kind, handle }
}

fn not_found(kind: EntityKind, id: &str) -> RosterError {
    RosterError::NotFound {
        kind,
        id: id.to_string(),
    }
}
