use std::fmt;

use thiserror::Error;

use crate::model::EntityKind;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that front-ends and tests can match
/// on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Field validation
    Validation,

    // Relationship operations
    TypeConflict,
    InstructorConflict,
    StillLinked,

    // Session lookups
    NotFound,
    AlreadyExists,

    // Integrity
    InvariantViolation,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::TypeConflict => "ERR_TYPE_CONFLICT",
            ExErrorKind::InstructorConflict => "ERR_INSTRUCTOR_CONFLICT",
            ExErrorKind::StillLinked => "ERR_STILL_LINKED",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Used as the error type of the persistence layer and as the shape every
/// `RosterError` is folded into before it is logged.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    field: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            field: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity identifier context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add field-name context (validation failures)
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity identifier context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the field context, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl fmt::Display for ExError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        if let Some(source) = &self.source {
            write!(f, " <- {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Why a field value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    /// Blank after trimming
    Empty,
    /// Not representable as the field's type (e.g. non-numeric age text)
    WrongType,
    /// Negative where a non-negative integer is required
    Negative,
    /// Present but of the wrong shape (email, identifier charset, range)
    Malformed,
}

impl ValidationReason {
    /// Stable lowercase tag
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationReason::Empty => "empty",
            ValidationReason::WrongType => "wrong_type",
            ValidationReason::Negative => "negative",
            ValidationReason::Malformed => "malformed",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error taxonomy for roster operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    // ===== Validation =====
    /// A field value failed its primitive check; the field is unchanged
    #[error("Invalid {field}: {reason}")]
    Validation {
        field: String,
        reason: ValidationReason,
    },

    // ===== Relationship errors =====
    /// A relationship operation received an entity of the wrong kind
    #[error("Expected a {expected} but got a {found}")]
    TypeConflict {
        expected: EntityKind,
        found: EntityKind,
    },

    /// The course is already taught by a different instructor
    #[error(
        "{course_id} already has an instructor ({instructor_name}). \
         Unassign first if reassignment is intended."
    )]
    InstructorConflict {
        course_id: String,
        instructor_id: String,
        instructor_name: String,
    },

    /// Entity still participates in relationships and cannot be removed
    #[error("{kind} {id} still has {links} link(s); unlink it first")]
    StillLinked {
        kind: EntityKind,
        id: String,
        links: usize,
    },

    // ===== Session lookups =====
    /// Handle does not belong to this session (never issued or removed)
    #[error("Unknown {kind} handle: {handle}")]
    UnknownHandle { kind: EntityKind, handle: u64 },

    /// No entity with this identifier
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// Identifier already taken within its kind
    #[error("{kind} already exists: {id}")]
    AlreadyExists { kind: EntityKind, id: String },

    // ===== Integrity =====
    /// Student and course disagree about an enrollment
    #[error("Enrollment of student {student_id} in course {course_id} is one-sided")]
    EnrollmentMismatch {
        student_id: String,
        course_id: String,
    },

    /// Instructor and course disagree about a teaching assignment
    #[error("Teaching link between instructor {instructor_id} and course {course_id} is one-sided")]
    TeachingMismatch {
        instructor_id: String,
        course_id: String,
    },

    /// A relationship collection holds the same handle twice
    #[error("{kind} {id} lists the same link more than once")]
    DuplicateLink { kind: EntityKind, id: String },

    /// A relationship collection holds a handle that is not in the session
    #[error("Relationship references missing {kind} handle {handle}")]
    DanglingHandle { kind: EntityKind, handle: u64 },

    // ===== Serialization =====
    /// Record (de)serialization failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl RosterError {
    /// Shorthand for a validation failure
    pub fn validation(field: &str, reason: ValidationReason) -> Self {
        RosterError::Validation {
            field: field.to_string(),
            reason,
        }
    }
}

/// Conversion from RosterError to ExError
impl From<RosterError> for ExError {
    fn from(err: RosterError) -> Self {
        let message = err.to_string();
        match err {
            RosterError::Validation { field, reason } => ExError::new(ExErrorKind::Validation)
                .with_field(field)
                .with_message(format!("value is {}", reason)),

            RosterError::TypeConflict { .. } => {
                ExError::new(ExErrorKind::TypeConflict).with_message(message)
            }

            RosterError::InstructorConflict { course_id, .. } => {
                ExError::new(ExErrorKind::InstructorConflict)
                    .with_entity_id(course_id)
                    .with_message(message)
            }

            RosterError::StillLinked { id, .. } => ExError::new(ExErrorKind::StillLinked)
                .with_entity_id(id)
                .with_message(message),

            RosterError::UnknownHandle { .. } => {
                ExError::new(ExErrorKind::NotFound).with_message(message)
            }

            RosterError::NotFound { id, .. } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(id)
                .with_message(message),

            RosterError::AlreadyExists { id, .. } => ExError::new(ExErrorKind::AlreadyExists)
                .with_entity_id(id)
                .with_message(message),

            RosterError::EnrollmentMismatch { course_id, .. }
            | RosterError::TeachingMismatch { course_id, .. } => {
                ExError::new(ExErrorKind::InvariantViolation)
                    .with_entity_id(course_id)
                    .with_message(message)
            }

            RosterError::DuplicateLink { id, .. } => {
                ExError::new(ExErrorKind::InvariantViolation)
                    .with_entity_id(id)
                    .with_message(message)
            }

            RosterError::DanglingHandle { .. } => {
                ExError::new(ExErrorKind::InvariantViolation).with_message(message)
            }

            RosterError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to RosterError
impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        RosterError::Serialization {
            message: err.to_string(),
        }
    }
}
