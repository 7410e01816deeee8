use models::enrollment::IllegalTransition;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistrationError>;

/// Coarse classification of a rejection, for callers that branch on kind
/// rather than on the specific rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    ValidationFailed,
    AuthorizationFailed,
}

/// Every way an operation can be rejected. These are business-rule
/// rejections, detected locally and returned immediately; none are
/// transient, and a failed operation leaves no partial state behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    #[error("student not found: {0}")]
    StudentNotFound(String),
    #[error("section not found: {0}")]
    SectionNotFound(String),
    #[error("course not found: {0}")]
    CourseNotFound(String),
    #[error("person not found: {0}")]
    PersonNotFound(String),
    #[error("no transcript for student {0}")]
    TranscriptMissing(String),
    #[error("required identifier is missing or blank")]
    BlankId,

    #[error("time conflict between section {section} and section {conflicting}")]
    TimeConflict { section: String, conflicting: String },
    #[error("prerequisites not met for course {0}")]
    PrerequisitesNotMet(String),
    #[error("section and waitlist full")]
    SectionAndWaitlistFull,
    #[error("student {student} already has an active enrollment in section {section}")]
    DuplicateEnrollment { student: String, section: String },
    #[error("student {student} is not enrolled in section {section}")]
    NotEnrolled { student: String, section: String },
    #[error("capacity cannot be negative: {0}")]
    InvalidCapacity(i32),
    #[error("credits must be positive")]
    InvalidCredits,
    #[error("meeting start must be strictly before end")]
    InvalidTimeSlot,
    #[error("person {0} is not a student")]
    NotAStudent(String),
    #[error(transparent)]
    IllegalTransition(#[from] IllegalTransition),

    #[error("admin privileges required, {0} is not an admin")]
    AdminRequired(String),
    #[error("person {0} is not an instructor")]
    NotAnInstructor(String),
    #[error("instructor {instructor} is not assigned to section {section}")]
    InstructorNotAssigned { instructor: String, section: String },
}

impl RegistrationError {
    pub fn category(&self) -> ErrorCategory {
        use RegistrationError::*;
        match self {
            StudentNotFound(_) | SectionNotFound(_) | CourseNotFound(_) | PersonNotFound(_)
            | TranscriptMissing(_) => ErrorCategory::NotFound,
            BlankId
            | TimeConflict { .. }
            | PrerequisitesNotMet(_)
            | SectionAndWaitlistFull
            | DuplicateEnrollment { .. }
            | NotEnrolled { .. }
            | InvalidCapacity(_)
            | InvalidCredits
            | InvalidTimeSlot
            | NotAStudent(_)
            | IllegalTransition(_) => ErrorCategory::ValidationFailed,
            AdminRequired(_) | NotAnInstructor(_) | InstructorNotAssigned { .. } => {
                ErrorCategory::AuthorizationFailed
            }
        }
    }
}
