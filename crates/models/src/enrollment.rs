use crate::grade::Grade;
use serde::Serialize;
use strum::Display;
use thiserror::Error;

/// The lifecycle states of an enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum EnrollmentStatus {
    Enrolled,
    Waitlisted,
    Dropped,
}

impl EnrollmentStatus {
    /// Legal state-machine edges: a drop from either active state, and the
    /// waitlist promotion triggered by a freed seat. `Dropped` is terminal and
    /// an enrolled student is never demoted back onto the waitlist.
    pub fn can_transition_to(self, next: EnrollmentStatus) -> bool {
        use EnrollmentStatus::*;
        matches!(
            (self, next),
            (Enrolled, Dropped) | (Waitlisted, Dropped) | (Waitlisted, Enrolled)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal enrollment transition {from} -> {to}")]
pub struct IllegalTransition {
    pub from: EnrollmentStatus,
    pub to: EnrollmentStatus,
}

/// Links one student to one section. Status moves through the state machine
/// above; the grade is orthogonal to status and assigned at most once per
/// posting (a re-post overwrites).
#[derive(Debug, Clone, Serialize)]
pub struct Enrollment {
    pub student_id: String,
    pub section_id: String,
    status: EnrollmentStatus,
    grade: Option<Grade>,
}

impl Enrollment {
    /// A new enrollment holding a real seat.
    pub fn enrolled(student_id: impl Into<String>, section_id: impl Into<String>) -> Self {
        Self::with_status(student_id, section_id, EnrollmentStatus::Enrolled)
    }

    /// A new enrollment parked on the waitlist.
    pub fn waitlisted(student_id: impl Into<String>, section_id: impl Into<String>) -> Self {
        Self::with_status(student_id, section_id, EnrollmentStatus::Waitlisted)
    }

    // An enrollment never starts out Dropped, so only the two constructors
    // above are public.
    fn with_status(
        student_id: impl Into<String>,
        section_id: impl Into<String>,
        status: EnrollmentStatus,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            section_id: section_id.into(),
            status,
            grade: None,
        }
    }

    pub fn status(&self) -> EnrollmentStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        matches!(
            self.status,
            EnrollmentStatus::Enrolled | EnrollmentStatus::Waitlisted
        )
    }

    /// Moves the enrollment to `next`, rejecting any edge the state machine
    /// does not allow.
    pub fn set_status(&mut self, next: EnrollmentStatus) -> Result<(), IllegalTransition> {
        if !self.status.can_transition_to(next) {
            return Err(IllegalTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    pub fn grade(&self) -> Option<Grade> {
        self.grade
    }

    pub fn has_grade(&self) -> bool {
        self.grade.is_some()
    }

    /// Assigns a grade, overwriting any prior one.
    pub fn assign_grade(&mut self, grade: Grade) {
        self.grade = Some(grade);
    }
}
