use crate::{
    enrollment::{Enrollment, EnrollmentStatus},
    timeslot::TimeSlot,
};
use serde::Serialize;

/// Waitlist seats granted to a section unless overridden at creation.
pub const DEFAULT_WAITLIST_CAPACITY: u32 = 10;

/// One term-specific offering of a course. The roster is an append-only log
/// of enrollments: entries change status but are never removed, so drops and
/// waitlist history stay visible.
///
/// `capacity` is a target, not an invariant. The admin force-enroll path may
/// push the enrolled count past it deliberately.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub id: String,
    pub course_code: String,
    pub term: String,
    capacity: u32,
    waitlist_capacity: u32,
    pub instructor_id: Option<String>,
    meeting_times: Vec<TimeSlot>,
    roster: Vec<Enrollment>,
}

impl Section {
    pub fn new(
        id: impl Into<String>,
        course_code: impl Into<String>,
        term: impl Into<String>,
        capacity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            course_code: course_code.into(),
            term: term.into(),
            capacity,
            waitlist_capacity: DEFAULT_WAITLIST_CAPACITY,
            instructor_id: None,
            meeting_times: Vec::new(),
            roster: Vec::new(),
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn set_capacity(&mut self, capacity: u32) {
        self.capacity = capacity;
    }

    pub fn waitlist_capacity(&self) -> u32 {
        self.waitlist_capacity
    }

    pub fn set_waitlist_capacity(&mut self, waitlist_capacity: u32) {
        self.waitlist_capacity = waitlist_capacity;
    }

    pub fn meeting_times(&self) -> &[TimeSlot] {
        &self.meeting_times
    }

    pub fn add_meeting_time(&mut self, slot: TimeSlot) {
        self.meeting_times.push(slot);
    }

    pub fn roster(&self) -> &[Enrollment] {
        &self.roster
    }

    /// Mutable view of roster entries. A slice, not the vector: entries can
    /// change status or grade but never be removed.
    pub fn roster_mut(&mut self) -> &mut [Enrollment] {
        &mut self.roster
    }

    pub fn add_enrollment(&mut self, enrollment: Enrollment) {
        self.roster.push(enrollment);
    }

    pub fn enrolled_count(&self) -> usize {
        self.count_by_status(EnrollmentStatus::Enrolled)
    }

    pub fn waitlisted_count(&self) -> usize {
        self.count_by_status(EnrollmentStatus::Waitlisted)
    }

    fn count_by_status(&self, status: EnrollmentStatus) -> usize {
        self.roster.iter().filter(|e| e.status() == status).count()
    }

    pub fn is_full(&self) -> bool {
        self.enrolled_count() >= self.capacity as usize
    }

    pub fn is_waitlist_full(&self) -> bool {
        self.waitlisted_count() >= self.waitlist_capacity as usize
    }

    pub fn has_enrolled(&self, student_id: &str) -> bool {
        self.roster
            .iter()
            .any(|e| e.student_id == student_id && e.status() == EnrollmentStatus::Enrolled)
    }

    /// First roster entry for this student, any status.
    pub fn enrollment_of(&self, student_id: &str) -> Option<&Enrollment> {
        self.roster.iter().find(|e| e.student_id == student_id)
    }

    pub fn enrollment_of_mut(&mut self, student_id: &str) -> Option<&mut Enrollment> {
        self.roster.iter_mut().find(|e| e.student_id == student_id)
    }

    /// True if the student holds any Enrolled or Waitlisted entry here.
    pub fn has_active(&self, student_id: &str) -> bool {
        self.roster
            .iter()
            .any(|e| e.student_id == student_id && e.is_active())
    }

    /// The student's droppable entry. Enrolled entries take precedence over
    /// Waitlisted ones when both somehow exist; within a status, roster
    /// (arrival) order wins.
    pub fn active_enrollment_mut(&mut self, student_id: &str) -> Option<&mut Enrollment> {
        let position = |status| {
            self.roster
                .iter()
                .position(|e| e.student_id == student_id && e.status() == status)
        };
        let idx = position(EnrollmentStatus::Enrolled).or_else(|| position(EnrollmentStatus::Waitlisted))?;
        Some(&mut self.roster[idx])
    }

    /// The longest-waiting waitlisted entry. Waitlist entries are appended in
    /// arrival order and never reordered, so first-in-roster-order is the
    /// longest waiting.
    pub fn first_waitlisted_mut(&mut self) -> Option<&mut Enrollment> {
        self.roster
            .iter_mut()
            .find(|e| e.status() == EnrollmentStatus::Waitlisted)
    }
}
