use crate::{
    audit::{AuditAction, AuditEntry},
    error::{RegistrationError, Result},
    store::{Registry, SectionStore},
};
use log::{info, warn};
use models::{
    enrollment::{Enrollment, EnrollmentStatus},
    prereq,
    section::Section,
};

/// The registration transaction core: enroll, drop with waitlist promotion,
/// schedule lookup, and the admin force-enroll escape hatch.
pub struct RegistrationService;

impl RegistrationService {
    /// Enrolls a student in a section.
    ///
    /// Checks run in a fixed order - time conflict, then prerequisites, then
    /// capacity - so that when several rules are violated at once the caller
    /// sees the most specific error first. Both `Enrolled` and `Waitlisted`
    /// results are successes; callers inspect the returned status. Nothing is
    /// persisted unless every check passes.
    pub fn enroll(registry: &mut Registry, student_id: &str, section_id: &str) -> Result<Enrollment> {
        if student_id.trim().is_empty() || section_id.trim().is_empty() {
            return Err(RegistrationError::BlankId);
        }
        if registry.people.find_student(student_id).is_none() {
            return Err(RegistrationError::StudentNotFound(student_id.to_string()));
        }
        let candidate = registry
            .sections
            .find_by_id(section_id)
            .ok_or_else(|| RegistrationError::SectionNotFound(section_id.to_string()))?;

        let course = registry
            .courses
            .find_by_code(&candidate.course_code)
            .ok_or_else(|| RegistrationError::CourseNotFound(candidate.course_code.clone()))?;
        // The record is established when the student is registered; a missing
        // one means the caller bypassed that step.
        let transcript = registry
            .transcripts
            .find_by_student(student_id)
            .ok_or_else(|| RegistrationError::TranscriptMissing(student_id.to_string()))?;

        // One active enrollment per (student, section) pair on this path.
        // The force-enroll path deliberately skips this check.
        if candidate.has_active(student_id) {
            return Err(RegistrationError::DuplicateEnrollment {
                student: student_id.to_string(),
                section: section_id.to_string(),
            });
        }

        if let Some(conflicting) = first_conflict(&registry.sections, student_id, candidate) {
            return Err(RegistrationError::TimeConflict {
                section: section_id.to_string(),
                conflicting,
            });
        }

        if !prereq::has_completed_prerequisites(transcript, course) {
            return Err(RegistrationError::PrerequisitesNotMet(course.code.clone()));
        }

        let enrollment = if candidate.is_full() {
            if candidate.is_waitlist_full() {
                return Err(RegistrationError::SectionAndWaitlistFull);
            }
            Enrollment::waitlisted(student_id, section_id)
        } else {
            Enrollment::enrolled(student_id, section_id)
        };

        let section = registry
            .sections
            .find_by_id_mut(section_id)
            .ok_or_else(|| RegistrationError::SectionNotFound(section_id.to_string()))?;
        section.add_enrollment(enrollment.clone());
        info!(
            "student {student_id} {} in section {section_id}",
            match enrollment.status() {
                EnrollmentStatus::Enrolled => "enrolled",
                _ => "waitlisted",
            }
        );
        Ok(enrollment)
    }

    /// Drops a student from a section.
    ///
    /// The student's Enrolled entry is dropped if one exists, else their
    /// Waitlisted entry. Dropping an Enrolled entry frees a real seat and
    /// promotes the longest-waiting Waitlisted entry, if any; dropping a
    /// Waitlisted entry promotes nobody.
    pub fn drop_student(registry: &mut Registry, student_id: &str, section_id: &str) -> Result<()> {
        if registry.people.find_student(student_id).is_none() {
            return Err(RegistrationError::StudentNotFound(student_id.to_string()));
        }
        let section = registry
            .sections
            .find_by_id_mut(section_id)
            .ok_or_else(|| RegistrationError::SectionNotFound(section_id.to_string()))?;

        let entry = section
            .active_enrollment_mut(student_id)
            .ok_or_else(|| RegistrationError::NotEnrolled {
                student: student_id.to_string(),
                section: section_id.to_string(),
            })?;
        let prior = entry.status();
        entry.set_status(EnrollmentStatus::Dropped)?;
        info!("student {student_id} dropped section {section_id} (was {prior})");

        // Only a freed seat triggers promotion, and only one per drop.
        if prior == EnrollmentStatus::Enrolled
            && let Some(waiting) = section.first_waitlisted_mut()
        {
            let promoted = waiting.student_id.clone();
            waiting.set_status(EnrollmentStatus::Enrolled)?;
            info!("promoted student {promoted} from waitlist in section {section_id}");
        }
        Ok(())
    }

    /// Sections in which the student currently holds a seat, optionally
    /// filtered to one term. Insertion order of the section store.
    pub fn schedule<'a>(
        registry: &'a Registry,
        student_id: &str,
        term: Option<&str>,
    ) -> Result<Vec<&'a Section>> {
        if registry.people.find_student(student_id).is_none() {
            return Err(RegistrationError::StudentNotFound(student_id.to_string()));
        }
        Ok(registry
            .sections
            .all()
            .filter(|section| match term {
                Some(term) if !term.is_empty() => section.term == term,
                _ => true,
            })
            .filter(|section| section.has_enrolled(student_id))
            .collect())
    }

    /// Admin force-enroll. Bypasses the conflict, prerequisite, and capacity
    /// checks wholesale and always appends a fresh Enrolled entry - even when
    /// the student already holds one, so duplicates are possible here by
    /// design. Audited.
    pub fn force_enroll(
        registry: &mut Registry,
        student_id: &str,
        section_id: &str,
        admin_id: &str,
        reason: &str,
    ) -> Result<Enrollment> {
        let admin = registry
            .people
            .find_by_id(admin_id)
            .ok_or_else(|| RegistrationError::PersonNotFound(admin_id.to_string()))?;
        if !admin.is_admin() {
            return Err(RegistrationError::AdminRequired(admin_id.to_string()));
        }
        if registry.people.find_student(student_id).is_none() {
            return Err(RegistrationError::StudentNotFound(student_id.to_string()));
        }
        let candidate = registry
            .sections
            .find_by_id(section_id)
            .ok_or_else(|| RegistrationError::SectionNotFound(section_id.to_string()))?;

        // The prerequisite engine is consulted with the override flag set,
        // which short-circuits to satisfied.
        if let (Some(course), Some(transcript)) = (
            registry.courses.find_by_code(&candidate.course_code),
            registry.transcripts.find_by_student(student_id),
        ) && !prereq::has_completed_prerequisites_with_override(transcript, course, true)
        {
            return Err(RegistrationError::PrerequisitesNotMet(course.code.clone()));
        }

        let enrollment = Enrollment::enrolled(student_id, section_id);
        let section = registry
            .sections
            .find_by_id_mut(section_id)
            .ok_or_else(|| RegistrationError::SectionNotFound(section_id.to_string()))?;
        section.add_enrollment(enrollment.clone());
        if section.enrolled_count() > section.capacity() as usize {
            warn!(
                "section {section_id} over capacity after force-enroll ({}/{})",
                section.enrolled_count(),
                section.capacity()
            );
        }
        registry.audit.append(AuditEntry::new(
            admin_id,
            AuditAction::ForceEnroll,
            section_id,
            reason,
        ));
        Ok(enrollment)
    }
}

/// First section, in store order, where the student holds a seat and any
/// meeting time overlaps any of the candidate's. Sections without meeting
/// times never conflict with anything.
fn first_conflict(sections: &SectionStore, student_id: &str, candidate: &Section) -> Option<String> {
    for existing in sections.all() {
        if !existing.has_enrolled(student_id) {
            continue;
        }
        for held in existing.meeting_times() {
            for wanted in candidate.meeting_times() {
                if held.overlaps(wanted) {
                    return Some(existing.id.clone());
                }
            }
        }
    }
    None
}
