use crate::{
    error::{RegistrationError, Result},
    store::Registry,
};
use log::info;
use models::{
    grade::Grade,
    transcript::{Transcript, TranscriptEntry},
};

/// Grade posting and GPA/transcript retrieval.
pub struct GradingService;

impl GradingService {
    /// Posts a grade for a student in a section.
    ///
    /// Only the section's assigned instructor may post. The grade lands on
    /// the roster enrollment (overwriting any prior grade) and on the
    /// student's record; re-posting for the same section replaces the
    /// earlier record entry rather than duplicating it.
    pub fn post_grade(
        registry: &mut Registry,
        instructor_id: &str,
        section_id: &str,
        student_id: &str,
        grade: Grade,
    ) -> Result<()> {
        if registry.people.find_student(student_id).is_none() {
            return Err(RegistrationError::StudentNotFound(student_id.to_string()));
        }
        let instructor = registry
            .people
            .find_by_id(instructor_id)
            .ok_or_else(|| RegistrationError::PersonNotFound(instructor_id.to_string()))?;
        if !instructor.is_instructor() {
            return Err(RegistrationError::NotAnInstructor(instructor_id.to_string()));
        }

        let section = registry
            .sections
            .find_by_id(section_id)
            .ok_or_else(|| RegistrationError::SectionNotFound(section_id.to_string()))?;
        if section.instructor_id.as_deref() != Some(instructor_id) {
            return Err(RegistrationError::InstructorNotAssigned {
                instructor: instructor_id.to_string(),
                section: section_id.to_string(),
            });
        }
        let course_code = section.course_code.clone();
        let term = section.term.clone();
        let credits = registry
            .courses
            .find_by_code(&course_code)
            .ok_or_else(|| RegistrationError::CourseNotFound(course_code.clone()))?
            .credits();

        let section = registry
            .sections
            .find_by_id_mut(section_id)
            .ok_or_else(|| RegistrationError::SectionNotFound(section_id.to_string()))?;
        let enrollment = section
            .enrollment_of_mut(student_id)
            .ok_or_else(|| RegistrationError::NotEnrolled {
                student: student_id.to_string(),
                section: section_id.to_string(),
            })?;
        enrollment.assign_grade(grade);

        let transcript = registry
            .transcripts
            .find_by_student_mut(student_id)
            .ok_or_else(|| RegistrationError::TranscriptMissing(student_id.to_string()))?;
        transcript.upsert_entry(TranscriptEntry {
            section_id: section_id.to_string(),
            course_code,
            term,
            credits,
            grade,
        });
        info!("grade {grade} posted for student {student_id} in section {section_id}");
        Ok(())
    }

    pub fn gpa(registry: &Registry, student_id: &str) -> Result<f64> {
        Self::transcript(registry, student_id).map(Transcript::gpa)
    }

    pub fn transcript<'a>(registry: &'a Registry, student_id: &str) -> Result<&'a Transcript> {
        if registry.people.find_student(student_id).is_none() {
            return Err(RegistrationError::StudentNotFound(student_id.to_string()));
        }
        registry
            .transcripts
            .find_by_student(student_id)
            .ok_or_else(|| RegistrationError::TranscriptMissing(student_id.to_string()))
    }
}
