use crate::{
    audit::{AuditAction, AuditEntry},
    error::{RegistrationError, Result},
    store::Registry,
};
use log::info;
use models::{course::Course, section::Section};

/// Catalog management: course/section CRUD, instructor assignment, and the
/// admin capacity override.
pub struct CatalogService;

impl CatalogService {
    pub fn create_course(
        registry: &mut Registry,
        code: &str,
        title: &str,
        credits: u32,
    ) -> Result<Course> {
        if code.trim().is_empty() || title.trim().is_empty() {
            return Err(RegistrationError::BlankId);
        }
        let course = Course::new(code, title, credits).ok_or(RegistrationError::InvalidCredits)?;
        registry.courses.save(course.clone());
        Ok(course)
    }

    /// Partial update: either field may be left unchanged.
    pub fn update_course(
        registry: &mut Registry,
        code: &str,
        new_title: Option<&str>,
        new_credits: Option<u32>,
    ) -> Result<Course> {
        let course = registry
            .courses
            .find_by_code_mut(code)
            .ok_or_else(|| RegistrationError::CourseNotFound(code.to_string()))?;
        if let Some(title) = new_title {
            course.title = title.to_string();
        }
        if let Some(credits) = new_credits
            && !course.set_credits(credits)
        {
            return Err(RegistrationError::InvalidCredits);
        }
        Ok(course.clone())
    }

    /// Creates a section of an existing course.
    pub fn create_section(
        registry: &mut Registry,
        id: &str,
        course_code: &str,
        term: &str,
        capacity: u32,
    ) -> Result<Section> {
        if id.trim().is_empty() {
            return Err(RegistrationError::BlankId);
        }
        if registry.courses.find_by_code(course_code).is_none() {
            return Err(RegistrationError::CourseNotFound(course_code.to_string()));
        }
        let section = Section::new(id, course_code, term, capacity);
        registry.sections.save(section.clone());
        Ok(section)
    }

    /// Assigns an instructor to a section. The person must exist and carry
    /// the instructor role.
    pub fn assign_instructor(
        registry: &mut Registry,
        section_id: &str,
        instructor_id: &str,
    ) -> Result<()> {
        let person = registry
            .people
            .find_by_id(instructor_id)
            .ok_or_else(|| RegistrationError::PersonNotFound(instructor_id.to_string()))?;
        if !person.is_instructor() {
            return Err(RegistrationError::NotAnInstructor(instructor_id.to_string()));
        }
        let section = registry
            .sections
            .find_by_id_mut(section_id)
            .ok_or_else(|| RegistrationError::SectionNotFound(section_id.to_string()))?;
        section.instructor_id = Some(instructor_id.to_string());
        Ok(())
    }

    /// Sections an instructor is assigned to, derived from the section store
    /// rather than tracked on the person.
    pub fn instructor_sections<'a>(
        registry: &'a Registry,
        instructor_id: &str,
    ) -> Result<Vec<&'a Section>> {
        let person = registry
            .people
            .find_by_id(instructor_id)
            .ok_or_else(|| RegistrationError::PersonNotFound(instructor_id.to_string()))?;
        if !person.is_instructor() {
            return Err(RegistrationError::NotAnInstructor(instructor_id.to_string()));
        }
        Ok(registry
            .sections
            .all()
            .filter(|s| s.instructor_id.as_deref() == Some(instructor_id))
            .collect())
    }

    pub fn sections_by_course<'a>(
        registry: &'a Registry,
        course_code: &str,
    ) -> Result<Vec<&'a Section>> {
        if course_code.trim().is_empty() {
            return Err(RegistrationError::BlankId);
        }
        Ok(registry
            .sections
            .all()
            .filter(|s| s.course_code.eq_ignore_ascii_case(course_code))
            .collect())
    }

    /// Admin capacity override. Mutates the section's capacity directly and
    /// never drops or promotes anyone retroactively: students enrolled above
    /// a lowered capacity stay enrolled. Audited with the old and new values.
    pub fn override_capacity(
        registry: &mut Registry,
        section_id: &str,
        new_capacity: i32,
        admin_id: &str,
        reason: &str,
    ) -> Result<()> {
        let admin = registry
            .people
            .find_by_id(admin_id)
            .ok_or_else(|| RegistrationError::PersonNotFound(admin_id.to_string()))?;
        if !admin.is_admin() {
            return Err(RegistrationError::AdminRequired(admin_id.to_string()));
        }
        if new_capacity < 0 {
            return Err(RegistrationError::InvalidCapacity(new_capacity));
        }
        let section = registry
            .sections
            .find_by_id_mut(section_id)
            .ok_or_else(|| RegistrationError::SectionNotFound(section_id.to_string()))?;

        let old = section.capacity();
        let new = new_capacity as u32;
        section.set_capacity(new);
        info!("capacity of section {section_id} changed {old} -> {new} by admin {admin_id}");
        registry.audit.append(AuditEntry::new(
            admin_id,
            AuditAction::CapacityChange { old, new },
            section_id,
            reason,
        ));
        Ok(())
    }
}
