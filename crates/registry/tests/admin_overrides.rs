mod common;

use common::seeded_registry;
use models::{enrollment::EnrollmentStatus, grade::Grade, section::Section, transcript::TranscriptEntry};
use registry::{
    audit::AuditAction,
    error::{ErrorCategory, RegistrationError},
    services::{catalog::CatalogService, registration::RegistrationService},
};

#[test]
fn non_admin_cannot_force_enroll() {
    let mut registry = seeded_registry();

    for non_admin in ["I1", "S2"] {
        let err =
            RegistrationService::force_enroll(&mut registry, "S1", "CS101-A", non_admin, "Nope")
                .unwrap_err();
        assert_eq!(err, RegistrationError::AdminRequired(non_admin.into()));
        assert_eq!(err.category(), ErrorCategory::AuthorizationFailed);
    }

    let err = RegistrationService::force_enroll(&mut registry, "S1", "CS101-A", "GHOST", "Nope")
        .unwrap_err();
    assert_eq!(err, RegistrationError::PersonNotFound("GHOST".into()));

    // No enrollment was created and nothing was audited.
    assert!(registry.sections.find_by_id("CS101-A").unwrap().roster().is_empty());
    assert!(registry.audit.is_empty());
}

#[test]
fn force_enroll_bypasses_prerequisites_and_capacity() {
    let mut registry = seeded_registry();
    // Zero-seat section of a course S1 has no prerequisites for.
    let section = Section::new("MATH102-A", "MATH102", "Fall 2025", 0);
    registry.sections.save(section);

    let err = RegistrationService::enroll(&mut registry, "S1", "MATH102-A").unwrap_err();
    assert_eq!(err, RegistrationError::PrerequisitesNotMet("MATH102".into()));

    let enrollment =
        RegistrationService::force_enroll(&mut registry, "S1", "MATH102-A", "A1", "Dean approved")
            .unwrap();
    assert_eq!(enrollment.status(), EnrollmentStatus::Enrolled);

    // Capacity was deliberately exceeded and the override was audited.
    let section = registry.sections.find_by_id("MATH102-A").unwrap();
    assert!(section.enrolled_count() > section.capacity() as usize);

    let audit = registry.audit.entries();
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].admin_id, "A1");
    assert_eq!(audit[0].action, AuditAction::ForceEnroll);
    assert_eq!(audit[0].target_id, "MATH102-A");
    assert_eq!(audit[0].reason, "Dean approved");
}

#[test]
fn force_enroll_may_duplicate_an_existing_enrollment() {
    let mut registry = seeded_registry();
    RegistrationService::enroll(&mut registry, "S1", "CS101-A").unwrap();

    RegistrationService::force_enroll(&mut registry, "S1", "CS101-A", "A1", "Advisor error")
        .unwrap();

    let roster = registry.sections.find_by_id("CS101-A").unwrap().roster();
    let active = roster
        .iter()
        .filter(|e| e.student_id == "S1" && e.status() == EnrollmentStatus::Enrolled)
        .count();
    assert_eq!(active, 2);
}

#[test]
fn capacity_override_requires_admin_and_rejects_negatives() {
    let mut registry = seeded_registry();

    let err = CatalogService::override_capacity(&mut registry, "CS101-A", 50, "I1", "Nope")
        .unwrap_err();
    assert_eq!(err, RegistrationError::AdminRequired("I1".into()));

    let err = CatalogService::override_capacity(&mut registry, "CS101-A", -5, "A1", "Typo")
        .unwrap_err();
    assert_eq!(err, RegistrationError::InvalidCapacity(-5));

    // Neither rejected request reached the audit log or the section.
    assert!(registry.audit.is_empty());
    assert_eq!(registry.sections.find_by_id("CS101-A").unwrap().capacity(), 30);
}

#[test]
fn capacity_override_changes_target_without_retroactive_drops() {
    let mut registry = seeded_registry();
    RegistrationService::enroll(&mut registry, "S1", "CS101-A").unwrap();
    RegistrationService::enroll(&mut registry, "S2", "CS101-A").unwrap();

    CatalogService::override_capacity(&mut registry, "CS101-A", 1, "A1", "Room change").unwrap();

    // Both students stay enrolled above the lowered capacity.
    let section = registry.sections.find_by_id("CS101-A").unwrap();
    assert_eq!(section.capacity(), 1);
    assert_eq!(section.enrolled_count(), 2);
    assert!(section.is_full());

    let audit = registry.audit.entries();
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].action, AuditAction::CapacityChange { old: 30, new: 1 });

    // New normal enrollments now land on the waitlist.
    registry
        .add_student(models::person::Person::student(
            "S3", "Ada", "Byron", "ada@uni.edu", "CS", 3,
        ))
        .unwrap();
    let third = RegistrationService::enroll(&mut registry, "S3", "CS101-A").unwrap();
    assert_eq!(third.status(), EnrollmentStatus::Waitlisted);
}

#[test]
fn normal_enrollment_respects_both_limits_without_overrides() {
    let mut registry = seeded_registry();
    let mut section = Section::new("CS101-B", "CS101", "Fall 2025", 2);
    section.set_waitlist_capacity(1);
    registry.sections.save(section);

    for (i, outcome) in [
        ("T1", Some(EnrollmentStatus::Enrolled)),
        ("T2", Some(EnrollmentStatus::Enrolled)),
        ("T3", Some(EnrollmentStatus::Waitlisted)),
        ("T4", None),
    ] {
        registry
            .add_student(models::person::Person::student(
                i, "Test", "Student", "t@uni.edu", "CS", 1,
            ))
            .unwrap();
        let result = RegistrationService::enroll(&mut registry, i, "CS101-B");
        match outcome {
            Some(status) => assert_eq!(result.unwrap().status(), status),
            None => assert_eq!(result.unwrap_err(), RegistrationError::SectionAndWaitlistFull),
        }
    }

    let section = registry.sections.find_by_id("CS101-B").unwrap();
    assert!(section.enrolled_count() <= section.capacity() as usize);
    assert!(section.waitlisted_count() <= section.waitlist_capacity() as usize);
}

#[test]
fn force_enroll_skips_the_prerequisite_gate_even_without_history() {
    let mut registry = seeded_registry();
    let section = Section::new("MATH102-A", "MATH102", "Fall 2025", 10);
    registry.sections.save(section);

    // A passing MATH101 grade is *not* on file for S2.
    let transcript = registry.transcripts.find_by_student("S2").unwrap();
    assert!(transcript.entries().is_empty());

    let enrollment =
        RegistrationService::force_enroll(&mut registry, "S2", "MATH102-A", "A1", "Transfer credit")
            .unwrap();
    assert_eq!(enrollment.status(), EnrollmentStatus::Enrolled);

    // And a failing grade on file changes nothing either.
    registry
        .transcripts
        .find_by_student_mut("S1")
        .unwrap()
        .add_entry(TranscriptEntry {
            section_id: "MATH101-OLD".into(),
            course_code: "MATH101".into(),
            term: "Spring 2025".into(),
            credits: 4,
            grade: Grade::F,
        });
    RegistrationService::force_enroll(&mut registry, "S1", "MATH102-A", "A1", "Dean approved")
        .unwrap();
    assert_eq!(registry.audit.len(), 2);
}
