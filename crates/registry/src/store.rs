use crate::audit::AuditLog;
use crate::error::{RegistrationError, Result};
use models::{
    course::Course,
    enrollment::Enrollment,
    person::Person,
    section::Section,
    transcript::Transcript,
};

/// Keyed course storage. `save` upserts by course code.
#[derive(Debug, Default)]
pub struct CourseStore {
    courses: Vec<Course>,
}

impl CourseStore {
    pub fn save(&mut self, course: Course) {
        match self.courses.iter_mut().find(|c| c.code == course.code) {
            Some(existing) => *existing = course,
            None => self.courses.push(course),
        }
    }

    pub fn find_by_code(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code == code)
    }

    pub fn find_by_code_mut(&mut self, code: &str) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.code == code)
    }

    pub fn all(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }
}

/// Keyed section storage. Insertion order is preserved, which makes "first
/// conflicting section" and catalog listings deterministic.
#[derive(Debug, Default)]
pub struct SectionStore {
    sections: Vec<Section>,
}

impl SectionStore {
    pub fn save(&mut self, section: Section) {
        match self.sections.iter_mut().find(|s| s.id == section.id) {
            Some(existing) => *existing = section,
            None => self.sections.push(section),
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    pub fn all(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }
}

/// One store for the whole person hierarchy; role-specific lookups go
/// through the typed helpers.
#[derive(Debug, Default)]
pub struct PersonStore {
    people: Vec<Person>,
}

impl PersonStore {
    pub fn save(&mut self, person: Person) {
        match self.people.iter_mut().find(|p| p.id == person.id) {
            Some(existing) => *existing = person,
            None => self.people.push(person),
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// The person with this id, only if they are a student.
    pub fn find_student(&self, id: &str) -> Option<&Person> {
        self.find_by_id(id).filter(|p| p.is_student())
    }

    pub fn all(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }
}

/// Academic records, keyed by the owning student's id.
#[derive(Debug, Default)]
pub struct TranscriptStore {
    transcripts: Vec<Transcript>,
}

impl TranscriptStore {
    pub fn save(&mut self, transcript: Transcript) {
        match self
            .transcripts
            .iter_mut()
            .find(|t| t.student_id == transcript.student_id)
        {
            Some(existing) => *existing = transcript,
            None => self.transcripts.push(transcript),
        }
    }

    pub fn find_by_student(&self, student_id: &str) -> Option<&Transcript> {
        self.transcripts.iter().find(|t| t.student_id == student_id)
    }

    pub fn find_by_student_mut(&mut self, student_id: &str) -> Option<&mut Transcript> {
        self.transcripts
            .iter_mut()
            .find(|t| t.student_id == student_id)
    }
}

/// Shared in-memory state for the whole system: the four stores plus the
/// admin audit log. Every service method takes `&mut Registry` (or `&`),
/// making this the single-writer boundary for all mutations.
#[derive(Debug, Default)]
pub struct Registry {
    pub courses: CourseStore,
    pub sections: SectionStore,
    pub people: PersonStore,
    pub transcripts: TranscriptStore,
    pub audit: AuditLog,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a student and establishes their (initially empty) academic
    /// record. Every student must have a record before any registration
    /// operation touches them.
    pub fn add_student(&mut self, person: Person) -> Result<()> {
        if !person.is_student() {
            return Err(RegistrationError::NotAStudent(person.id.clone()));
        }
        if self.transcripts.find_by_student(&person.id).is_none() {
            self.transcripts.save(Transcript::new(person.id.clone()));
        }
        self.people.save(person);
        Ok(())
    }

    /// Roster entry for a (student, section) pair, first match in roster
    /// order. Sections own their rosters, so duplicate entries left behind by
    /// admin force-enrolls stay observable here.
    pub fn enrollment(&self, student_id: &str, section_id: &str) -> Option<&Enrollment> {
        self.sections
            .find_by_id(section_id)
            .and_then(|s| s.enrollment_of(student_id))
    }
}
