use serde::Serialize;

/// A course in the catalog. Prerequisites are held as course codes, never as
/// object references: they are resolved by string lookup against the
/// student's record, so a dangling code simply never passes.
#[derive(Debug, Clone, Serialize)]
pub struct Course {
    pub code: String,
    pub title: String,
    credits: u32,
    prerequisites: Vec<String>,
}

impl Course {
    /// Creates a new course if `credits` is positive
    pub fn new(code: impl Into<String>, title: impl Into<String>, credits: u32) -> Option<Self> {
        (credits > 0).then(|| Self {
            code: code.into(),
            title: title.into(),
            credits,
            prerequisites: Vec::new(),
        })
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    /// Updates the credit hours. Rejects zero, leaving the course unchanged.
    pub fn set_credits(&mut self, credits: u32) -> bool {
        if credits == 0 {
            return false;
        }
        self.credits = credits;
        true
    }

    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    /// Adds a prerequisite course code. Blank codes are rejected.
    pub fn add_prerequisite(&mut self, course_code: impl Into<String>) -> bool {
        let code = course_code.into();
        if code.trim().is_empty() {
            return false;
        }
        self.prerequisites.push(code);
        true
    }

    pub fn remove_prerequisite(&mut self, course_code: &str) {
        self.prerequisites.retain(|c| c != course_code);
    }
}
