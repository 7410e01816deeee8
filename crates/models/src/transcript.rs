use crate::grade::Grade;
use serde::Serialize;

/// One completed section on a student's record. Course code and credits are
/// captured at posting time so the record computes over its own entries
/// without any catalog lookups.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    pub section_id: String,
    pub course_code: String,
    pub term: String,
    pub credits: u32,
    pub grade: Grade,
}

impl TranscriptEntry {
    /// Quality points = credits × grade points.
    pub fn quality_points(&self) -> f64 {
        self.credits as f64 * self.grade.points()
    }
}

/// A student's academic record. Entries accumulate as grades are posted; GPA
/// and credit totals are recomputed on every call rather than cached, so they
/// are always consistent with the entry list.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub student_id: String,
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn add_entry(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    /// Records a grade for a section. A re-post for the same section replaces
    /// the earlier entry instead of duplicating it.
    pub fn upsert_entry(&mut self, entry: TranscriptEntry) {
        match self.entries.iter_mut().find(|e| e.section_id == entry.section_id) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Credit hours over GPA-counting entries only.
    pub fn total_credits(&self) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.grade.counts_toward_gpa())
            .map(|e| e.credits)
            .sum()
    }

    /// Quality points over GPA-counting entries only.
    pub fn total_quality_points(&self) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.grade.counts_toward_gpa())
            .map(TranscriptEntry::quality_points)
            .sum()
    }

    /// Quality points / credits, or 0.0 when no counting credits exist.
    pub fn gpa(&self) -> f64 {
        let credits = self.total_credits();
        if credits == 0 {
            return 0.0;
        }
        self.total_quality_points() / credits as f64
    }
}
