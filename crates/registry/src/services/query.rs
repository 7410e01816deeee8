use crate::store::Registry;
use chrono::{NaiveTime, Weekday};
use models::{course::Course, section::Section};

/// Optional criteria for catalog searches. Combine whichever fields matter;
/// unset fields match everything. Text matches are case-insensitive
/// substring matches.
#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub code: Option<String>,
    pub title: Option<String>,
    pub min_credits: Option<u32>,
    pub max_credits: Option<u32>,
    pub instructor_name: Option<String>,
    pub day: Option<Weekday>,
    pub earliest_start: Option<NaiveTime>,
    pub latest_end: Option<NaiveTime>,
}

impl CourseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_min_credits(mut self, credits: u32) -> Self {
        self.min_credits = Some(credits);
        self
    }

    pub fn with_max_credits(mut self, credits: u32) -> Self {
        self.max_credits = Some(credits);
        self
    }

    pub fn with_instructor_name(mut self, name: impl Into<String>) -> Self {
        self.instructor_name = Some(name.into());
        self
    }

    pub fn with_day(mut self, day: Weekday) -> Self {
        self.day = Some(day);
        self
    }

    pub fn with_earliest_start(mut self, start: NaiveTime) -> Self {
        self.earliest_start = Some(start);
        self
    }

    pub fn with_latest_end(mut self, end: NaiveTime) -> Self {
        self.latest_end = Some(end);
        self
    }

    /// True if the filter asked for instructor or meeting-time criteria,
    /// which require looking at the course's sections.
    fn has_section_criteria(&self) -> bool {
        self.instructor_name.is_some()
            || self.day.is_some()
            || self.earliest_start.is_some()
            || self.latest_end.is_some()
    }

    fn matches_course(&self, course: &Course) -> bool {
        if let Some(code) = &self.code
            && !contains_ignore_case(&course.code, code)
        {
            return false;
        }
        if let Some(title) = &self.title
            && !contains_ignore_case(&course.title, title)
        {
            return false;
        }
        if let Some(min) = self.min_credits
            && course.credits() < min
        {
            return false;
        }
        if let Some(max) = self.max_credits
            && course.credits() > max
        {
            return false;
        }
        true
    }

    /// Per-section check for the instructor and time-window criteria. A
    /// meeting slot satisfies the window only if it matches the requested day
    /// and lies entirely inside [earliest_start, latest_end].
    fn matches_section(&self, registry: &Registry, section: &Section) -> bool {
        if let Some(wanted) = &self.instructor_name {
            let assigned = section
                .instructor_id
                .as_deref()
                .and_then(|id| registry.people.find_by_id(id));
            match assigned {
                Some(person) if contains_ignore_case(&person.full_name(), wanted) => {}
                _ => return false,
            }
        }

        if self.day.is_some() || self.earliest_start.is_some() || self.latest_end.is_some() {
            let slot_ok = section.meeting_times().iter().any(|slot| {
                if let Some(day) = self.day
                    && slot.day != day
                {
                    return false;
                }
                if let Some(start) = self.earliest_start
                    && slot.start < start
                {
                    return false;
                }
                if let Some(end) = self.latest_end
                    && slot.end > end
                {
                    return false;
                }
                true
            });
            if !slot_ok {
                return false;
            }
        }
        true
    }
}

/// Filtered catalog search.
pub struct QueryService;

impl QueryService {
    /// Courses matching the filter, in catalog order. Course-level criteria
    /// apply to the course itself; section-level criteria are satisfied iff
    /// at least one section of the course matches all of them. An empty
    /// filter returns the whole catalog.
    pub fn search<'a>(registry: &'a Registry, filter: &CourseFilter) -> Vec<&'a Course> {
        registry
            .courses
            .all()
            .filter(|course| filter.matches_course(course))
            .filter(|course| {
                if !filter.has_section_criteria() {
                    return true;
                }
                registry
                    .sections
                    .all()
                    .filter(|s| s.course_code == course.code)
                    .any(|s| filter.matches_section(registry, s))
            })
            .collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
