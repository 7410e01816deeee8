use chrono::{NaiveTime, Weekday};
use serde::Serialize;
use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// A weekly recurring meeting window: one day of the week, a start and end
/// time, and a room label. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub day: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub room: String,
}

impl TimeSlot {
    /// Creates a new `TimeSlot` if `start` is strictly before `end`
    pub fn new(day: Weekday, start: NaiveTime, end: NaiveTime, room: impl Into<String>) -> Option<Self> {
        (start < end).then(|| Self {
            day,
            start,
            end,
            room: room.into(),
        })
    }

    /// Two slots overlap iff they fall on the same day and their time ranges
    /// intersect. Intervals are half-open: a slot ending exactly when another
    /// begins does not overlap it.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

// Ordering is by day (Monday first), then start time. Used for displaying
// schedules, not for any correctness decision.
impl Ord for TimeSlot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.day
            .num_days_from_monday()
            .cmp(&other.day.num_days_from_monday())
            .then_with(|| self.start.cmp(&other.start))
            .then_with(|| self.end.cmp(&other.end))
            .then_with(|| self.room.cmp(&other.room))
    }
}

impl PartialOrd for TimeSlot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} {}-{} ({})",
            self.day,
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            self.room
        )
    }
}
