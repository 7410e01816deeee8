#![allow(dead_code)]

use chrono::{NaiveTime, Weekday};
use models::{course::Course, person::Person, section::Section, timeslot::TimeSlot};
use registry::store::Registry;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

pub fn slot(day: Weekday, start: (u32, u32), end: (u32, u32), room: &str) -> TimeSlot {
    TimeSlot::new(day, time(start.0, start.1), time(end.0, end.1), room).unwrap()
}

/// A registry seeded with the people and catalog most tests need: two
/// students, an instructor, an admin, CS101 plus a MATH101 -> MATH102
/// prerequisite chain, and one open CS101 section.
pub fn seeded_registry() -> Registry {
    init_logging();
    let mut registry = Registry::new();

    registry
        .add_student(Person::student("S1", "Jane", "Doe", "jane@uni.edu", "CS", 2))
        .unwrap();
    registry
        .add_student(Person::student("S2", "Mike", "Mouse", "mike@uni.edu", "Math", 1))
        .unwrap();
    registry.people.save(Person::instructor(
        "I1",
        "Alice",
        "Smith",
        "alice@uni.edu",
        "CS",
        "GHC 4102",
    ));
    registry.people.save(Person::admin("A1", "Sam", "Root", "sam@uni.edu"));

    registry
        .courses
        .save(Course::new("CS101", "Intro to Computer Science", 3).unwrap());
    registry
        .courses
        .save(Course::new("MATH101", "Calculus I", 4).unwrap());
    let mut math102 = Course::new("MATH102", "Calculus II", 4).unwrap();
    math102.add_prerequisite("MATH101");
    registry.courses.save(math102);

    let mut section = Section::new("CS101-A", "CS101", "Fall 2025", 30);
    section.add_meeting_time(slot(Weekday::Mon, (9, 0), (10, 30), "GHC 4102"));
    registry.sections.save(section);

    registry
}
