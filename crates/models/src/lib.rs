pub mod course;
pub mod enrollment;
pub mod grade;
pub mod person;
pub mod prereq;
pub mod section;
pub mod timeslot;
pub mod transcript;
