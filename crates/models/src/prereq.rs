use crate::{course::Course, transcript::Transcript};
use std::collections::HashSet;

/// Minimum grade points for a past attempt to count as passing a
/// prerequisite: C or better. Fixed policy, not configurable per course.
pub const PASSING_GRADE_POINTS: f64 = 2.0;

/// Course codes the student has passed, taking the union over all history: a
/// single passing attempt of any past section of a code is enough, and a
/// later failing attempt does not invalidate an earlier passing one.
pub fn passed_codes(transcript: &Transcript) -> HashSet<&str> {
    transcript
        .entries()
        .iter()
        .filter(|e| e.grade.points() >= PASSING_GRADE_POINTS)
        .map(|e| e.course_code.as_str())
        .collect()
}

/// True iff every prerequisite code of `course` appears in the passed set.
/// A course with no prerequisites is satisfied by any record, including an
/// empty one.
pub fn has_completed_prerequisites(transcript: &Transcript, course: &Course) -> bool {
    if course.prerequisites().is_empty() {
        return true;
    }
    let passed = passed_codes(transcript);
    course
        .prerequisites()
        .iter()
        .all(|code| passed.contains(code.as_str()))
}

/// Admin override short-circuits to satisfied. Used only by the force-enroll
/// path.
pub fn has_completed_prerequisites_with_override(
    transcript: &Transcript,
    course: &Course,
    admin_override: bool,
) -> bool {
    admin_override || has_completed_prerequisites(transcript, course)
}
