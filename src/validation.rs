//! Conflict detection and timetable integrity checks.
//!
//! Two invariants keep a timetable physically possible:
//! - a professor teaches at most one lesson per slot;
//! - a classroom hosts at most one lesson per slot.
//!
//! [`validate_lesson`] decides whether a candidate may join an existing set
//! of bookings. [`find_all_conflicts`] audits a whole lesson list, and
//! [`validate_references`] checks that reference data is unique and that
//! lessons only point at registered records.

use std::collections::HashSet;

use crate::error::{ConflictKind, ScheduleConflict};
use crate::models::{Lesson, LessonId, ScheduledLesson};
use crate::store::ScheduleStore;

/// Checks a candidate lesson against existing bookings.
///
/// # Algorithm
/// 1. Scan for the first booking with the same professor, day, and slot
///    → [`ConflictKind::ProfessorConflict`].
/// 2. Otherwise scan for the first booking with the same classroom, day,
///    and slot → [`ConflictKind::ClassroomConflict`].
///
/// The professor check always runs first: a candidate colliding on both
/// dimensions reports only the professor conflict.
///
/// Bookings whose id equals `exclude` are ignored; reassignment passes the
/// lesson being moved so it cannot collide with its own current booking.
pub fn validate_lesson(
    existing: &[ScheduledLesson],
    candidate: &Lesson,
    exclude: Option<LessonId>,
) -> Option<ScheduleConflict> {
    let mut others = existing
        .iter()
        .filter(|l| Some(l.id) != exclude && l.lesson.same_slot(candidate));

    if let Some(hit) = others
        .clone()
        .find(|l| l.lesson.professor_id == candidate.professor_id)
    {
        return Some(ScheduleConflict::professor(hit.clone()));
    }

    others
        .find(|l| l.lesson.classroom_number == candidate.classroom_number)
        .map(|hit| ScheduleConflict::classroom(hit.clone()))
}

/// A pair of bookings violating one of the invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictPair {
    /// Rule broken.
    pub kind: ConflictKind,
    /// Earlier booking (insertion order).
    pub first: LessonId,
    /// Later booking.
    pub second: LessonId,
}

/// Lists every pair of lessons that double-books a professor or classroom.
///
/// A pair sharing both professor and classroom is reported twice, once per
/// kind. Lessons accepted through the store never produce entries; this is
/// for timetables assembled elsewhere.
///
/// # Complexity
/// O(n²) in the number of lessons.
pub fn find_all_conflicts(lessons: &[ScheduledLesson]) -> Vec<ConflictPair> {
    let mut pairs = Vec::new();

    for (i, a) in lessons.iter().enumerate() {
        for b in &lessons[i + 1..] {
            if !a.lesson.same_slot(&b.lesson) {
                continue;
            }
            if a.lesson.professor_id == b.lesson.professor_id {
                pairs.push(ConflictPair {
                    kind: ConflictKind::ProfessorConflict,
                    first: a.id,
                    second: b.id,
                });
            }
            if a.lesson.classroom_number == b.lesson.classroom_number {
                pairs.push(ConflictPair {
                    kind: ConflictKind::ClassroomConflict,
                    first: a.id,
                    second: b.id,
                });
            }
        }
    }

    pairs
}

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A reference-data integrity error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of integrity errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two records of the same collection share an identity.
    DuplicateId,
    /// A lesson references a course that is not registered.
    UnknownCourse,
    /// A lesson references a professor that is not registered.
    UnknownProfessor,
    /// A lesson references a classroom that is not registered.
    UnknownClassroom,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Audits the store's reference data.
///
/// Checks:
/// 1. No duplicate professor ids
/// 2. No duplicate classroom numbers
/// 3. No duplicate course ids
/// 4. Every lesson's course, professor, and classroom is registered
///
/// The store itself never runs these checks; callers opt in.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_references(store: &ScheduleStore) -> ValidationResult {
    let mut errors = Vec::new();

    let mut professor_ids = HashSet::new();
    for p in store.professors() {
        if !professor_ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate professor ID: {}", p.id),
            ));
        }
    }

    let mut classroom_numbers = HashSet::new();
    for c in store.classrooms() {
        if !classroom_numbers.insert(c.number.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate classroom number: {}", c.number),
            ));
        }
    }

    let mut course_ids = HashSet::new();
    for c in store.courses() {
        if !course_ids.insert(c.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", c.id),
            ));
        }
    }

    for l in store.lessons() {
        if !course_ids.contains(&l.lesson.course_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCourse,
                format!("Lesson {} references unknown course {}", l.id, l.lesson.course_id),
            ));
        }
        if !professor_ids.contains(&l.lesson.professor_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownProfessor,
                format!(
                    "Lesson {} references unknown professor {}",
                    l.id, l.lesson.professor_id
                ),
            ));
        }
        if !classroom_numbers.contains(l.lesson.classroom_number.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownClassroom,
                format!(
                    "Lesson {} references unknown classroom '{}'",
                    l.id, l.lesson.classroom_number
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
