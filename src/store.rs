//! Timetable store.
//!
//! [`ScheduleStore`] owns the reference data (professors, classrooms,
//! courses) and the accepted lessons. It is the single source of truth that
//! the mutation and query operations in [`crate::scheduler`] work against;
//! independent stores are fully isolated from each other.
//!
//! Reference data is append-only and not checked for duplicate ids here;
//! see [`crate::validation::validate_references`] for an explicit audit.
//! Lessons can only enter through
//! [`ScheduleStore::add_lesson`](crate::store::ScheduleStore::add_lesson),
//! which enforces the no-double-booking rules, or through deserialization,
//! which rejects snapshots with repeated lesson ids or double-bookings.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::SchedulerConfig;
use crate::error::SnapshotError;
use crate::models::{Classroom, Course, Lesson, LessonId, Professor, ScheduledLesson};
use crate::validation::find_all_conflicts;

/// Professors, classrooms, courses, and booked lessons of one timetable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoreSnapshot")]
pub struct ScheduleStore {
    professors: Vec<Professor>,
    classrooms: Vec<Classroom>,
    courses: Vec<Course>,
    lessons: Vec<ScheduledLesson>,
    next_lesson_id: u64,
    #[serde(skip)]
    config: SchedulerConfig,
}

/// Unchecked wire form of a [`ScheduleStore`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreSnapshot {
    #[serde(default)]
    professors: Vec<Professor>,
    #[serde(default)]
    classrooms: Vec<Classroom>,
    #[serde(default)]
    courses: Vec<Course>,
    #[serde(default)]
    lessons: Vec<ScheduledLesson>,
    #[serde(default)]
    next_lesson_id: u64,
}

impl TryFrom<StoreSnapshot> for ScheduleStore {
    type Error = SnapshotError;

    /// Rebuilds a store, re-checking the booking invariants.
    ///
    /// The id counter is raised past the highest loaded id so new lessons
    /// never reuse one.
    fn try_from(snapshot: StoreSnapshot) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        for l in &snapshot.lessons {
            if !seen.insert(l.id) {
                return Err(SnapshotError::DuplicateLessonId(l.id));
            }
        }

        if let Some(pair) = find_all_conflicts(&snapshot.lessons).into_iter().next() {
            return Err(SnapshotError::Conflict(pair));
        }

        let highest = snapshot.lessons.iter().map(|l| l.id.0).max().unwrap_or(0);
        Ok(Self {
            professors: snapshot.professors,
            classrooms: snapshot.classrooms,
            courses: snapshot.courses,
            lessons: snapshot.lessons,
            next_lesson_id: snapshot.next_lesson_id.max(highest),
            config: SchedulerConfig::default(),
        })
    }
}

impl ScheduleStore {
    /// Creates an empty store with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the given configuration.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: SchedulerConfig) {
        self.config = config;
    }

    /// Registers a professor.
    pub fn add_professor(&mut self, professor: Professor) {
        self.professors.push(professor);
    }

    /// Registers a classroom. Registration order is the order in which
    /// availability queries list rooms.
    pub fn add_classroom(&mut self, classroom: Classroom) {
        self.classrooms.push(classroom);
    }

    /// Registers a course.
    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Registered professors.
    pub fn professors(&self) -> &[Professor] {
        &self.professors
    }

    /// Registered classrooms in registration order.
    pub fn classrooms(&self) -> &[Classroom] {
        &self.classrooms
    }

    /// Registered courses.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Booked lessons in insertion order.
    pub fn lessons(&self) -> &[ScheduledLesson] {
        &self.lessons
    }

    /// Number of booked lessons.
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    /// First professor with the given id.
    pub fn professor(&self, id: u32) -> Option<&Professor> {
        self.professors.iter().find(|p| p.id == id)
    }

    /// First classroom with the given number.
    pub fn classroom(&self, number: &str) -> Option<&Classroom> {
        self.classrooms.iter().find(|c| c.number == number)
    }

    /// First course with the given id.
    pub fn course(&self, id: u32) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Booked lesson by id.
    pub fn lesson(&self, id: LessonId) -> Option<&ScheduledLesson> {
        self.lessons.iter().find(|l| l.id == id)
    }

    pub(crate) fn lesson_mut(&mut self, id: LessonId) -> Option<&mut ScheduledLesson> {
        self.lessons.iter_mut().find(|l| l.id == id)
    }

    /// Appends a lesson without validation and assigns its id.
    pub(crate) fn insert_lesson(&mut self, lesson: Lesson) -> LessonId {
        self.next_lesson_id += 1;
        let id = LessonId(self.next_lesson_id);
        self.lessons.push(ScheduledLesson { id, lesson });
        id
    }

    /// Removes every lesson matching `pred`, returning them in insertion order.
    pub(crate) fn remove_lessons_where<F>(&mut self, mut pred: F) -> Vec<ScheduledLesson>
    where
        F: FnMut(&ScheduledLesson) -> bool,
    {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.lessons)
            .into_iter()
            .partition(|l| pred(l));
        self.lessons = kept;
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseType, DayOfWeek, TimeSlot};

    #[test]
    fn test_reference_data_append() {
        let mut store = ScheduleStore::new();
        store.add_professor(Professor::new(1, "Turing"));
        store.add_professor(Professor::new(1, "Duplicate"));
        store.add_classroom(Classroom::new("101"));
        store.add_course(Course::new(5, "Compilers", CourseType::Lecture));

        // Duplicates are kept; lookups return the first registration.
        assert_eq!(store.professors().len(), 2);
        assert_eq!(store.professor(1).unwrap().name, "Turing");
        assert!(store.classroom("101").is_some());
        assert!(store.classroom("999").is_none());
        assert_eq!(store.course(5).unwrap().course_type, CourseType::Lecture);
    }

    #[test]
    fn test_lesson_ids_are_not_reused() {
        let mut store = ScheduleStore::new();
        let a = store.insert_lesson(Lesson::new(1, 1, "101", DayOfWeek::Monday, TimeSlot::First));
        let b = store.insert_lesson(Lesson::new(2, 2, "102", DayOfWeek::Monday, TimeSlot::First));
        assert_ne!(a, b);

        store.remove_lessons_where(|l| l.id == b);
        let c = store.insert_lesson(Lesson::new(3, 3, "103", DayOfWeek::Monday, TimeSlot::First));
        assert!(c > b);
        assert_eq!(store.lesson_count(), 2);
        assert!(store.lesson(b).is_none());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = ScheduleStore::new();
        for (course, day) in [(1, DayOfWeek::Monday), (2, DayOfWeek::Tuesday), (1, DayOfWeek::Friday)] {
            store.insert_lesson(Lesson::new(course, course, "101", day, TimeSlot::First));
        }
        let removed = store.remove_lessons_where(|l| l.lesson.course_id == 1);
        assert_eq!(removed.len(), 2);
        assert_eq!(removed[0].lesson.day_of_week, DayOfWeek::Monday);
        assert_eq!(removed[1].lesson.day_of_week, DayOfWeek::Friday);
        assert_eq!(store.lessons().len(), 1);
    }

    #[test]
    fn test_store_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScheduleStore>();
    }

    fn snapshot_json(lessons: serde_json::Value, next_lesson_id: u64) -> serde_json::Value {
        serde_json::json!({ "lessons": lessons, "nextLessonId": next_lesson_id })
    }

    fn lesson_json(id: u64, prof: u32, room: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "courseId": 1,
            "professorId": prof,
            "classroomNumber": room,
            "dayOfWeek": "Monday",
            "timeSlot": "8:30-10:00",
        })
    }

    #[test]
    fn test_serialized_field_names() {
        let mut store = ScheduleStore::new();
        store.insert_lesson(Lesson::new(1, 1, "101", DayOfWeek::Monday, TimeSlot::First));
        let json = serde_json::to_value(&store).unwrap();
        assert_eq!(json["nextLessonId"], 1);
        assert!(json.get("config").is_none());

        let back: ScheduleStore = serde_json::from_value(json).unwrap();
        assert_eq!(back.lessons(), store.lessons());
    }

    #[test]
    fn test_deserialize_raises_stale_id_counter() {
        let json = snapshot_json(serde_json::json!([lesson_json(5, 1, "101")]), 4);
        let mut store: ScheduleStore = serde_json::from_value(json).unwrap();

        let id = store
            .add_lesson(Lesson::new(2, 2, "102", DayOfWeek::Monday, TimeSlot::First))
            .unwrap();
        assert_eq!(id, LessonId(6));

        // Moving the loaded lesson into the new lesson's room must still collide.
        let err = store.reassign_lesson_classroom(LessonId(5), "102").unwrap_err();
        assert_eq!(err.conflict().map(|c| c.lesson.id), Some(id));
        assert!(find_all_conflicts(store.lessons()).is_empty());
    }

    #[test]
    fn test_deserialize_rejects_repeated_lesson_id() {
        let json = snapshot_json(
            serde_json::json!([lesson_json(3, 1, "101"), {
                "id": 3,
                "courseId": 2,
                "professorId": 2,
                "classroomNumber": "102",
                "dayOfWeek": "Tuesday",
                "timeSlot": "8:30-10:00",
            }]),
            3,
        );
        let err = serde_json::from_value::<ScheduleStore>(json).unwrap_err();
        assert!(err.to_string().contains("L3"));
    }

    #[test]
    fn test_deserialize_rejects_double_booking() {
        let json = snapshot_json(
            serde_json::json!([lesson_json(1, 1, "101"), lesson_json(2, 2, "101")]),
            2,
        );
        let err = serde_json::from_value::<ScheduleStore>(json).unwrap_err();
        assert!(err.to_string().contains("ClassroomConflict"));
    }

    #[test]
    fn test_independent_stores() {
        let mut a = ScheduleStore::new();
        let b = ScheduleStore::with_config(SchedulerConfig::legacy());
        a.insert_lesson(Lesson::new(1, 1, "101", DayOfWeek::Monday, TimeSlot::First));
        assert_eq!(a.lesson_count(), 1);
        assert_eq!(b.lesson_count(), 0);
        assert!(!b.config().exclude_self_on_reassign);
    }
}
