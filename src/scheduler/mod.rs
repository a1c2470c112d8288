//! Timetable operations.
//!
//! # Mutations
//!
//! `add_lesson`, `reassign_classroom`, and `cancel_lesson` (plus their
//! [`LessonId`](crate::models::LessonId)-addressed variants) are methods on
//! [`ScheduleStore`](crate::store::ScheduleStore). Placements are validated
//! before the store is touched; conflicts come back as values.
//!
//! # Queries
//!
//! Available classrooms, a professor's lessons, classroom utilization and
//! the most popular course type, plus the [`ScheduleSummary`] roll-up.
//!
//! # Concurrency
//!
//! Mutations take `&mut ScheduleStore`, so validation and the write it
//! guards cannot interleave with another mutation. Callers sharing a store
//! across threads wrap it in a lock and hold the write guard for the whole
//! call.

mod kpi;
mod mutator;
mod query;

pub use kpi::ScheduleSummary;

#[cfg(test)]
mod tests {
    use crate::error::ConflictKind;
    use crate::models::{Classroom, Course, CourseType, DayOfWeek, Lesson, Professor, TimeSlot};
    use crate::store::ScheduleStore;

    #[test]
    fn test_two_rooms_scenario() {
        crate::logging::init_test();
        let mut s = ScheduleStore::new();
        s.add_professor(Professor::new(1, "P1").with_department("CS"));
        s.add_professor(Professor::new(2, "P2").with_department("CS"));
        s.add_classroom(Classroom::new("101").with_capacity(40).with_projector());
        s.add_classroom(Classroom::new("102").with_capacity(25));
        s.add_course(Course::new(1, "C1", CourseType::Lecture));
        s.add_course(Course::new(2, "C2", CourseType::Seminar));
        s.add_course(Course::new(3, "C3", CourseType::Lab));

        let mon = DayOfWeek::Monday;
        let first: TimeSlot = "8:30-10:00".parse().unwrap();

        let c1 = s.add_lesson(Lesson::new(1, 1, "101", mon, first)).unwrap();

        let err = s.add_lesson(Lesson::new(2, 1, "102", mon, first)).unwrap_err();
        assert_eq!(err.kind, ConflictKind::ProfessorConflict);
        assert_eq!(err.lesson.id, c1);
        assert_eq!(err.lesson.lesson.course_id, 1);

        let err = s.add_lesson(Lesson::new(3, 2, "101", mon, first)).unwrap_err();
        assert_eq!(err.kind, ConflictKind::ClassroomConflict);
        assert_eq!(err.lesson.id, c1);

        assert_eq!(s.find_available_classrooms(first, mon), vec!["102"]);
        assert_eq!(s.classroom_utilization("101"), 4.0);
        assert_eq!(s.most_popular_course_type(), Some(CourseType::Lecture));
    }
}
