//! Read-only timetable views.

use crate::models::{CourseType, DayOfWeek, ScheduledLesson, Slot, TimeSlot, GRID_SIZE};
use crate::store::ScheduleStore;

impl ScheduleStore {
    /// Classrooms free at the given day and slot, in registration order.
    pub fn find_available_classrooms(&self, time_slot: TimeSlot, day: DayOfWeek) -> Vec<&str> {
        let occupied: Vec<&str> = self
            .lessons()
            .iter()
            .filter(|l| l.lesson.time_slot == time_slot && l.lesson.day_of_week == day)
            .map(|l| l.lesson.classroom_number.as_str())
            .collect();

        self.classrooms()
            .iter()
            .map(|c| c.number.as_str())
            .filter(|number| !occupied.contains(number))
            .collect()
    }

    /// All lessons taught by a professor, in booking order.
    pub fn professor_schedule(&self, professor_id: u32) -> Vec<&ScheduledLesson> {
        self.lessons()
            .iter()
            .filter(|l| l.lesson.professor_id == professor_id)
            .collect()
    }

    /// Share of the weekly grid a classroom is booked for, in percent.
    ///
    /// The denominator is always the full 25-cell grid, independent of how
    /// many rooms or lessons exist. Rooms never booked (including unknown
    /// room numbers) yield `0.0`.
    pub fn classroom_utilization(&self, classroom_number: &str) -> f64 {
        let mut occupied: Vec<Slot> = self
            .lessons()
            .iter()
            .filter(|l| l.lesson.classroom_number == classroom_number)
            .map(|l| l.lesson.slot())
            .collect();
        occupied.sort_unstable();
        occupied.dedup();

        occupied.len() as f64 / GRID_SIZE as f64 * 100.0
    }

    /// Utilization of every registered classroom, in registration order.
    pub fn utilization_report(&self) -> Vec<(String, f64)> {
        self.classrooms()
            .iter()
            .map(|c| (c.number.clone(), self.classroom_utilization(&c.number)))
            .collect()
    }

    /// Number of booked lessons per course type, indexed like
    /// [`CourseType::ALL`].
    ///
    /// Lessons whose course is not registered are skipped.
    pub fn lessons_per_course_type(&self) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for l in self.lessons() {
            if let Some(course) = self.course(l.lesson.course_id) {
                counts[course.course_type.index()] += 1;
            }
        }
        counts
    }

    /// The course type with the most booked lessons.
    ///
    /// Ties go to the type declared first in [`CourseType`]
    /// (Lecture, Seminar, Lab, Practice). Returns `None` if no lesson
    /// belongs to a registered course.
    pub fn most_popular_course_type(&self) -> Option<CourseType> {
        let counts = self.lessons_per_course_type();

        let mut best: Option<(CourseType, usize)> = None;
        for ct in CourseType::ALL {
            let n = counts[ct.index()];
            if n == 0 {
                continue;
            }
            match best {
                Some((_, top)) if n <= top => {}
                _ => best = Some((ct, n)),
            }
        }
        best.map(|(ct, _)| ct)
    }
}
