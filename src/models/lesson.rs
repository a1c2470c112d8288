//! Lesson model.
//!
//! A [`Lesson`] binds a course to a professor, a classroom, and one cell of
//! the weekly grid. Once accepted into a store it is wrapped in a
//! [`ScheduledLesson`] carrying a store-assigned [`LessonId`].
//!
//! # Identity
//! Several lessons may belong to the same course (a course can meet more
//! than once a week), so the course id does not identify a lesson. The
//! surrogate `LessonId` does.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DayOfWeek, Slot, TimeSlot};

/// Store-assigned lesson identifier. Monotonic, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LessonId(pub u64);

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// A lesson booking request, or the body of an accepted booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub course_id: u32,
    pub professor_id: u32,
    pub classroom_number: String,
    pub day_of_week: DayOfWeek,
    pub time_slot: TimeSlot,
}

/// A lesson accepted into a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledLesson {
    pub id: LessonId,
    #[serde(flatten)]
    pub lesson: Lesson,
}

impl Lesson {
    /// Creates a lesson.
    pub fn new(
        course_id: u32,
        professor_id: u32,
        classroom_number: impl Into<String>,
        day_of_week: DayOfWeek,
        time_slot: TimeSlot,
    ) -> Self {
        Self {
            course_id,
            professor_id,
            classroom_number: classroom_number.into(),
            day_of_week,
            time_slot,
        }
    }

    /// The grid cell this lesson occupies.
    #[inline]
    pub fn slot(&self) -> Slot {
        Slot::new(self.day_of_week, self.time_slot)
    }

    /// Whether both lessons occupy the same grid cell.
    #[inline]
    pub fn same_slot(&self, other: &Lesson) -> bool {
        self.day_of_week == other.day_of_week && self.time_slot == other.time_slot
    }

    /// Same lesson moved to another classroom.
    pub fn in_classroom(&self, classroom_number: impl Into<String>) -> Self {
        Self {
            classroom_number: classroom_number.into(),
            ..self.clone()
        }
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "course {} by professor {} in room {} at {}",
            self.course_id,
            self.professor_id,
            self.classroom_number,
            self.slot()
        )
    }
}

impl fmt::Display for ScheduledLesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.lesson)
    }
}
