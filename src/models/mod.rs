//! Timetable domain models.
//!
//! Reference data (professors, classrooms, courses) plus the lessons
//! that bind them to the weekly grid.
//!
//! # Domain Mapping
//!
//! | u-timetable | Generic scheduling |
//! |-------------|--------------------|
//! | Lesson | Activity |
//! | Professor, Classroom | Resource |
//! | Course | Task |
//! | Slot | Time window |

mod calendar;
mod course;
mod lesson;
mod resource;

pub use calendar::{DayOfWeek, ParseLabelError, Slot, TimeSlot, GRID_SIZE};
pub use course::{Course, CourseType};
pub use lesson::{Lesson, LessonId, ScheduledLesson};
pub use resource::{Classroom, Professor};
