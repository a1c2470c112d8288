//! Error types.
//!
//! A [`ScheduleConflict`] is the only recoverable outcome of a booking
//! attempt: it is returned as a value so the caller can retry with another
//! room or slot. [`ScheduleError`] adds the not-found cases of the
//! operations that address existing lessons.

use thiserror::Error;

use crate::models::{LessonId, ScheduledLesson};
use crate::validation::ConflictPair;

/// Which no-double-booking rule a candidate broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConflictKind {
    /// The professor already teaches in that slot.
    ProfessorConflict,
    /// The classroom is already booked in that slot.
    ClassroomConflict,
}

/// A candidate lesson collides with an existing booking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind:?} with existing lesson {lesson}")]
pub struct ScheduleConflict {
    /// Conflict category.
    pub kind: ConflictKind,
    /// The existing booking the candidate collides with.
    pub lesson: ScheduledLesson,
}

impl ScheduleConflict {
    /// Professor double-booking against `lesson`.
    pub fn professor(lesson: ScheduledLesson) -> Self {
        Self {
            kind: ConflictKind::ProfessorConflict,
            lesson,
        }
    }

    /// Classroom double-booking against `lesson`.
    pub fn classroom(lesson: ScheduledLesson) -> Self {
        Self {
            kind: ConflictKind::ClassroomConflict,
            lesson,
        }
    }
}

/// Failure of a mutation addressing existing lessons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("schedule conflict: {0}")]
    Conflict(#[from] ScheduleConflict),

    #[error("no lesson scheduled for course {0}")]
    CourseNotScheduled(u32),

    #[error("lesson {0} not found")]
    LessonNotFound(LessonId),
}

impl ScheduleError {
    /// The conflict payload, if this is a conflict.
    pub fn conflict(&self) -> Option<&ScheduleConflict> {
        match self {
            ScheduleError::Conflict(c) => Some(c),
            _ => None,
        }
    }
}

/// A serialized store that would break the booking invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("lesson id {0} appears more than once")]
    DuplicateLessonId(LessonId),

    #[error("{:?} between lessons {} and {}", .0.kind, .0.first, .0.second)]
    Conflict(ConflictPair),
}

/// Failure to load a [`SchedulerConfig`](crate::config::SchedulerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
