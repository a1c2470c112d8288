//! Validator-gated timetable mutations.
//!
//! Every operation that could place a lesson runs
//! [`validate_lesson`](crate::validation::validate_lesson) first and only
//! touches the store when no conflict is found. A rejected call leaves the
//! store exactly as it was.
//!
//! # Addressing lessons
//! The `*_by_id` / `reassign_lesson_classroom` forms target a single
//! booking by [`LessonId`]. The course-keyed forms keep the older
//! semantics: [`ScheduleStore::reassign_classroom`] moves the *first*
//! lesson of a course, while [`ScheduleStore::cancel_lesson`] removes
//! *all* lessons of a course.

use tracing::{debug, warn};

use crate::error::{ScheduleConflict, ScheduleError};
use crate::models::{Lesson, LessonId, ScheduledLesson};
use crate::store::ScheduleStore;
use crate::validation::validate_lesson;

impl ScheduleStore {
    /// Books a lesson if it collides with no existing booking.
    ///
    /// # Returns
    /// The new lesson's id, or the conflict with the existing booking.
    pub fn add_lesson(&mut self, lesson: Lesson) -> Result<LessonId, ScheduleConflict> {
        if let Some(conflict) = validate_lesson(self.lessons(), &lesson, None) {
            self.report_conflict("add_lesson", &conflict);
            return Err(conflict);
        }
        let id = self.insert_lesson(lesson);
        debug!(lesson = %id, "lesson booked");
        Ok(id)
    }

    /// Moves the first lesson of `course_id` to another classroom, keeping
    /// its day and slot.
    ///
    /// Only the first booking of the course (insertion order) is
    /// considered, even if the course meets several times a week.
    ///
    /// # Returns
    /// The id of the moved lesson.
    pub fn reassign_classroom(
        &mut self,
        course_id: u32,
        new_classroom: &str,
    ) -> Result<LessonId, ScheduleError> {
        let id = self
            .lessons()
            .iter()
            .find(|l| l.lesson.course_id == course_id)
            .map(|l| l.id)
            .ok_or(ScheduleError::CourseNotScheduled(course_id))?;

        self.reassign_lesson_classroom(id, new_classroom)?;
        Ok(id)
    }

    /// Moves one booking to another classroom, keeping its day and slot.
    ///
    /// Whether the booking's current placement takes part in the conflict
    /// check is controlled by
    /// [`SchedulerConfig::exclude_self_on_reassign`](crate::config::SchedulerConfig::exclude_self_on_reassign).
    pub fn reassign_lesson_classroom(
        &mut self,
        id: LessonId,
        new_classroom: &str,
    ) -> Result<(), ScheduleError> {
        let current = self.lesson(id).ok_or(ScheduleError::LessonNotFound(id))?;
        let candidate = current.lesson.in_classroom(new_classroom);
        let exclude = self.config().exclude_self_on_reassign.then_some(id);

        if let Some(conflict) = validate_lesson(self.lessons(), &candidate, exclude) {
            self.report_conflict("reassign_classroom", &conflict);
            return Err(conflict.into());
        }

        if let Some(booking) = self.lesson_mut(id) {
            let from = std::mem::replace(&mut booking.lesson.classroom_number, candidate.classroom_number);
            debug!(lesson = %id, from = %from, to = new_classroom, "lesson reassigned");
        }
        Ok(())
    }

    /// Cancels every lesson of `course_id`.
    ///
    /// # Returns
    /// The removed bookings in insertion order, or
    /// [`ScheduleError::CourseNotScheduled`] when the course had none (the
    /// store is left untouched, so repeated calls are harmless).
    pub fn cancel_lesson(&mut self, course_id: u32) -> Result<Vec<ScheduledLesson>, ScheduleError> {
        let removed = self.remove_lessons_where(|l| l.lesson.course_id == course_id);
        if removed.is_empty() {
            return Err(ScheduleError::CourseNotScheduled(course_id));
        }
        debug!(course_id, count = removed.len(), "lessons cancelled");
        Ok(removed)
    }

    /// Cancels a single booking.
    pub fn cancel_lesson_by_id(&mut self, id: LessonId) -> Result<ScheduledLesson, ScheduleError> {
        let mut removed = self.remove_lessons_where(|l| l.id == id);
        match removed.pop() {
            Some(lesson) => {
                debug!(lesson = %id, "lesson cancelled");
                Ok(lesson)
            }
            None => Err(ScheduleError::LessonNotFound(id)),
        }
    }

    fn report_conflict(&self, operation: &str, conflict: &ScheduleConflict) {
        if self.config().log_conflicts {
            warn!(
                operation,
                kind = ?conflict.kind,
                existing = %conflict.lesson,
                "schedule conflict"
            );
        }
    }
}
