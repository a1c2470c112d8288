//! Timetable summary metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Lesson count | Booked lessons |
//! | Lessons per type | Count by course type (unregistered courses skipped) |
//! | Avg utilization | Mean classroom utilization (%) over registered rooms |
//! | Busiest classroom | Highest utilization, first registered on ties |
//! | Most popular type | See [`ScheduleStore::most_popular_course_type`] |

use crate::models::CourseType;
use crate::store::ScheduleStore;

/// Roll-up of a timetable's analytics.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSummary {
    /// Number of booked lessons.
    pub lesson_count: usize,
    /// Lessons per course type, in [`CourseType::ALL`] order.
    pub lessons_by_type: Vec<(CourseType, usize)>,
    /// Per-classroom utilization (%), in registration order.
    pub utilization_by_classroom: Vec<(String, f64)>,
    /// Mean of `utilization_by_classroom` (%). `0.0` with no classrooms.
    pub avg_utilization: f64,
    /// Room with the highest utilization, if any room is booked at all.
    pub busiest_classroom: Option<String>,
    /// Course type with the most lessons.
    pub most_popular_type: Option<CourseType>,
}

impl ScheduleSummary {
    /// Computes the summary for a store.
    pub fn calculate(store: &ScheduleStore) -> Self {
        let counts = store.lessons_per_course_type();
        let lessons_by_type = CourseType::ALL
            .iter()
            .map(|&ct| (ct, counts[ct.index()]))
            .collect();

        let utilization_by_classroom = store.utilization_report();
        let avg_utilization = if utilization_by_classroom.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_classroom.iter().map(|(_, u)| u).sum();
            sum / utilization_by_classroom.len() as f64
        };

        let mut busiest: Option<(&str, f64)> = None;
        for (room, u) in &utilization_by_classroom {
            if *u > busiest.map_or(0.0, |(_, top)| top) {
                busiest = Some((room.as_str(), *u));
            }
        }
        let busiest_classroom = busiest.map(|(room, _)| room.to_string());

        Self {
            lesson_count: store.lesson_count(),
            lessons_by_type,
            utilization_by_classroom,
            avg_utilization,
            busiest_classroom,
            most_popular_type: store.most_popular_course_type(),
        }
    }

    /// Whether average utilization reaches `min_utilization` percent.
    pub fn meets_utilization(&self, min_utilization: f64) -> bool {
        self.avg_utilization >= min_utilization
    }
}
