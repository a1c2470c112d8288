//! Course model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A course offered in the timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course identifier. Lessons refer to courses by this id.
    pub id: u32,
    /// Course title.
    pub name: String,
    /// Teaching format.
    #[serde(rename = "type")]
    pub course_type: CourseType,
}

/// Teaching format of a course.
///
/// Declaration order is significant: it is the tie-break order for
/// popularity rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseType {
    Lecture,
    Seminar,
    Lab,
    Practice,
}

impl CourseType {
    /// All course types in declaration order.
    pub const ALL: [CourseType; 4] = [
        CourseType::Lecture,
        CourseType::Seminar,
        CourseType::Lab,
        CourseType::Practice,
    ];

    /// Position in [`CourseType::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CourseType::Lecture => "Lecture",
            CourseType::Seminar => "Seminar",
            CourseType::Lab => "Lab",
            CourseType::Practice => "Practice",
        };
        f.write_str(s)
    }
}

impl Course {
    /// Creates a course.
    pub fn new(id: u32, name: impl Into<String>, course_type: CourseType) -> Self {
        Self {
            id,
            name: name.into(),
            course_type,
        }
    }
}
