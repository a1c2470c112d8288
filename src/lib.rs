//! Weekly class timetable with conflict detection.
//!
//! Books lessons onto a fixed 5-day × 5-slot teaching week, binding each to
//! a course, a professor, and a classroom, and guarantees that no professor
//! and no classroom is ever double-booked.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Professor`, `Classroom`, `Course`,
//!   `Lesson`, `DayOfWeek`, `TimeSlot`, `Slot`
//! - **`store`**: `ScheduleStore`, the owning container for one timetable
//! - **`validation`**: Conflict detection and reference-integrity checks
//! - **`scheduler`**: Validated mutations and analytics queries
//! - **`config`**, **`error`**, **`logging`**: Ambient support
//!
//! # Example
//!
//! ```
//! use u_timetable::models::{Classroom, DayOfWeek, Lesson, TimeSlot};
//! use u_timetable::store::ScheduleStore;
//!
//! let mut store = ScheduleStore::new();
//! store.add_classroom(Classroom::new("101"));
//! store.add_classroom(Classroom::new("102"));
//!
//! let monday = DayOfWeek::Monday;
//! store
//!     .add_lesson(Lesson::new(1, 1, "101", monday, TimeSlot::First))
//!     .unwrap();
//!
//! // Same professor, same slot: rejected.
//! assert!(store
//!     .add_lesson(Lesson::new(2, 1, "102", monday, TimeSlot::First))
//!     .is_err());
//!
//! assert_eq!(store.find_available_classrooms(TimeSlot::First, monday), vec!["102"]);
//! assert_eq!(store.classroom_utilization("101"), 4.0);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod scheduler;
pub mod store;
pub mod validation;
