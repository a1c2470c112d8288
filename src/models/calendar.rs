//! Weekly grid model.
//!
//! Lessons are placed on a fixed teaching week: five weekdays, each
//! split into five fixed time slots. A (day, slot) pair is a [`Slot`];
//! the grid has exactly [`GRID_SIZE`] of them.
//!
//! # Labels
//! Days and time slots display, parse, and serialize as their human
//! labels (`"Monday"`, `"8:30-10:00"`), so timetables round-trip through
//! JSON or TOML in the same shape they are printed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of (day, time slot) cells in the weekly grid.
pub const GRID_SIZE: usize = DayOfWeek::ALL.len() * TimeSlot::ALL.len();

/// Teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl DayOfWeek {
    /// All teaching days, Monday first.
    pub const ALL: [DayOfWeek; 5] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
        }
    }
}

/// One of the five fixed lesson periods of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "8:30-10:00")]
    First,
    #[serde(rename = "10:15-11:45")]
    Second,
    #[serde(rename = "12:15-13:45")]
    Third,
    #[serde(rename = "14:00-15:30")]
    Fourth,
    #[serde(rename = "15:45-17:15")]
    Fifth,
}

impl TimeSlot {
    /// All slots in chronological order.
    pub const ALL: [TimeSlot; 5] = [
        TimeSlot::First,
        TimeSlot::Second,
        TimeSlot::Third,
        TimeSlot::Fourth,
        TimeSlot::Fifth,
    ];

    /// Display label, e.g. `"8:30-10:00"`.
    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::First => "8:30-10:00",
            TimeSlot::Second => "10:15-11:45",
            TimeSlot::Third => "12:15-13:45",
            TimeSlot::Fourth => "14:00-15:30",
            TimeSlot::Fifth => "15:45-17:15",
        }
    }
}

/// A cell of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub day_of_week: DayOfWeek,
    pub time_slot: TimeSlot,
}

impl Slot {
    /// Creates a slot.
    pub fn new(day_of_week: DayOfWeek, time_slot: TimeSlot) -> Self {
        Self {
            day_of_week,
            time_slot,
        }
    }

    /// Enumerates the whole grid, day-major.
    pub fn all() -> impl Iterator<Item = Slot> {
        DayOfWeek::ALL
            .into_iter()
            .flat_map(|day| TimeSlot::ALL.into_iter().map(move |ts| Slot::new(day, ts)))
    }
}

/// Error for an unrecognized day or slot label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {what} label: {label:?}")]
pub struct ParseLabelError {
    what: &'static str,
    label: String,
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day_of_week, self.time_slot)
    }
}

impl FromStr for DayOfWeek {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayOfWeek::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| ParseLabelError {
                what: "day",
                label: s.to_string(),
            })
    }
}

impl FromStr for TimeSlot {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| ParseLabelError {
                what: "time slot",
                label: s.to_string(),
            })
    }
}
