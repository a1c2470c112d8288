//! Teaching resource models.
//!
//! Professors and classrooms are the two resources a lesson occupies.
//! Both are reference data: registered once and never mutated by the
//! timetable operations.

use serde::{Deserialize, Serialize};

/// A professor who teaches lessons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    /// Professor identifier.
    pub id: u32,
    /// Full name.
    pub name: String,
    /// Owning department.
    pub department: String,
}

/// A room lessons are held in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    /// Room number; the classroom's identity.
    pub number: String,
    /// Seats.
    pub capacity: u32,
    /// Whether a projector is installed.
    pub has_projector: bool,
}

impl Professor {
    /// Creates a professor with no department.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            department: String::new(),
        }
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }
}

impl Classroom {
    /// Creates a classroom with zero capacity and no projector.
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            capacity: 0,
            has_projector: false,
        }
    }

    /// Sets the seat count.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Marks the room as equipped with a projector.
    pub fn with_projector(mut self) -> Self {
        self.has_projector = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_professor_builder() {
        let p = Professor::new(7, "Ada Lovelace").with_department("Mathematics");
        assert_eq!(p.id, 7);
        assert_eq!(p.name, "Ada Lovelace");
        assert_eq!(p.department, "Mathematics");
    }

    #[test]
    fn test_classroom_builder() {
        let c = Classroom::new("101").with_capacity(40).with_projector();
        assert_eq!(c.number, "101");
        assert_eq!(c.capacity, 40);
        assert!(c.has_projector);

        let bare = Classroom::new("B2");
        assert!(!bare.has_projector);
    }

    #[test]
    fn test_classroom_serde_field_names() {
        let c = Classroom::new("101").with_capacity(30).with_projector();
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["number"], "101");
        assert_eq!(json["hasProjector"], true);
    }
}
