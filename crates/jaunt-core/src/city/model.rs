//! City domain models.
//!
//! Represents the places a hunt is played in: a city, its points of
//! interest, and the one-line task a player completes at each point.
//! All three are immutable after construction.

use uuid::Uuid;

/// A single challenge shown to the player at a point of interest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Description shown to the player
    pub description: String,
}

impl Task {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A visitable location within a city, paired with its task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointOfInterest {
    /// Unique identifier (UUID format), generated at construction
    pub id: String,
    /// Display name of the location
    pub name: String,
    /// The task to complete at this location
    pub task: Task,
}

impl PointOfInterest {
    /// Creates a point of interest with a freshly generated ID.
    pub fn new(name: impl Into<String>, task: Task) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            task,
        }
    }
}

/// A city and the ordered list of points a hunt through it visits.
///
/// The order here is the catalog order; each game session draws its own
/// randomized tour from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    /// Display name, unique within the catalog
    pub name: String,
    /// Points of interest in catalog order
    pub points_of_interest: Vec<PointOfInterest>,
}

impl City {
    pub fn new(name: impl Into<String>, points_of_interest: Vec<PointOfInterest>) -> Self {
        Self {
            name: name.into(),
            points_of_interest,
        }
    }
}
