//! Leaderboard domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded completion: a player's time for one point in one city.
///
/// Entries are immutable values. They serialize with camelCase keys, which
/// is also the on-disk document format:
///
/// ```json
/// {"id": "…", "cityName": "Atlanta", "pointName": "Fox Theatre",
///  "playerName": "Ann", "timeTaken": 12.5}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Unique identifier (UUID format)
    pub id: String,
    /// City the point belongs to
    pub city_name: String,
    /// The point of interest this time was set at
    pub point_name: String,
    /// Who set the time
    pub player_name: String,
    /// Seconds spent on the leg; never negative
    pub time_taken: f64,
}

impl LeaderboardEntry {
    /// Creates an entry with a freshly generated ID. A negative
    /// `time_taken` is clamped to zero.
    pub fn new(
        city_name: impl Into<String>,
        point_name: impl Into<String>,
        player_name: impl Into<String>,
        time_taken: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            city_name: city_name.into(),
            point_name: point_name.into(),
            player_name: player_name.into(),
            time_taken: time_taken.max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let entry = LeaderboardEntry::new("Atlanta", "Fox Theatre", "Ann", 12.5);
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"cityName\":\"Atlanta\""));
        assert!(json.contains("\"pointName\":\"Fox Theatre\""));
        assert!(json.contains("\"playerName\":\"Ann\""));
        assert!(json.contains("\"timeTaken\":12.5"));
    }

    #[test]
    fn test_round_trips_through_json() {
        let entry = LeaderboardEntry::new("Chicago", "Navy Pier", "Bo", 7.25);
        let json = serde_json::to_string(&entry).unwrap();
        let back: LeaderboardEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_negative_time_is_clamped_to_zero() {
        let entry = LeaderboardEntry::new("Atlanta", "Piedmont Park", "Ann", -3.0);
        assert_eq!(entry.time_taken, 0.0);
    }
}
