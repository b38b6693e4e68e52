//! Leaderboard repository trait.
//!
//! Defines the interface for leaderboard persistence operations.

use super::model::LeaderboardEntry;
use crate::error::Result;

/// An abstract repository for the persisted leaderboard document.
///
/// This trait decouples the leaderboard store from the specific storage
/// mechanism. The whole collection is written on every save; there is no
/// incremental update.
///
/// All operations are synchronous: the game runs on a single thread and
/// storage is local.
pub trait LeaderboardRepository: Send + Sync {
    /// Reads the persisted entries.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<LeaderboardEntry>)`: The stored entries; empty when no
    ///   document exists yet
    /// - `Err(_)`: The document exists but could not be read or parsed
    fn load(&self) -> Result<Vec<LeaderboardEntry>>;

    /// Overwrites the persisted document with `entries`.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Entries saved successfully
    /// - `Err(_)`: Error occurred during save
    fn save(&self, entries: &[LeaderboardEntry]) -> Result<()>;
}
