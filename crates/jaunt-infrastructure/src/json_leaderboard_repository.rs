//! JSON-based LeaderboardRepository implementation

use std::fs;
use std::path::PathBuf;

use jaunt_core::error::{JauntError, Result};
use jaunt_core::leaderboard::{LeaderboardEntry, LeaderboardRepository};

use crate::paths::JauntPaths;

/// A repository implementation storing the leaderboard as one JSON file.
///
/// The whole collection is serialized as a single pretty-printed array and
/// rewritten on every save. There is no locking: the game has a single
/// writer.
pub struct JsonLeaderboardRepository {
    file_path: PathBuf,
}

impl JsonLeaderboardRepository {
    /// Creates a repository at the default location
    /// (`<config_dir>/jaunt/leaderboard.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be
    /// determined.
    pub fn new() -> Result<Self> {
        let file_path = JauntPaths::leaderboard_file()
            .map_err(|e| JauntError::data_access(e.to_string()))?;
        Ok(Self { file_path })
    }

    /// Creates a repository with a custom document path (for testing).
    pub fn with_path(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    /// The path of the persisted document.
    pub fn file_path(&self) -> &PathBuf {
        &self.file_path
    }
}

impl LeaderboardRepository for JsonLeaderboardRepository {
    fn load(&self) -> Result<Vec<LeaderboardEntry>> {
        if !self.file_path.exists() {
            return Ok(Vec::new()); // No document yet, return empty vec
        }

        let content = fs::read_to_string(&self.file_path)?;

        // Return empty vec if file is empty
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entries: Vec<LeaderboardEntry> = serde_json::from_str(&content)?;
        tracing::debug!(
            "Loaded {} leaderboard entries from {:?}",
            entries.len(),
            self.file_path
        );
        Ok(entries)
    }

    fn save(&self, entries: &[LeaderboardEntry]) -> Result<()> {
        // Create the directory if it doesn't exist
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.file_path, json)?;

        tracing::debug!(
            "Saved {} leaderboard entries to {:?}",
            entries.len(),
            self.file_path
        );
        Ok(())
    }
}
