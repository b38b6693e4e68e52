//! Path management for Jaunt's persisted state.
//!
//! The leaderboard document lives in the platform config directory, so
//! each installation carries its own standings:
//!
//! ```text
//! ~/.config/jaunt/              # Linux; platform-appropriate elsewhere
//! └── leaderboard.json          # The persisted leaderboard document
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Path resolution for Jaunt's on-disk state.
pub struct JauntPaths;

impl JauntPaths {
    /// Returns the Jaunt configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to the config directory (e.g. `~/.config/jaunt/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("jaunt"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the leaderboard document.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to leaderboard.json
    /// - `Err(PathError)`: Could not determine path
    pub fn leaderboard_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("leaderboard.json"))
    }
}
