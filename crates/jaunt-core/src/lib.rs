//! Core domain logic for Jaunt, a city scavenger hunt raced against the
//! clock.
//!
//! This crate holds everything the game is, independent of how it is
//! stored or shown: the city catalog, the game session state machine, and
//! the leaderboard. Storage backends live in `jaunt-infrastructure`; the
//! terminal frontend lives in `jaunt-readline`.

pub mod city;
pub mod error;
pub mod game;
pub mod leaderboard;

// Re-export common error type
pub use error::{JauntError, Result};
