//! Leaderboard store.
//!
//! The in-memory collection of recorded times plus its persistence
//! lifecycle. The storage backend is injected at construction, so callers
//! decide where the document lives and when it is loaded.

use std::cmp::Ordering;
use std::sync::Arc;

use super::model::LeaderboardEntry;
use super::repository::LeaderboardRepository;
use crate::error::Result;

/// The append-only collection of leaderboard entries.
///
/// Entries keep their insertion order in memory. Every append rewrites the
/// whole persisted document through the injected repository; queries are
/// pure reads over the in-memory collection.
pub struct LeaderboardStore {
    /// All recorded entries, in insertion order
    entries: Vec<LeaderboardEntry>,
    /// Persistent storage backend for the leaderboard document
    repository: Arc<dyn LeaderboardRepository>,
}

impl LeaderboardStore {
    /// Creates an empty store backed by `repository`.
    pub fn new(repository: Arc<dyn LeaderboardRepository>) -> Self {
        Self {
            entries: Vec::new(),
            repository,
        }
    }

    /// Replaces the in-memory collection with the persisted document.
    ///
    /// A missing document simply yields an empty collection. On a read or
    /// parse failure the collection is left empty and the error is
    /// returned, so the caller can surface it and keep playing.
    pub fn load(&mut self) -> Result<()> {
        match self.repository.load() {
            Ok(entries) => {
                self.entries = entries;
                Ok(())
            }
            Err(err) => {
                self.entries.clear();
                Err(err)
            }
        }
    }

    /// Appends `entry` and persists the full collection.
    ///
    /// On a persistence failure the entry is kept in memory and the error
    /// is returned; the caller decides whether to tell the player.
    pub fn add(&mut self, entry: LeaderboardEntry) -> Result<()> {
        self.entries.push(entry);
        self.repository.save(&self.entries)
    }

    /// All entries for one point of one city, fastest first.
    ///
    /// The sort is stable, so equal times keep their insertion order. A
    /// city/point pair with no entries yields an empty vec.
    pub fn query(&self, city_name: &str, point_name: &str) -> Vec<LeaderboardEntry> {
        let mut matches: Vec<LeaderboardEntry> = self
            .entries
            .iter()
            .filter(|e| e.city_name == city_name && e.point_name == point_name)
            .cloned()
            .collect();

        matches.sort_by(|a, b| {
            a.time_taken
                .partial_cmp(&b.time_taken)
                .unwrap_or(Ordering::Equal)
        });
        matches
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JauntError;
    use std::sync::Mutex;

    // Mock LeaderboardRepository for testing
    struct MockRepository {
        saved: Mutex<Vec<LeaderboardEntry>>,
    }

    impl MockRepository {
        fn new() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
            }
        }

        fn with_entries(entries: Vec<LeaderboardEntry>) -> Self {
            Self {
                saved: Mutex::new(entries),
            }
        }
    }

    impl LeaderboardRepository for MockRepository {
        fn load(&self) -> Result<Vec<LeaderboardEntry>> {
            Ok(self.saved.lock().unwrap().clone())
        }

        fn save(&self, entries: &[LeaderboardEntry]) -> Result<()> {
            *self.saved.lock().unwrap() = entries.to_vec();
            Ok(())
        }
    }

    // Repository whose writes always fail
    struct BrokenRepository;

    impl LeaderboardRepository for BrokenRepository {
        fn load(&self) -> Result<Vec<LeaderboardEntry>> {
            Err(JauntError::data_access("document is corrupt"))
        }

        fn save(&self, _entries: &[LeaderboardEntry]) -> Result<()> {
            Err(JauntError::io("disk full"))
        }
    }

    #[test]
    fn test_add_appends_and_persists() {
        let repository = Arc::new(MockRepository::new());
        let mut store = LeaderboardStore::new(repository.clone());

        store
            .add(LeaderboardEntry::new("Atlanta", "Fox Theatre", "Ann", 12.5))
            .unwrap();

        assert_eq!(store.len(), 1);
        let saved = repository.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].player_name, "Ann");
    }

    #[test]
    fn test_failed_save_keeps_the_entry_in_memory() {
        let mut store = LeaderboardStore::new(Arc::new(BrokenRepository));

        let result = store.add(LeaderboardEntry::new("Atlanta", "Fox Theatre", "Ann", 12.5));

        assert!(result.is_err());
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].player_name, "Ann");
    }

    #[test]
    fn test_load_replaces_the_collection() {
        let existing = vec![
            LeaderboardEntry::new("Chicago", "Navy Pier", "Bo", 9.0),
            LeaderboardEntry::new("Chicago", "Grant Park", "Cy", 4.5),
        ];
        let mut store = LeaderboardStore::new(Arc::new(MockRepository::with_entries(existing)));

        store.load().unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.entries()[0].player_name, "Bo");
    }

    #[test]
    fn test_failed_load_leaves_an_empty_collection() {
        let mut store = LeaderboardStore::new(Arc::new(BrokenRepository));

        let result = store.load();

        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_query_sorts_fastest_first() {
        let mut store = LeaderboardStore::new(Arc::new(MockRepository::new()));
        store
            .add(LeaderboardEntry::new("Atlanta", "Fox Theatre", "Ann", 12.5))
            .unwrap();
        store
            .add(LeaderboardEntry::new("Atlanta", "Fox Theatre", "Bo", 3.25))
            .unwrap();
        store
            .add(LeaderboardEntry::new("Atlanta", "Fox Theatre", "Cy", 8.0))
            .unwrap();

        let ranked = store.query("Atlanta", "Fox Theatre");
        let players: Vec<&str> = ranked.iter().map(|e| e.player_name.as_str()).collect();
        assert_eq!(players, ["Bo", "Cy", "Ann"]);
    }

    #[test]
    fn test_query_is_stable_for_equal_times() {
        let mut store = LeaderboardStore::new(Arc::new(MockRepository::new()));
        store
            .add(LeaderboardEntry::new("Atlanta", "Fox Theatre", "First", 5.0))
            .unwrap();
        store
            .add(LeaderboardEntry::new("Atlanta", "Fox Theatre", "Second", 5.0))
            .unwrap();

        let ranked = store.query("Atlanta", "Fox Theatre");
        let players: Vec<&str> = ranked.iter().map(|e| e.player_name.as_str()).collect();
        assert_eq!(players, ["First", "Second"]);
    }

    #[test]
    fn test_query_matches_both_city_and_point() {
        let mut store = LeaderboardStore::new(Arc::new(MockRepository::new()));
        store
            .add(LeaderboardEntry::new("Atlanta", "Fox Theatre", "Ann", 12.5))
            .unwrap();
        store
            .add(LeaderboardEntry::new("Atlanta", "Zoo Atlanta", "Ann", 6.0))
            .unwrap();
        store
            .add(LeaderboardEntry::new("Chicago", "Fox Theatre", "Bo", 2.0))
            .unwrap();

        let ranked = store.query("Atlanta", "Fox Theatre");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].player_name, "Ann");
    }

    #[test]
    fn test_query_without_matches_is_empty_not_an_error() {
        let store = LeaderboardStore::new(Arc::new(MockRepository::new()));
        assert!(store.query("Atlanta", "Fox Theatre").is_empty());
    }

    #[test]
    fn test_same_player_may_appear_more_than_once() {
        let mut store = LeaderboardStore::new(Arc::new(MockRepository::new()));
        store
            .add(LeaderboardEntry::new("Atlanta", "Fox Theatre", "Ann", 12.5))
            .unwrap();
        store
            .add(LeaderboardEntry::new("Atlanta", "Fox Theatre", "Ann", 9.75))
            .unwrap();

        assert_eq!(store.query("Atlanta", "Fox Theatre").len(), 2);
    }
}
