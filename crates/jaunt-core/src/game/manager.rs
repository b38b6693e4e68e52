//! Game session lifecycle.
//!
//! `GameManager` drives one play-through at a time:
//!
//! ```text
//! NotStarted ──start──▶ InProgress(0) ──complete──▶ … ──complete──▶ Finished
//!      ▲                                                                │
//!      └─────────────────────────── start ──────────────────────────────┘
//! ```
//!
//! There is no backward transition; the only way out of Finished is a new
//! `start`.

use super::model::{CompletedLeg, GameSession};
use crate::city::{City, PointOfInterest};
use crate::error::{JauntError, Result};

/// The session lifecycle holder for the game.
///
/// `GameManager` owns at most one [`GameSession`]. No session means the
/// game has not started; starting a city replaces whatever came before.
#[derive(Debug, Default)]
pub struct GameManager {
    /// The active play-through, if any
    session: Option<GameSession>,
}

impl GameManager {
    /// Creates a manager with no active session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new session for `city`, discarding any session in
    /// progress. The tour is a fresh random permutation of the city's
    /// points and the clock starts on the first leg immediately.
    pub fn start(&mut self, city: City) -> &GameSession {
        self.session = Some(GameSession::new(city));
        // Safe to unwrap because the session was just set
        self.session.as_ref().unwrap()
    }

    /// Read access to the active session, if any.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// The point the player is currently at. `None` when no session is
    /// active or the tour has ended.
    pub fn current_point(&self) -> Option<&PointOfInterest> {
        self.session.as_ref().and_then(|s| s.current_point())
    }

    /// Completes the current leg: records its elapsed time, advances to
    /// the next point, and re-arms the leg clock.
    ///
    /// # Errors
    ///
    /// - [`JauntError::NoActiveSession`] if nothing has been started
    /// - [`JauntError::SessionFinished`] if the tour already ended
    pub fn complete_current_leg(&mut self) -> Result<CompletedLeg> {
        let session = self.session.as_mut().ok_or(JauntError::NoActiveSession)?;
        session.complete_current_leg()
    }

    /// True when an active session has visited every point of its tour.
    /// False when no session is active.
    pub fn is_finished(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_finished())
    }

    /// Drops the in-memory session, as when the player walks away from a
    /// hunt. Nothing is recorded.
    pub fn discard(&mut self) {
        self.session = None;
    }
}
