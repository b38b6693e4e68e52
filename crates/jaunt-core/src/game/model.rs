//! Game session domain model.
//!
//! A `GameSession` is one play-through of a city: a randomized tour of its
//! points of interest, a cursor into that tour, and the time recorded for
//! each completed leg.

use std::collections::HashMap;
use std::time::Instant;

use rand::prelude::*;

use crate::city::{City, PointOfInterest};
use crate::error::{JauntError, Result};

/// One play-through of a city, from the first point to the last.
///
/// The tour is a uniformly random permutation of the city's points, drawn
/// once at construction. The fields stay private so the session's
/// invariants hold: the cursor only moves forward, and exactly one elapsed
/// time is recorded per completed leg.
#[derive(Debug)]
pub struct GameSession {
    /// The city being toured
    city: City,
    /// The city's points in this session's visiting order
    tour: Vec<PointOfInterest>,
    /// Index of the next point to visit; equal to the tour length once finished
    current_index: usize,
    /// When the current leg started
    leg_started_at: Instant,
    /// Elapsed seconds per completed point, keyed by point ID
    elapsed_times: HashMap<String, f64>,
}

/// The outcome of completing one leg.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedLeg {
    /// The point whose task was just completed
    pub point: PointOfInterest,
    /// Time spent on this leg, in seconds
    pub seconds: f64,
}

impl GameSession {
    /// Starts a fresh session: shuffles the city's points into a tour and
    /// arms the clock for the first leg.
    pub(crate) fn new(city: City) -> Self {
        let mut tour = city.points_of_interest.clone();
        tour.shuffle(&mut rand::thread_rng());

        Self {
            city,
            tour,
            current_index: 0,
            leg_started_at: Instant::now(),
            elapsed_times: HashMap::new(),
        }
    }

    /// The city this session tours.
    pub fn city(&self) -> &City {
        &self.city
    }

    /// The visiting order for this session.
    pub fn tour(&self) -> &[PointOfInterest] {
        &self.tour
    }

    /// Index of the next point to visit. Equals the tour length once the
    /// session is finished.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The point the player is currently at, or `None` once finished.
    pub fn current_point(&self) -> Option<&PointOfInterest> {
        self.tour.get(self.current_index)
    }

    /// True once every point in the tour has been completed.
    pub fn is_finished(&self) -> bool {
        self.current_index >= self.tour.len()
    }

    /// The recorded time for a completed point, if that point has been
    /// passed.
    pub fn elapsed_seconds(&self, point_id: &str) -> Option<f64> {
        self.elapsed_times.get(point_id).copied()
    }

    /// Completed legs in visiting order, each with its recorded seconds.
    pub fn completed_legs(&self) -> impl Iterator<Item = (&PointOfInterest, f64)> {
        self.tour[..self.current_index].iter().map(|point| {
            let seconds = self.elapsed_times.get(&point.id).copied().unwrap_or(0.0);
            (point, seconds)
        })
    }

    /// Total recorded time across all completed legs, in seconds.
    pub fn total_seconds(&self) -> f64 {
        self.elapsed_times.values().sum()
    }

    /// Records the elapsed time for the current point, advances the cursor
    /// by one, and re-arms the clock for the next leg.
    ///
    /// The elapsed time is read from the monotonic clock and saturates at
    /// zero, so a clock anomaly can never record a negative leg.
    ///
    /// # Errors
    ///
    /// Returns [`JauntError::SessionFinished`] if the tour already ended;
    /// the session is left untouched.
    pub(crate) fn complete_current_leg(&mut self) -> Result<CompletedLeg> {
        let point = match self.tour.get(self.current_index) {
            Some(point) => point.clone(),
            None => return Err(JauntError::SessionFinished),
        };

        let now = Instant::now();
        let seconds = now.saturating_duration_since(self.leg_started_at).as_secs_f64();

        self.elapsed_times.insert(point.id.clone(), seconds);
        self.current_index += 1;
        self.leg_started_at = now;

        Ok(CompletedLeg { point, seconds })
    }
}
