//! City domain module.
//!
//! This module contains the city catalog domain models and the built-in
//! presets.
//!
//! # Module Structure
//!
//! - `model`: Core catalog models (`City`, `PointOfInterest`, `Task`)
//! - `preset`: The built-in city catalog
//!
//! # Usage
//!
//! ```ignore
//! use jaunt_core::city::{City, PointOfInterest, Task, builtin_cities};
//! ```

mod model;
mod preset;

// Re-export public API
pub use model::{City, PointOfInterest, Task};
pub use preset::builtin_cities;
