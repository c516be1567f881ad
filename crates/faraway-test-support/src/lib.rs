//! Shared test mocks and utilities for the Faraway score tracker.

mod cards;
mod clock;
mod repository;

pub use cards::{RegionBuilder, ShrineBuilder};
pub use clock::FixedClock;
pub use repository::{FailingGameRepository, RecordingGameRepository};
