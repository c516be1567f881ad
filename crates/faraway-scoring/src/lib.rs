//! Faraway score tracker: scoring context.
//!
//! Turns a player's placed regions and collected shrines into a final score
//! by revealing regions from the last placed to the first, and determines
//! the winners of a game.

pub mod application;
pub mod domain;
