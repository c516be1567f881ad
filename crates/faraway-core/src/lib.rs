//! Faraway Core: shared domain abstractions.
//!
//! This crate defines the traits and types the scoring context and its
//! collaborators depend on. It contains no infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
