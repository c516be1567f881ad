//! Faraway score tracker: game storage.

pub mod memory;

pub use memory::InMemoryGameRepository;
