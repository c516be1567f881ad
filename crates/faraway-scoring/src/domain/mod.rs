//! Domain layer: cards, tableaux, the scoring engine and the game aggregate.

pub mod cards;
pub mod commands;
pub mod engine;
pub mod game;
pub mod player;
pub mod repository;
pub mod rules;
pub mod tableau;
