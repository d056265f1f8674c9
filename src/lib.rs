//! Alien Invasion: a terminal arcade shooter.
//!
//! The library holds the whole game core (settings, entities, fleet,
//! collisions, phase machine and frame driver) behind the `Canvas` and
//! `HighScoreStore` seams; `main.rs` wires it to a real terminal.

pub mod collision;
pub mod config;
pub mod display;
pub mod driver;
pub mod entities;
pub mod error;
pub mod fleet;
pub mod game;
pub mod high_score;
pub mod input;
pub mod menu;
pub mod settings;
pub mod stats;
