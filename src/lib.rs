//! Bullet Hell - a terminal arcade game.
//!
//! - `game`: simulation core (entities, spawning, stepping, collisions)
//! - `app`: scene state machine routing input and ticks
//! - `ui`: ratatui renderers for every scene
//! - `scores`: JSON leaderboard persistence
//! - `config`: tunables with JSON overrides

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod game;
pub mod input;
pub mod scores;
pub mod ui;

pub use app::{App, Scene};
pub use config::GameConfig;
pub use error::StoreError;
