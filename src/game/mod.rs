//! Simulation core: entities, spawning, per-frame step and collisions.
//!
//! Everything here works in logical playfield pixels and milliseconds and has
//! no terminal dependencies.

pub mod collision;
pub mod entities;
pub mod session;
pub mod spawner;
pub mod step;

pub use entities::{Bounds, Enemy, Player, PowerUp, Projectile, Shield};
pub use session::{PlayerInput, Session, StepOutcome};
