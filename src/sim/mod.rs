//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Snapshots are read-only for the AI and the collision engine
//! - No rendering or platform dependencies

pub mod collision;
pub mod geom;
pub mod state;
pub mod steering;
pub mod tick;

pub use collision::{CollisionReport, check_collisions};
pub use geom::{inside_bounds, near, rotate_left, rotate_right};
pub use state::{Actor, Outcome, Side, SimulationState};
pub use steering::{AiMode, SteeringDecision, SteeringParams, WhiskerReadings, cast_whiskers, decide};
pub use tick::{Command, Direction, Game};
