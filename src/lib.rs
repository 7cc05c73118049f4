//! Cycle Arena - a two-player light-cycle arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, trail collisions, steering AI)
//! - `settings`: JSON-backed session configuration
//! - `runner`: Headless driver that scripts the human side
//!
//! Rendering and input capture are not part of this crate. A presentation
//! layer reads [`sim::SimulationState`] once per tick and forwards raw input
//! tokens to [`sim::Game::change_direction`] / [`sim::Game::handle_token`].

pub mod error;
pub mod runner;
pub mod settings;
pub mod sim;

pub use error::Error;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Distance each actor travels per tick (world units)
    pub const SPEED: f32 = 0.1;

    /// Default arena half-width
    pub const DEFAULT_BOUNDS: f32 = 30.0;

    /// Collisions are not evaluated before this many frames have elapsed
    pub const COLLISION_GRACE_FRAMES: u64 = 10;
    /// Most recent own-trail points ignored by the collision engine
    pub const OWN_TRAIL_GRACE: usize = 5;
    /// Per-axis proximity for trail collisions
    pub const TRAIL_TOLERANCE: f32 = 0.1;

    /// Samples per whisker
    pub const WHISKER_SAMPLES: u32 = 20;
    /// Distance between consecutive whisker samples
    pub const WHISKER_STEP: f32 = 0.1;
    /// Per-axis proximity for whisker hits
    pub const WHISKER_TOLERANCE: f32 = 0.15;
    /// Most recent AI trail points the AI does not treat as obstacles
    pub const AI_TRAIL_GRACE: usize = 10;
    /// Forward whisker readings below this force a turn (1.0 world unit)
    pub const FORWARD_TURN_THRESHOLD: u32 = 10;
    /// Per-tick chance of a cosmetic random turn
    pub const RANDOM_TURN_CHANCE: f64 = 0.02;

    /// Spawn points and headings (y carries world z)
    pub const PLAYER_START: Vec2 = Vec2::new(0.0, 0.0);
    pub const PLAYER_START_HEADING: Vec2 = Vec2::new(1.0, 0.0);
    pub const AI_START: Vec2 = Vec2::new(0.0, -10.0);
    pub const AI_START_HEADING: Vec2 = Vec2::new(1.0, 0.0);

    /// Heading returned by the AI when its input is unusable
    pub const FALLBACK_HEADING: Vec2 = Vec2::new(1.0, 0.0);

    /// Seed used when a session is not given one
    pub const DEFAULT_SEED: u64 = 0x5EED_C1C1_E000_0001;
}
