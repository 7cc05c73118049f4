//! Fixed-step session loop
//!
//! `Game` owns the authoritative state. One call to [`Game::update`] is one
//! tick: move the player, let the AI steer and move, then check collisions
//! on the post-move snapshot.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::check_collisions;
use super::state::SimulationState;
use super::steering::{SteeringParams, decide};
use crate::consts::*;
use crate::settings::Settings;

/// Absolute steering direction for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parse a token: short names or browser key names, any case
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "up" | "arrowup" => Some(Direction::Up),
            "down" | "arrowdown" => Some(Direction::Down),
            "left" | "arrowleft" => Some(Direction::Left),
            "right" | "arrowright" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Unit heading on the plane (up is toward -z)
    pub fn heading(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// Whether this direction moves along z
    fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// Anything the input layer can send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    Pause,
    Resume,
    TogglePause,
    Restart,
}

impl Command {
    pub fn from_token(token: &str) -> Option<Self> {
        if let Some(dir) = Direction::from_token(token) {
            return Some(Command::Steer(dir));
        }
        match token.trim().to_lowercase().as_str() {
            "pause" => Some(Command::Pause),
            "resume" => Some(Command::Resume),
            "toggle" | "space" | " " => Some(Command::TogglePause),
            "restart" | "r" => Some(Command::Restart),
            _ => None,
        }
    }
}

/// A running session: state, AI randomness and steering knobs
#[derive(Debug, Clone)]
pub struct Game {
    state: SimulationState,
    seed: u64,
    rng: Pcg32,
    steering: SteeringParams,
}

impl Game {
    /// New session in the default arena
    pub fn new(seed: u64) -> Self {
        Self::with_bounds(DEFAULT_BOUNDS, seed)
    }

    pub fn with_bounds(bounds: f32, seed: u64) -> Self {
        log::info!("New session: bounds={}, seed={:#x}", bounds, seed);
        Self {
            state: SimulationState::new(bounds),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            steering: SteeringParams::default(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_bounds(settings.bounds, settings.seed.unwrap_or(DEFAULT_SEED))
    }

    /// Replace the AI steering knobs (tests pin the random turn chance)
    pub fn with_steering(mut self, steering: SteeringParams) -> Self {
        self.steering = steering;
        self
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> SimulationState {
        self.state.clone()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Advance one tick. No-op while paused or after game over.
    pub fn update(&mut self) {
        if !self.state.is_running() {
            return;
        }

        let state = &mut self.state;
        state.frame_count += 1;

        state.player.advance(SPEED);
        state.player_trail.push(state.player.position);

        let decision = decide(state, &self.steering, &mut self.rng);
        state.ai.heading = decision.heading;
        state.ai.advance(SPEED);
        state.ai_trail.push(state.ai.position);

        let report = check_collisions(state);
        if let Some(outcome) = report.outcome() {
            state.game_over = true;
            state.outcome = Some(outcome);
            log::info!(
                "Game over at frame {}: {:?} (player at {}, ai at {})",
                state.frame_count,
                outcome,
                state.player.position,
                state.ai.position
            );
        }
    }

    /// Steer the player. Only perpendicular turns are taken; a reversal or
    /// a repeat of the current axis is ignored.
    pub fn steer(&mut self, dir: Direction) {
        let heading = self.state.player.heading;
        let free_axis = if dir.is_vertical() { heading.y } else { heading.x };
        if free_axis == 0.0 {
            self.state.player.heading = dir.heading();
        }
    }

    /// Steer from a raw input token; unknown tokens are ignored
    pub fn change_direction(&mut self, token: &str) {
        if let Some(dir) = Direction::from_token(token) {
            self.steer(dir);
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Steer(dir) => self.steer(dir),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::TogglePause => self.toggle_pause(),
            Command::Restart => self.restart(),
        }
    }

    /// Dispatch any input token; unknown tokens are ignored
    pub fn handle_token(&mut self, token: &str) {
        if let Some(command) = Command::from_token(token) {
            self.apply(command);
        }
    }

    pub fn pause(&mut self) {
        self.state.paused = true;
    }

    pub fn resume(&mut self) {
        self.state.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.state.paused = !self.state.paused;
    }

    /// Back to the initial state, unpaused, with the AI's RNG reseeded
    pub fn restart(&mut self) {
        log::info!("Restart after {} frames", self.state.frame_count);
        self.state = SimulationState::new(self.state.bounds);
        self.rng = Pcg32::seed_from_u64(self.seed);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
