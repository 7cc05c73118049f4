//! Session state and core simulation types
//!
//! `SimulationState` is the snapshot handed to the AI and the collision
//! engine each tick, and the view the presentation layer renders from.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which of the two actors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human-controlled cycle
    Player,
    /// Scripted opponent
    Ai,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The AI crashed, the player survived
    PlayerWins,
    /// The player crashed, the AI survived
    AiWins,
    /// Both crashed on the same tick
    Draw,
}

/// A light cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub position: Vec2,
    /// Direction of travel; axis-aligned in practice but not assumed
    pub heading: Vec2,
}

impl Actor {
    pub fn new(position: Vec2, heading: Vec2) -> Self {
        Self { position, heading }
    }

    /// Usable as steering input: finite position and a finite, non-zero heading
    pub fn is_valid(&self) -> bool {
        self.position.is_finite() && self.heading.is_finite() && self.heading != Vec2::ZERO
    }

    /// Translate one tick along the heading
    pub fn advance(&mut self, speed: f32) {
        self.position += self.heading * speed;
    }
}

/// Complete session state (serializable for headless dumps)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Arena half-width
    pub bounds: f32,
    pub player: Actor,
    /// Player positions, oldest first
    pub player_trail: Vec<Vec2>,
    pub ai: Actor,
    /// AI positions, oldest first
    pub ai_trail: Vec<Vec2>,
    /// Active ticks since the last reset
    pub frame_count: u64,
    pub paused: bool,
    pub game_over: bool,
    /// Set together with `game_over`
    #[serde(default)]
    pub outcome: Option<Outcome>,
}

impl SimulationState {
    /// Fresh session in an arena of half-width `bounds`
    pub fn new(bounds: f32) -> Self {
        Self {
            bounds,
            player: Actor::new(PLAYER_START, PLAYER_START_HEADING),
            player_trail: Vec::new(),
            ai: Actor::new(AI_START, AI_START_HEADING),
            ai_trail: Vec::new(),
            frame_count: 0,
            paused: false,
            game_over: false,
            outcome: None,
        }
    }

    pub fn actor(&self, side: Side) -> &Actor {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }

    pub fn trail(&self, side: Side) -> &[Vec2] {
        match side {
            Side::Player => &self.player_trail,
            Side::Ai => &self.ai_trail,
        }
    }

    /// Trail points appended after the first `seen` ones.
    ///
    /// Renderers remember the trail length they last drew and pass it back
    /// here. A `seen` past the end (e.g. after a restart) yields nothing.
    pub fn trail_since(&self, side: Side, seen: usize) -> &[Vec2] {
        let trail = self.trail(side);
        trail.get(seen..).unwrap_or(&[])
    }

    /// Whether updates currently advance the simulation
    pub fn is_running(&self) -> bool {
        !self.paused && !self.game_over
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(DEFAULT_BOUNDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SimulationState::default();
        assert_eq!(state.bounds, 30.0);
        assert_eq!(state.player.position, Vec2::ZERO);
        assert_eq!(state.ai.position, Vec2::new(0.0, -10.0));
        assert_eq!(state.player.heading, Vec2::X);
        assert_eq!(state.ai.heading, Vec2::X);
        assert!(state.player_trail.is_empty() && state.ai_trail.is_empty());
        assert_eq!(state.frame_count, 0);
        assert!(state.is_running());
        assert_eq!(state.outcome, None);
    }

    #[test]
    fn test_actor_validity() {
        assert!(Actor::new(Vec2::ZERO, Vec2::X).is_valid());
        assert!(!Actor::new(Vec2::ZERO, Vec2::ZERO).is_valid());
        assert!(!Actor::new(Vec2::new(f32::NAN, 0.0), Vec2::X).is_valid());
        assert!(!Actor::new(Vec2::ZERO, Vec2::new(f32::INFINITY, 0.0)).is_valid());
    }

    #[test]
    fn test_trail_since() {
        let mut state = SimulationState::default();
        state.player_trail = vec![Vec2::X, Vec2::Y, Vec2::ONE];

        assert_eq!(state.trail_since(Side::Player, 0).len(), 3);
        assert_eq!(state.trail_since(Side::Player, 2), &[Vec2::ONE]);
        assert!(state.trail_since(Side::Player, 3).is_empty());
        assert!(state.trail_since(Side::Player, 10).is_empty());
        assert!(state.trail_since(Side::Ai, 0).is_empty());
    }

    #[test]
    fn test_side_accessors() {
        let state = SimulationState::default();
        assert_eq!(state.actor(Side::Ai).position, AI_START);
        assert_eq!(Side::Player.opponent(), Side::Ai);
        assert_eq!(Side::Ai.opponent(), Side::Player);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let state = SimulationState::default();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["frame_count"], 0);
        assert_eq!(json["game_over"], false);
        assert!(json["player_trail"].as_array().unwrap().is_empty());
    }
}
