//! Whisker-based steering for the AI cycle
//!
//! The AI is a reactive policy: it probes three short rays ("whiskers")
//! ahead, left and right of its heading and turns only when the forward ray
//! hits something close. It keeps no memory between ticks; everything it
//! knows comes from the snapshot.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geom::{inside_bounds, near, rotate_left, rotate_right};
use super::state::SimulationState;
use crate::consts::*;

/// Behavioral mode tag reported with each decision.
///
/// Only one mode exists; the tag is carried so callers can observe it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiMode {
    #[default]
    Defensive,
}

/// Heading chosen for the next tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteeringDecision {
    pub heading: Vec2,
    pub mode: AiMode,
}

impl SteeringDecision {
    fn fallback() -> Self {
        Self {
            heading: FALLBACK_HEADING,
            mode: AiMode::Defensive,
        }
    }
}

/// Sample index (1..=WHISKER_SAMPLES) of the first hit along each whisker.
///
/// `WHISKER_SAMPLES` means the whisker is clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhiskerReadings {
    pub forward: u32,
    pub left: u32,
    pub right: u32,
}

/// Knobs injected into [`decide`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringParams {
    /// Chance per tick of a cosmetic random turn when the way ahead is clear
    pub random_turn_chance: f64,
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self {
            random_turn_chance: RANDOM_TURN_CHANCE,
        }
    }
}

impl SteeringParams {
    /// Random turn chance as a valid probability; NaN and infinities read as 0
    fn turn_chance(&self) -> f64 {
        let chance = self.random_turn_chance;
        if chance.is_finite() { chance.clamp(0.0, 1.0) } else { 0.0 }
    }
}

/// Cast the three whiskers from the AI's position.
///
/// Obstacles are every player trail point plus the AI's own trail minus its
/// [`AI_TRAIL_GRACE`] newest points. Unusable input reads as all zeros.
pub fn cast_whiskers(state: &SimulationState) -> WhiskerReadings {
    let ai = &state.ai;
    if !ai.is_valid() {
        return WhiskerReadings::default();
    }

    let own_old = &state.ai_trail[..state.ai_trail.len().saturating_sub(AI_TRAIL_GRACE)];
    let obstacles = || state.player_trail.iter().chain(own_old.iter());

    let probe = |dir: Vec2| -> u32 {
        (1..=WHISKER_SAMPLES)
            .find(|&i| {
                let sample = ai.position + dir * (i as f32 * WHISKER_STEP);
                !inside_bounds(sample, state.bounds)
                    || obstacles().any(|&p| near(sample, p, WHISKER_TOLERANCE))
            })
            .unwrap_or(WHISKER_SAMPLES)
    };

    let heading = ai.heading;
    WhiskerReadings {
        forward: probe(heading),
        left: probe(rotate_left(heading)),
        right: probe(rotate_right(heading)),
    }
}

/// Choose the AI heading for the coming tick.
///
/// 1. Forward blocked within [`FORWARD_TURN_THRESHOLD`] samples: turn toward
///    the side with strictly more clearance, right on ties.
/// 2. Otherwise a random perpendicular turn with `params.random_turn_chance`.
/// 3. Otherwise keep going.
///
/// Unusable input (invalid AI actor or non-finite player position) yields
/// the fallback heading `(1, 0)`.
pub fn decide<R: Rng>(
    state: &SimulationState,
    params: &SteeringParams,
    rng: &mut R,
) -> SteeringDecision {
    if !state.ai.is_valid() || !state.player.position.is_finite() {
        return SteeringDecision::fallback();
    }

    let heading = state.ai.heading;
    let whiskers = cast_whiskers(state);
    log::trace!("whiskers at frame {}: {:?}", state.frame_count, whiskers);

    let heading = if whiskers.forward < FORWARD_TURN_THRESHOLD {
        let turned = if whiskers.left > whiskers.right {
            rotate_left(heading)
        } else {
            rotate_right(heading)
        };
        log::debug!(
            "AI avoiding obstacle at frame {} ({:?}): {} -> {}",
            state.frame_count,
            whiskers,
            heading,
            turned
        );
        turned
    } else if rng.random_bool(params.turn_chance()) {
        let turned = if rng.random_bool(0.5) {
            rotate_left(heading)
        } else {
            rotate_right(heading)
        };
        log::debug!("AI random turn at frame {}: {} -> {}", state.frame_count, heading, turned);
        turned
    } else {
        heading
    };

    SteeringDecision {
        heading,
        mode: AiMode::Defensive,
    }
}
