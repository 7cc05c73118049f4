//! Collision detection for cycles against walls and trails
//!
//! Pure function of the snapshot: nothing here mutates state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{inside_bounds, near};
use super::state::{Outcome, Side, SimulationState};
use crate::consts::{COLLISION_GRACE_FRAMES, OWN_TRAIL_GRACE, TRAIL_TOLERANCE};

/// Result of a collision check for both actors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionReport {
    pub player_collided: bool,
    pub ai_collided: bool,
}

impl CollisionReport {
    pub fn any(&self) -> bool {
        self.player_collided || self.ai_collided
    }

    /// How the session ends, if it does
    pub fn outcome(&self) -> Option<Outcome> {
        match (self.player_collided, self.ai_collided) {
            (false, false) => None,
            (true, false) => Some(Outcome::AiWins),
            (false, true) => Some(Outcome::PlayerWins),
            (true, true) => Some(Outcome::Draw),
        }
    }
}

/// Check both actors against the walls, their own trail and the opponent's.
///
/// Always clear during the first [`COLLISION_GRACE_FRAMES`] frames.
pub fn check_collisions(state: &SimulationState) -> CollisionReport {
    if state.frame_count < COLLISION_GRACE_FRAMES {
        return CollisionReport::default();
    }

    CollisionReport {
        player_collided: actor_collided(state, Side::Player),
        ai_collided: actor_collided(state, Side::Ai),
    }
}

fn actor_collided(state: &SimulationState, side: Side) -> bool {
    let pos = state.actor(side).position;
    if !inside_bounds(pos, state.bounds) {
        return true;
    }

    // Skip the segments just laid so a turn doesn't hit its own tail
    let own = state.trail(side);
    let own_old = &own[..own.len().saturating_sub(OWN_TRAIL_GRACE)];

    // Every opponent segment is live, however recent
    let opponent = state.trail(side.opponent());

    hits_any(pos, own_old) || hits_any(pos, opponent)
}

fn hits_any(pos: Vec2, segments: &[Vec2]) -> bool {
    segments.iter().any(|&seg| near(pos, seg, TRAIL_TOLERANCE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn live_state() -> SimulationState {
        let mut state = SimulationState::default();
        state.frame_count = COLLISION_GRACE_FRAMES;
        state
    }

    #[test]
    fn test_no_collision_in_open_arena() {
        let state = live_state();
        assert_eq!(check_collisions(&state), CollisionReport::default());
    }

    #[test]
    fn test_boundary_collisions() {
        let cases = [
            Vec2::new(30.1, 0.0),
            Vec2::new(-31.0, 0.0),
            Vec2::new(0.0, 30.1),
            Vec2::new(0.0, -30.1),
            Vec2::new(30.0, 0.0),
        ];
        for pos in cases {
            let mut state = live_state();
            state.player.position = pos;
            let report = check_collisions(&state);
            assert!(report.player_collided, "player at {pos} should collide");
            assert!(!report.ai_collided);
        }

        let mut state = live_state();
        state.ai.position = Vec2::new(31.0, 0.0);
        let report = check_collisions(&state);
        assert!(report.ai_collided);
        assert_eq!(report.outcome(), Some(Outcome::PlayerWins));
    }

    #[test]
    fn test_own_trail_beyond_grace_collides() {
        let mut state = live_state();
        state.player_trail = vec![Vec2::ZERO; 6];
        assert!(check_collisions(&state).player_collided);
    }

    #[test]
    fn test_own_trail_within_grace_ignored() {
        for len in 0..=5 {
            let mut state = live_state();
            state.player_trail = vec![Vec2::ZERO; len];
            assert!(!check_collisions(&state).player_collided, "len {len}");
        }
    }

    #[test]
    fn test_own_trail_grace_counts_from_newest() {
        let mut state = live_state();
        // Oldest point sits under the player, five fresh ones elsewhere
        state.player_trail = vec![Vec2::ZERO];
        state.player_trail.extend((1..=5).map(|i| Vec2::new(i as f32, 5.0)));
        assert!(check_collisions(&state).player_collided);

        // Same point among the five newest is ignored
        state.player_trail.rotate_left(1);
        assert!(!check_collisions(&state).player_collided);
    }

    #[test]
    fn test_opponent_trail_has_no_grace() {
        let mut state = live_state();
        state.ai_trail = vec![Vec2::new(0.05, -0.05)];
        let report = check_collisions(&state);
        assert!(report.player_collided);
        assert!(!report.ai_collided);
        assert_eq!(report.outcome(), Some(Outcome::AiWins));

        let mut state = live_state();
        state.player_trail = vec![state.ai.position];
        assert!(check_collisions(&state).ai_collided);
    }

    #[test]
    fn test_trail_tolerance_is_strict() {
        let mut state = live_state();
        state.ai_trail = vec![Vec2::new(0.25, 0.0)];
        assert!(!check_collisions(&state).player_collided);
    }

    #[test]
    fn test_head_on_is_draw() {
        let mut state = live_state();
        state.ai.position = Vec2::new(1.0, 0.0);
        state.player_trail = vec![Vec2::new(1.0, 0.0)];
        state.ai_trail = vec![Vec2::ZERO];
        let report = check_collisions(&state);
        assert!(report.any());
        assert_eq!(report.outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn test_degenerate_bounds_collide_everyone() {
        let mut state = live_state();
        state.bounds = 0.0;
        let report = check_collisions(&state);
        assert!(report.player_collided && report.ai_collided);
    }

    proptest! {
        #[test]
        fn prop_grace_period_never_collides(
            frame in 0u64..COLLISION_GRACE_FRAMES,
            px in -100.0f32..100.0,
            pz in -100.0f32..100.0,
            overlap in 0usize..20,
        ) {
            let mut state = SimulationState::default();
            state.frame_count = frame;
            state.player.position = Vec2::new(px, pz);
            state.player_trail = vec![state.player.position; overlap];
            state.ai_trail = vec![state.player.position; overlap];
            state.ai.position = state.player.position;
            prop_assert_eq!(check_collisions(&state), CollisionReport::default());
        }
    }
}
