//! Headless driver
//!
//! Plays a session without a presentation layer: the human side is replaced
//! by an input script of `tick:token` pairs.

use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::sim::{Game, Outcome};

/// Input tokens keyed by the tick they fire before
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputScript {
    /// Sorted by tick; ties keep script order
    entries: Vec<(u64, String)>,
}

impl InputScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tick: u64, token: impl Into<String>) {
        self.entries.push((tick, token.into()));
        self.entries.sort_by_key(|(t, _)| *t);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tokens scheduled for `tick`
    pub fn at(&self, tick: u64) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |(t, _)| *t == tick)
            .map(|(_, token)| token.as_str())
    }
}

impl FromStr for InputScript {
    type Err = Error;

    /// Parse `"40:up,90:left"`. Whitespace and empty entries are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut script = Self::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let bad = |reason| Error::Script {
                entry: entry.to_string(),
                reason,
            };
            let (tick, token) = entry.split_once(':').ok_or_else(|| bad("expected tick:token"))?;
            let tick = tick.trim().parse::<u64>().map_err(|_| bad("tick is not a number"))?;
            let token = token.trim();
            if token.is_empty() {
                return Err(bad("empty token"));
            }
            script.push(tick, token);
        }
        Ok(script)
    }
}

/// What happened during a headless run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub bounds: f32,
    pub max_ticks: u64,
    /// Calls to `update` made by the driver
    pub ticks_run: u64,
    pub frame_count: u64,
    pub game_over: bool,
    pub outcome: Option<Outcome>,
    pub player_position: Vec2,
    pub ai_position: Vec2,
    pub player_trail_len: usize,
    pub ai_trail_len: usize,
}

/// Drive `game` until it ends or `max_ticks` updates have been made.
///
/// Script tokens for tick `n` are applied right before the `n`th update
/// (counting from 0).
pub fn run(game: &mut Game, script: &InputScript, max_ticks: u64, log_every: u64) -> RunSummary {
    let mut ticks_run = 0;
    while ticks_run < max_ticks && !game.state().game_over {
        for token in script.at(ticks_run) {
            log::debug!("tick {}: input {:?}", ticks_run, token);
            game.handle_token(token);
        }
        game.update();
        ticks_run += 1;

        if log_every > 0 && ticks_run % log_every == 0 {
            let state = game.state();
            log::info!(
                "tick {}: player {} ai {} trails {}/{}",
                ticks_run,
                state.player.position,
                state.ai.position,
                state.player_trail.len(),
                state.ai_trail.len()
            );
        }
    }

    let state = game.state();
    RunSummary {
        seed: game.seed(),
        bounds: state.bounds,
        max_ticks,
        ticks_run,
        frame_count: state.frame_count,
        game_over: state.game_over,
        outcome: state.outcome,
        player_position: state.player.position,
        ai_position: state.ai.position,
        player_trail_len: state.player_trail.len(),
        ai_trail_len: state.ai_trail.len(),
    }
}
