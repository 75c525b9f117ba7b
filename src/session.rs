// SPDX-License-Identifier: PMPL-1.0-or-later

//! Round and time-budget bookkeeping for one game.
//!
//! The session never sees passwords; it only learns how each round ended.
//! A pass advances the round and shrinks the time limit toward the floor,
//! anything else ends the game with both values frozen.

use crate::config::GameConfig;
use crate::types::Violation;
use serde::Serialize;
use std::time::Duration;

/// How a single round ended, as observed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Passed,
    Failed(Violation),
    TimedOut,
    /// The player abandoned input or the terminal closed.
    InputClosed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum GameEnd {
    Failed { round: u32, violation: Violation },
    TimedOut { round: u32 },
    InputClosed { round: u32 },
}

impl GameEnd {
    pub fn round(&self) -> u32 {
        match self {
            GameEnd::Failed { round, .. }
            | GameEnd::TimedOut { round }
            | GameEnd::InputClosed { round } => *round,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub rounds_completed: u32,
    pub end: Option<GameEnd>,
}

#[derive(Debug, Clone)]
pub struct Session {
    round: u32,
    time_limit: Duration,
    decrement: Duration,
    floor: Duration,
    completed: u32,
    finished: Option<GameEnd>,
}

impl Session {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            round: config.start_round.max(1),
            time_limit: config.initial_time().max(config.min_time()),
            decrement: config.time_decrement(),
            floor: config.min_time(),
            completed: 0,
            finished: None,
        }
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    pub fn rounds_completed(&self) -> u32 {
        self.completed
    }

    pub fn is_over(&self) -> bool {
        self.finished.is_some()
    }

    /// Apply a round outcome. Once the game has ended further outcomes are
    /// ignored and the existing end is returned.
    pub fn record(&mut self, outcome: RoundOutcome) -> Option<&GameEnd> {
        if self.finished.is_some() {
            return self.finished.as_ref();
        }

        let round = self.round;
        match outcome {
            RoundOutcome::Passed => {
                self.round = self.round.saturating_add(1);
                self.completed = self.completed.saturating_add(1);
                self.time_limit = self
                    .time_limit
                    .saturating_sub(self.decrement)
                    .max(self.floor);
                tracing::debug!(
                    next_round = self.round,
                    time_limit_secs = self.time_limit.as_secs(),
                    "round passed"
                );
            }
            RoundOutcome::Failed(violation) => {
                self.finished = Some(GameEnd::Failed { round, violation });
            }
            RoundOutcome::TimedOut => {
                self.finished = Some(GameEnd::TimedOut { round });
            }
            RoundOutcome::InputClosed => {
                self.finished = Some(GameEnd::InputClosed { round });
            }
        }
        self.finished.as_ref()
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            rounds_completed: self.completed,
            end: self.finished.clone(),
        }
    }
}
