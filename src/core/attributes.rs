//! Typed session attributes.
//!
//! The voice platform round-trips an untyped attributes bag between turns.
//! Inside the crate that bag is always a [`SessionAttributes`] value; the
//! envelope layer converts and validates at the boundary.

use super::level::Level;
use super::problem::Problem;
use super::state::GamePhase;

/// Per-conversation game state.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SessionAttributes {
    /// Points accumulated in the current game.
    pub score: u64,
    /// Level chosen by the last `new game`; kept after a wrong answer.
    pub level: Option<Level>,
    /// The active problem, if any.
    pub problem: Option<Problem>,
}

impl SessionAttributes {
    pub fn expected_answer(&self) -> Option<i64> {
        self.problem.as_ref().map(|p| p.expected_answer)
    }

    pub fn has_active_problem(&self) -> bool {
        self.problem.is_some()
    }

    pub fn phase(&self) -> GamePhase {
        if self.has_active_problem() {
            GamePhase::AwaitingAnswer
        } else {
            GamePhase::Idle
        }
    }

    /// Score of a game still in progress, if it is worth recording.
    pub fn score_in_play(&self) -> Option<u64> {
        (self.has_active_problem() && self.score > 0).then_some(self.score)
    }
}
