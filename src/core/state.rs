//! Game phases and the `State` trait they implement.
//!
//! The attributes bag is the real state; a phase is the coarse view of it
//! that transitions are logged and reasoned about in.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are small values that can be compared,
/// logged and serialized alongside a transition record.
///
/// # Example
///
/// ```rust
/// use mental_math::core::{GamePhase, State};
///
/// assert_eq!(GamePhase::AwaitingAnswer.name(), "AwaitingAnswer");
/// assert!(GamePhase::Ended.is_final());
/// assert!(!GamePhase::Idle.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name for display/logging.
    fn name(&self) -> &str;

    /// Terminal states accept no further turns.
    fn is_final(&self) -> bool {
        false
    }
}

/// Where a conversation stands between turns.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GamePhase {
    /// No problem is active: before the first game or after a wrong answer.
    Idle,
    /// A problem has been posed and the next answer is scored against it.
    AwaitingAnswer,
    /// The user closed the session.
    Ended,
}

impl State for GamePhase {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::AwaitingAnswer => "AwaitingAnswer",
            Self::Ended => "Ended",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Ended)
    }
}
