//! Inputs to the game state machine.

use crate::core::Level;
use crate::error::SkillError;
use serde::{Deserialize, Serialize};

pub const PLAY_INTENT: &str = "play";
pub const ANSWER_INTENT: &str = "provide_answer";
pub const SCORE_INTENT: &str = "score";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const FALLBACK_INTENT: &str = "AMAZON.FallbackIntent";

/// Platform-side slot elicitation progress.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DialogState {
    Started,
    InProgress,
    Completed,
}

/// The closed set of intents the skill understands.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    NewGame,
    CheckAnswer,
    BestScore,
    Help,
    EndSession,
    Fallback,
}

impl Action {
    /// Map an intent name to an action.
    ///
    /// # Errors
    ///
    /// Returns `SkillError::InvalidIntent` for any name outside the closed set.
    pub fn from_intent_name(name: &str) -> Result<Self, SkillError> {
        match name {
            PLAY_INTENT => Ok(Self::NewGame),
            ANSWER_INTENT => Ok(Self::CheckAnswer),
            SCORE_INTENT => Ok(Self::BestScore),
            HELP_INTENT => Ok(Self::Help),
            CANCEL_INTENT | STOP_INTENT => Ok(Self::EndSession),
            FALLBACK_INTENT => Ok(Self::Fallback),
            other => Err(SkillError::InvalidIntent {
                name: other.to_string(),
            }),
        }
    }
}

/// Value of the `level` slot after boundary parsing.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LevelSlot {
    Missing,
    Valid(Level),
    /// The user named a level that does not exist.
    Invalid(String),
}

impl LevelSlot {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None => Self::Missing,
            Some(raw) => raw
                .parse()
                .map_or_else(|_| Self::Invalid(raw.to_string()), Self::Valid),
        }
    }
}

/// One turn of the conversation, as seen by the state machine.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TurnEvent {
    /// The skill was opened without an intent.
    Launch,
    Play {
        level: LevelSlot,
        dialog_state: Option<DialogState>,
    },
    Answer {
        answer: Option<String>,
        dialog_state: Option<DialogState>,
    },
    /// Best score as read from the store by the shell.
    BestScore { best: Option<u64> },
    Help,
    Stop,
    Fallback,
}

impl TurnEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Launch => "Launch",
            Self::Play { .. } => "Play",
            Self::Answer { .. } => "Answer",
            Self::BestScore { .. } => "BestScore",
            Self::Help => "Help",
            Self::Stop => "Stop",
            Self::Fallback => "Fallback",
        }
    }
}
