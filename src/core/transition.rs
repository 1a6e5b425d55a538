//! Results of a single turn.
//!
//! A turn handler never performs I/O. It returns the next attributes, what
//! to say, and a list of effects for the shell to carry out.

use super::attributes::SessionAttributes;
use super::level::Level;
use super::state::{GamePhase, State};
use serde::{Deserialize, Serialize};

/// Record of a move between two states.
///
/// Carries no wall-clock time, so a turn's result depends only on its inputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    pub from: S,
    pub to: S,
}

impl<S: State> StateTransition<S> {
    pub fn new(from: S, to: S) -> Self {
        Self { from, to }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// A spoken, terminal answer for this turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    /// Card title shown in the companion app.
    pub title: String,
    pub speech: String,
    pub reprompt: Option<String>,
    pub end_session: bool,
}

impl Reply {
    pub fn new(title: impl Into<String>, speech: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            speech: speech.into(),
            reprompt: None,
            end_session: false,
        }
    }

    pub fn with_reprompt(mut self, reprompt: impl Into<String>) -> Self {
        self.reprompt = Some(reprompt.into());
        self
    }

    pub fn ending_session(mut self) -> Self {
        self.end_session = true;
        self
    }
}

/// What goes back to the platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnResponse {
    Speak(Reply),
    /// Let the platform continue its own slot elicitation dialog.
    Delegate,
}

/// Side effects requested by a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnEffect {
    /// A game finished with this score; persist it if it is a new best.
    RecordScore { score: u64, level: Option<Level> },
}

/// Result of a turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnResult {
    pub attributes: SessionAttributes,
    pub response: TurnResponse,
    pub effects: Vec<TurnEffect>,
    pub transition: StateTransition<GamePhase>,
}

impl TurnResult {
    /// Speak `reply`, moving from `previous` to the phase of `attributes`.
    pub fn speak(previous: &SessionAttributes, attributes: SessionAttributes, reply: Reply) -> Self {
        let to = if reply.end_session {
            GamePhase::Ended
        } else {
            attributes.phase()
        };
        Self {
            transition: StateTransition::new(previous.phase(), to),
            attributes,
            response: TurnResponse::Speak(reply),
            effects: vec![],
        }
    }

    /// Delegate to the platform, keeping `attributes` as they are.
    pub fn delegate(attributes: SessionAttributes) -> Self {
        let phase = attributes.phase();
        Self {
            transition: StateTransition::new(phase, phase),
            attributes,
            response: TurnResponse::Delegate,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: TurnEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = TurnEffect>) -> Self {
        self.effects.extend(effects);
        self
    }

    pub fn reply(&self) -> Option<&Reply> {
        match &self.response {
            TurnResponse::Speak(reply) => Some(reply),
            TurnResponse::Delegate => None,
        }
    }

    pub fn is_delegate(&self) -> bool {
        matches!(self.response, TurnResponse::Delegate)
    }
}
