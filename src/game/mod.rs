//! The game session state machine.
//!
//! Events come in, [`crate::core::TurnResult`]s come out. The shell in
//! [`crate::effects`] decides which event a request maps to and carries out
//! the effects a result asks for.

mod event;
pub mod handlers;
mod transition;

pub use event::{
    Action, DialogState, LevelSlot, TurnEvent, ANSWER_INTENT, CANCEL_INTENT, FALLBACK_INTENT,
    HELP_INTENT, PLAY_INTENT, SCORE_INTENT, STOP_INTENT,
};
pub use transition::transition;
