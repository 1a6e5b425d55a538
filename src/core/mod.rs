//! Core game types and logic.
//!
//! This module contains the pure functional core of the skill:
//! - Levels and the problem generator
//! - Typed session attributes and the phases derived from them
//! - Turn results and the effects a turn may request
//!
//! Nothing here performs I/O. Randomness is always passed in.

mod attributes;
mod level;
pub mod phrases;
mod problem;
mod state;
mod transition;

pub use attributes::SessionAttributes;
pub use level::{Level, UnknownLevel};
pub use problem::{generate_problem, Operands, Problem};
pub use state::{GamePhase, State};
pub use transition::{Reply, StateTransition, TurnEffect, TurnResponse, TurnResult};
