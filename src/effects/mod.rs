//! The imperative shell around the pure game core.
//!
//! Everything with side effects lives here: reading and writing best scores
//! and turning platform requests into turns.

mod skill;
mod store;

pub use skill::{Skill, ANSWER_SLOT, LEVEL_SLOT};
pub use store::{record_best_score, BestScoreStore, InMemoryStore, JsonFileStore, StoreError};
