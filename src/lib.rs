//! Mental Math: a voice skill that poses arithmetic problems and keeps score.
//!
//! The skill follows a "pure core, imperative shell" layout. The game itself
//! is a pure function from (attributes, event) to a turn result; the shell
//! handles the platform envelopes and the best-score store.
//!
//! # Modules
//!
//! - [`core`]: levels, problems, typed session attributes, turn results
//! - [`game`]: intent dispatch and the turn handlers
//! - [`envelope`]: platform request/response JSON and boundary validation
//! - [`effects`]: the [`Skill`] shell and best-score stores
//!
//! # Example
//!
//! ```rust
//! use mental_math::{InMemoryStore, Skill, SkillConfig};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut skill = Skill::with_rng(
//!     SkillConfig::default(),
//!     InMemoryStore::new(),
//!     StdRng::seed_from_u64(1),
//! );
//!
//! let request = r#"{
//!     "session": {
//!         "new": true,
//!         "sessionId": "session-1",
//!         "application": { "applicationId": "app-1" }
//!     },
//!     "request": { "type": "LaunchRequest", "requestId": "request-1" }
//! }"#;
//!
//! let response = skill.handle_json(request).unwrap().unwrap();
//! assert!(response.speech().unwrap().starts_with("Welcome to Mental Math"));
//! ```

pub mod config;
pub mod core;
pub mod effects;
pub mod envelope;
pub mod error;
pub mod game;

// Re-export commonly used types
pub use config::{LogFormat, SkillConfig};
pub use core::{GamePhase, Level, Problem, SessionAttributes, State, TurnResult};
pub use effects::{BestScoreStore, InMemoryStore, JsonFileStore, Skill, StoreError};
pub use envelope::{RequestEnvelope, ResponseEnvelope};
pub use error::SkillError;
