//! Fatal request errors.
//!
//! Anything in here aborts the request without a response. Recoverable
//! conditions (missing slots, store outages, corrupt attributes) are turned
//! into spoken prompts or log lines instead and never reach this type.

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkillError {
    #[error("Invalid intent '{name}'")]
    InvalidIntent { name: String },

    #[error("Request for application '{found}' but this skill serves '{expected}'")]
    ApplicationMismatch { expected: String, found: String },

    #[error("Malformed request envelope: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
