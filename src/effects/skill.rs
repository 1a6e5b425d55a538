//! The skill: request envelope in, response envelope out.
//!
//! This is the imperative shell around [`crate::game::transition`]. It
//! validates the attributes bag, maps the request to a [`TurnEvent`], runs
//! the pure transition and then carries out the requested effects against
//! the injected [`BestScoreStore`]. Store failures are logged and never
//! change what the user hears.

use super::store::{record_best_score, BestScoreStore};
use crate::config::SkillConfig;
use crate::core::{SessionAttributes, State, TurnEffect};
use crate::envelope::{validate_attributes, Intent, Request, RequestEnvelope, ResponseEnvelope, Session};
use crate::error::SkillError;
use crate::game::{transition, Action, DialogState, LevelSlot, TurnEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const LEVEL_SLOT: &str = "level";
pub const ANSWER_SLOT: &str = "answer";

pub struct Skill<S, R = StdRng> {
    config: SkillConfig,
    store: S,
    rng: R,
}

impl<S: BestScoreStore> Skill<S, StdRng> {
    /// Create a skill drawing problems from an entropy-seeded generator.
    pub fn new(config: SkillConfig, store: S) -> Self {
        Self::with_rng(config, store, StdRng::from_entropy())
    }
}

impl<S: BestScoreStore, R: Rng> Skill<S, R> {
    pub fn with_rng(config: SkillConfig, store: S, rng: R) -> Self {
        Self { config, store, rng }
    }

    pub fn config(&self) -> &SkillConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parse a raw JSON request and handle it.
    ///
    /// # Errors
    ///
    /// Returns `SkillError::MalformedRequest` when the envelope cannot be
    /// parsed, plus any error from [`Skill::handle`].
    pub fn handle_json(&mut self, raw: &str) -> Result<Option<ResponseEnvelope>, SkillError> {
        let envelope: RequestEnvelope = serde_json::from_str(raw)?;
        self.handle(&envelope)
    }

    /// Handle one request.
    ///
    /// Returns `None` for session-ended notifications, which take no response.
    ///
    /// # Errors
    ///
    /// Returns `SkillError::ApplicationMismatch` when the request targets a
    /// different application and `SkillError::InvalidIntent` for intents
    /// outside the skill's closed set.
    pub fn handle(
        &mut self,
        envelope: &RequestEnvelope,
    ) -> Result<Option<ResponseEnvelope>, SkillError> {
        let session = &envelope.session;
        let request_id = envelope.request.request_id();
        let application_id = session.application.application_id.as_str();

        if !self.config.accepts(application_id) {
            return Err(SkillError::ApplicationMismatch {
                expected: self.config.application_id.clone().unwrap_or_default(),
                found: application_id.to_string(),
            });
        }

        if session.new {
            tracing::info!(
                request_id = %request_id,
                session_id = %session.session_id,
                "Session started"
            );
        }

        let attributes = match validate_attributes(session.attributes.as_ref()) {
            Ok(attributes) => attributes,
            Err(violations) => {
                tracing::warn!(
                    session_id = %session.session_id,
                    ?violations,
                    "Discarding invalid session attributes"
                );
                SessionAttributes::default()
            }
        };

        let event = match &envelope.request {
            Request::Launch { .. } => TurnEvent::Launch,
            Request::Intent {
                intent,
                dialog_state,
                ..
            } => {
                tracing::info!(
                    intent = %intent.name,
                    request_id = %request_id,
                    session_id = %session.session_id,
                    "Intent received"
                );
                self.event_for(intent, *dialog_state, session)?
            }
            Request::SessionEnded { reason, .. } => {
                tracing::info!(
                    request_id = %request_id,
                    session_id = %session.session_id,
                    reason = reason.as_deref().unwrap_or("unknown"),
                    "Session ended"
                );
                if let Some(score) = attributes.score_in_play() {
                    self.apply_effects(
                        session,
                        &[TurnEffect::RecordScore {
                            score,
                            level: attributes.level,
                        }],
                    );
                }
                return Ok(None);
            }
        };

        let event_name = event.name();
        let result = transition(&attributes, event, &mut self.rng);
        tracing::debug!(
            session_id = %session.session_id,
            event = event_name,
            from = result.transition.from.name(),
            to = result.transition.to.name(),
            score = result.attributes.score,
            "Turn complete"
        );

        self.apply_effects(session, &result.effects);
        Ok(Some(ResponseEnvelope::from(&result)))
    }

    fn event_for(
        &self,
        intent: &Intent,
        dialog_state: Option<DialogState>,
        session: &Session,
    ) -> Result<TurnEvent, SkillError> {
        let event = match Action::from_intent_name(&intent.name)? {
            Action::NewGame => TurnEvent::Play {
                level: LevelSlot::parse(intent.slot_value(LEVEL_SLOT)),
                dialog_state,
            },
            Action::CheckAnswer => TurnEvent::Answer {
                answer: intent.slot_value(ANSWER_SLOT).map(str::to_string),
                dialog_state,
            },
            Action::BestScore => TurnEvent::BestScore {
                best: self.lookup_best_score(session),
            },
            Action::Help => TurnEvent::Help,
            Action::EndSession => TurnEvent::Stop,
            Action::Fallback => TurnEvent::Fallback,
        };
        Ok(event)
    }

    fn lookup_best_score(&self, session: &Session) -> Option<u64> {
        let user_id = session.user_id()?;
        match self.store.get_best_score(user_id) {
            Ok(best) => best,
            Err(err) => {
                tracing::warn!(
                    session_id = %session.session_id,
                    error = %err,
                    "Best score lookup failed"
                );
                None
            }
        }
    }

    fn apply_effects(&self, session: &Session, effects: &[TurnEffect]) {
        for effect in effects {
            match effect {
                TurnEffect::RecordScore { score, level } => {
                    let Some(user_id) = session.user_id() else {
                        tracing::debug!(
                            session_id = %session.session_id,
                            "No user id, best score not recorded"
                        );
                        continue;
                    };
                    match record_best_score(&self.store, user_id, *score) {
                        Ok(true) => tracing::info!(
                            session_id = %session.session_id,
                            score,
                            level = ?level,
                            "New best score"
                        ),
                        Ok(false) => {}
                        Err(err) => tracing::warn!(
                            session_id = %session.session_id,
                            score,
                            error = %err,
                            "Failed to record best score"
                        ),
                    }
                }
            }
        }
    }
}
