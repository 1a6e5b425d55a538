//! Pure turn dispatcher.

use super::event::TurnEvent;
use super::handlers;
use crate::core::{SessionAttributes, TurnResult};
use rand::Rng;

/// Compute the result of one turn.
///
/// Given the same attributes, event and random sequence this always
/// produces the same result. It performs no I/O: best scores arrive inside
/// the event and score persistence leaves as a [`crate::core::TurnEffect`].
///
/// # Example
///
/// ```rust
/// use mental_math::core::{Level, SessionAttributes};
/// use mental_math::game::{transition, LevelSlot, TurnEvent};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let event = TurnEvent::Play {
///     level: LevelSlot::Valid(Level::One),
///     dialog_state: None,
/// };
/// let result = transition(&SessionAttributes::default(), event, &mut rng);
/// assert_eq!(result.attributes.score, 0);
/// assert!(result.attributes.problem.is_some());
/// ```
pub fn transition<R: Rng + ?Sized>(
    attributes: &SessionAttributes,
    event: TurnEvent,
    rng: &mut R,
) -> TurnResult {
    match event {
        TurnEvent::Launch | TurnEvent::Help => handlers::welcome(attributes),
        TurnEvent::Play {
            level,
            dialog_state,
        } => handlers::new_game(attributes, &level, dialog_state, rng),
        TurnEvent::Answer {
            answer,
            dialog_state,
        } => handlers::check_answer(attributes, answer.as_deref(), dialog_state, rng),
        TurnEvent::BestScore { best } => handlers::best_score(attributes, best),
        TurnEvent::Stop => handlers::end_session(attributes),
        TurnEvent::Fallback => handlers::fallback(attributes),
    }
}
