//! Turn handlers.
//!
//! Each handler takes the current attributes by reference and returns a
//! complete [`TurnResult`]. Handlers are pure apart from the random source.

use super::event::{DialogState, LevelSlot};
use crate::core::phrases::{self, ANSWER_INTRO, CONGRATS, NEW_PROBLEM_INTRO, WRONG_INTRO};
use crate::core::{generate_problem, Reply, SessionAttributes, TurnEffect, TurnResult};
use rand::Rng;

const START_PROMPT: &str = "Start a game by saying, new game";
const NEW_GAME_PROMPT: &str = "To start a new game, say: new game";

/// Greeting used for launch and help. Attributes pass through untouched.
pub fn welcome(attributes: &SessionAttributes) -> TurnResult {
    let reply = Reply::new("Welcome", format!("Welcome to Mental Math. {START_PROMPT}"))
        .with_reprompt(START_PROMPT);
    TurnResult::speak(attributes, attributes.clone(), reply)
}

/// Start a game at the requested level.
///
/// The score always goes back to 0. Without a usable level the game is not
/// started: the platform is asked to elicit the slot when its dialog has just
/// started, otherwise the user gets a clarification prompt.
pub fn new_game<R: Rng + ?Sized>(
    attributes: &SessionAttributes,
    level: &LevelSlot,
    dialog_state: Option<DialogState>,
    rng: &mut R,
) -> TurnResult {
    let abandoned = abandoned_game(attributes);

    let (next, reply) = match level {
        LevelSlot::Valid(level) => {
            let problem = generate_problem(*level, rng);
            let reply = Reply::new("New Game", problem.text.clone())
                .with_reprompt("Say, new game at level 1");
            let next = SessionAttributes {
                score: 0,
                level: Some(*level),
                problem: Some(problem),
            };
            (next, reply)
        }
        LevelSlot::Missing if dialog_state == Some(DialogState::Started) => {
            return TurnResult::delegate(attributes.clone());
        }
        LevelSlot::Missing => {
            let reply = Reply::new(
                "New Game",
                "I'm not sure what you said. To start a new game say, new game",
            )
            .with_reprompt("Please, say, new game");
            (not_started(attributes), reply)
        }
        LevelSlot::Invalid(raw) => {
            let reply = Reply::new(
                "New Game",
                format!("There is no level {raw}. I can play at level 1, 2 or 3"),
            )
            .with_reprompt("Say, new game at level 1");
            (not_started(attributes), reply)
        }
    };

    TurnResult::speak(attributes, next, reply).with_effects(abandoned)
}

/// Score the user's answer against the active problem.
pub fn check_answer<R: Rng + ?Sized>(
    attributes: &SessionAttributes,
    answer: Option<&str>,
    dialog_state: Option<DialogState>,
    rng: &mut R,
) -> TurnResult {
    let (Some(problem), Some(level)) = (&attributes.problem, attributes.level) else {
        let reply = Reply::new(
            "Answer",
            "Hmm, I need to give you a problem first. Say, new game",
        )
        .with_reprompt("Please, say, new game");
        return TurnResult::speak(attributes, attributes.clone(), reply);
    };

    let Some(raw) = answer else {
        if dialog_state == Some(DialogState::Started) {
            return TurnResult::delegate(attributes.clone());
        }
        let reply = Reply::new(
            "Answer",
            "I'm not sure what you said. To provide an answer, say: the answer is 45",
        )
        .with_reprompt("Please, say, the answer is 23");
        return TurnResult::speak(attributes, attributes.clone(), reply);
    };

    if parse_answer(raw).is_some_and(|value| problem.is_answered_by(value)) {
        let next_problem = generate_problem(level, rng);
        let speech = format!(
            "{} {}: {}",
            phrases::as_sentence(phrases::pick(CONGRATS, rng)),
            phrases::pick(NEW_PROBLEM_INTRO, rng),
            next_problem.text
        );
        let reply = Reply::new("Answer", speech).with_reprompt(next_problem.text.clone());
        let next = SessionAttributes {
            score: attributes.score + level.points(),
            level: Some(level),
            problem: Some(next_problem),
        };
        return TurnResult::speak(attributes, next, reply);
    }

    let speech = format!(
        "{}, {} {}. You scored: {} points. {NEW_GAME_PROMPT}",
        phrases::pick(WRONG_INTRO, rng),
        phrases::pick(ANSWER_INTRO, rng),
        problem.expected_answer,
        attributes.score
    );
    let next = SessionAttributes {
        score: 0,
        level: Some(level),
        problem: None,
    };
    TurnResult::speak(
        attributes,
        next,
        Reply::new("Answer", speech).with_reprompt(NEW_GAME_PROMPT),
    )
    .with_effect(TurnEffect::RecordScore {
        score: attributes.score,
        level: Some(level),
    })
}

/// Report the user's best score, as looked up by the shell.
pub fn best_score(attributes: &SessionAttributes, best: Option<u64>) -> TurnResult {
    let speech = match best {
        Some(best) => format!("Your best score is {best} points"),
        None => "You have no finished game on record yet. Start a game by saying, new game"
            .to_string(),
    };
    let reprompt = if attributes.has_active_problem() {
        "Try to say: the answer is 12"
    } else {
        START_PROMPT
    };
    let reply = Reply::new("Best Score", speech).with_reprompt(reprompt);
    TurnResult::speak(attributes, attributes.clone(), reply)
}

/// The utterance matched no intent.
pub fn fallback(attributes: &SessionAttributes) -> TurnResult {
    let reprompt = if attributes.has_active_problem() {
        "Try to say: the answer is 12"
    } else {
        "Try to say: new game"
    };
    let reply = Reply::new("Say again?", "I did not understand what you said").with_reprompt(reprompt);
    TurnResult::speak(attributes, attributes.clone(), reply)
}

/// Say goodbye and close the session.
pub fn end_session(attributes: &SessionAttributes) -> TurnResult {
    let reply = Reply::new(
        "Session Ended",
        "Thank you for playing Mental Math. Have a nice day!",
    )
    .ending_session();
    TurnResult::speak(attributes, SessionAttributes::default(), reply)
        .with_effects(abandoned_game(attributes))
}

/// Parse a spoken answer the way the platform delivers numbers.
///
/// Surrounding whitespace and a leading sign are accepted; anything else
/// that is not an integer yields `None` and can never match.
pub fn parse_answer(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn not_started(attributes: &SessionAttributes) -> SessionAttributes {
    SessionAttributes {
        score: 0,
        level: attributes.level,
        problem: None,
    }
}

fn abandoned_game(attributes: &SessionAttributes) -> Option<TurnEffect> {
    attributes.score_in_play().map(|score| TurnEffect::RecordScore {
        score,
        level: attributes.level,
    })
}
