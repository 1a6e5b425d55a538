//! Fixed response text pools.

use rand::seq::SliceRandom;
use std::borrow::Cow;
use rand::Rng;

pub const CONGRATS: &[&str] = &[
    "Excellent!",
    "Great!",
    "Perfect answer.",
    "Very good.",
    "Nice",
    "Yeah, you cheated, but I'll accept that",
    "That's what she said.",
    "Hey! Don't use your cellphone, that's cheating!",
];

pub const NEW_PROBLEM_INTRO: &[&str] = &[
    "Ok, now, try this",
    "New problem",
    "Moving on",
    "Now, can you tell me the result of",
    "Since you are so good, what is the answer to",
];

pub const WRONG_INTRO: &[&str] = &[
    "No, sorry",
    "Not quite",
    "Almost",
    "Not even close",
    "So close, but",
    "Sorry",
    "Nope",
    "That was a terrible answer",
    "hmm, try harder next time, okay?",
];

pub const ANSWER_INTRO: &[&str] = &[
    "I was expecting",
    "the answer was",
    "the response was",
    "correct response was",
];

/// Pick one phrase uniformly from a pool.
pub fn pick<R: Rng + ?Sized>(pool: &'static [&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Close a phrase with a period unless it already ends a sentence.
pub fn as_sentence(phrase: &str) -> Cow<'_, str> {
    if phrase.ends_with(['.', '!', '?']) {
        Cow::Borrowed(phrase)
    } else {
        Cow::Owned(format!("{phrase}."))
    }
}
