//! Boundary conversion of the session attributes bag.
//!
//! Inbound, the bag is an untyped JSON object. Validation uses
//! `stillwater::Validation` so that every problem with a bag is reported at
//! once rather than only the first.

use crate::core::{Level, Problem, SessionAttributes};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Something wrong with an inbound attributes bag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AttributeViolation {
    #[error("attribute '{field}' should be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("score must not be negative (got {0})")]
    NegativeScore(i64),

    #[error("unknown level '{0}'")]
    UnknownLevel(String),

    #[error("problem is set without an expected answer")]
    ProblemWithoutAnswer,

    #[error("an expected answer is set but no level is set")]
    ProblemWithoutLevel,
}

type Check = Validation<(), NonEmptyVec<AttributeViolation>>;

/// Outbound representation of [`SessionAttributes`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireAttributes {
    pub score: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_answer: Option<i64>,
}

impl From<&SessionAttributes> for WireAttributes {
    fn from(attributes: &SessionAttributes) -> Self {
        Self {
            score: attributes.score,
            level: attributes.level,
            problem: attributes
                .problem
                .as_ref()
                .filter(|p| p.has_text())
                .map(|p| p.text.clone()),
            expected_answer: attributes.expected_answer(),
        }
    }
}

/// Validate an inbound bag into typed attributes.
///
/// A missing bag is a fresh session. `null` and absent fields are treated
/// alike, and an empty problem string counts as no problem text.
///
/// `expected_answer` decides whether a problem is active. A bag with an
/// answer but no problem text still has an active problem; a problem text
/// without an answer is rejected.
///
/// # Errors
///
/// Returns every [`AttributeViolation`] found in the bag.
pub fn validate_attributes(
    bag: Option<&Map<String, Value>>,
) -> Result<SessionAttributes, Vec<AttributeViolation>> {
    let Some(bag) = bag else {
        return Ok(SessionAttributes::default());
    };

    let score = read_score(bag.get("score"));
    let level = read_level(bag.get("level"));
    let problem = read_problem(bag.get("problem"));
    let expected_answer = read_expected_answer(bag.get("expected_answer"));

    let mut checks = vec![check(&score), check(&level), check(&problem), check(&expected_answer)];

    if let (Ok(Some(_)), Ok(None)) = (&problem, &expected_answer) {
        checks.push(Validation::fail(AttributeViolation::ProblemWithoutAnswer));
    }
    if let (Ok(Some(_)), Ok(None)) = (&expected_answer, &level) {
        checks.push(Validation::fail(AttributeViolation::ProblemWithoutLevel));
    }

    match Validation::all_vec(checks) {
        Validation::Success(_) => {
            let text = problem.unwrap_or_default().unwrap_or_default();
            let problem = expected_answer
                .unwrap_or_default()
                .map(|expected_answer| Problem {
                    text,
                    expected_answer,
                });
            Ok(SessionAttributes {
                score: score.unwrap_or_default(),
                level: level.unwrap_or_default(),
                problem,
            })
        }
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}

fn check<T>(result: &Result<T, AttributeViolation>) -> Check {
    match result {
        Ok(_) => Validation::success(()),
        Err(violation) => Validation::fail(violation.clone()),
    }
}

fn read_score(value: Option<&Value>) -> Result<u64, AttributeViolation> {
    match value {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => match (n.as_u64(), n.as_i64()) {
            (Some(score), _) => Ok(score),
            (None, Some(negative)) => Err(AttributeViolation::NegativeScore(negative)),
            (None, None) => Err(wrong_type("score", "a non-negative integer")),
        },
        Some(_) => Err(wrong_type("score", "a non-negative integer")),
    }
}

fn read_level(value: Option<&Value>) -> Result<Option<Level>, AttributeViolation> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) => raw
            .parse()
            .map(Some)
            .map_err(|_| AttributeViolation::UnknownLevel(raw.clone())),
        Some(_) => Err(wrong_type("level", "a string")),
    }
}

fn read_problem(value: Option<&Value>) -> Result<Option<String>, AttributeViolation> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(wrong_type("problem", "a string")),
    }
}

fn read_expected_answer(value: Option<&Value>) -> Result<Option<i64>, AttributeViolation> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| wrong_type("expected_answer", "an integer")),
        Some(_) => Err(wrong_type("expected_answer", "an integer")),
    }
}

fn wrong_type(field: &'static str, expected: &'static str) -> AttributeViolation {
    AttributeViolation::WrongType { field, expected }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn missing_bag_is_fresh_session() {
        assert_eq!(validate_attributes(None), Ok(SessionAttributes::default()));
    }

    #[test]
    fn empty_bag_is_fresh_session() {
        let empty = Map::new();
        assert_eq!(
            validate_attributes(Some(&empty)),
            Ok(SessionAttributes::default())
        );
    }

    #[test]
    fn full_bag_becomes_typed_attributes() {
        let raw = bag(json!({
            "score": 110,
            "level": "2",
            "problem": "what is 4 divided by 2, plus 1, times 3, minus 2?",
            "expected_answer": 7
        }));

        let attrs = validate_attributes(Some(&raw)).unwrap();
        assert_eq!(attrs.score, 110);
        assert_eq!(attrs.level, Some(Level::Two));
        assert_eq!(attrs.expected_answer(), Some(7));
    }

    #[test]
    fn nulls_clear_the_problem() {
        let raw = bag(json!({
            "score": 0,
            "level": "1",
            "problem": null,
            "expected_answer": null
        }));

        let attrs = validate_attributes(Some(&raw)).unwrap();
        assert!(attrs.problem.is_none());
        assert_eq!(attrs.level, Some(Level::One));
    }

    #[test]
    fn answer_without_text_is_an_active_problem() {
        let raw = bag(json!({ "score": 0, "level": "1", "expected_answer": 42 }));

        let attrs = validate_attributes(Some(&raw)).unwrap();
        assert_eq!(attrs.level, Some(Level::One));
        assert_eq!(attrs.problem, Some(Problem::answer_only(42)));
        assert_eq!(attrs.expected_answer(), Some(42));
    }

    #[test]
    fn answer_only_problem_keeps_its_wire_shape() {
        let raw = bag(json!({ "score": 10, "level": "1", "expected_answer": 42 }));

        let attrs = validate_attributes(Some(&raw)).unwrap();
        let json = serde_json::to_value(WireAttributes::from(&attrs)).unwrap();
        assert_eq!(Value::Object(raw), json);
    }

    #[test]
    fn orphaned_problem_is_rejected() {
        let raw = bag(json!({ "level": "1", "problem": "what is 1?" }));

        let errors = validate_attributes(Some(&raw)).unwrap_err();
        assert_eq!(errors, vec![AttributeViolation::ProblemWithoutAnswer]);
    }

    #[test]
    fn all_violations_are_reported_together() {
        let raw = bag(json!({
            "score": -5,
            "level": "9",
            "problem": 17,
            "expected_answer": "42"
        }));

        let errors = validate_attributes(Some(&raw)).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&AttributeViolation::NegativeScore(-5)));
        assert!(errors.contains(&AttributeViolation::UnknownLevel("9".to_string())));
        assert!(errors
            .iter()
            .any(|e| matches!(e, AttributeViolation::WrongType { field: "problem", .. })));
        assert!(errors.iter().any(
            |e| matches!(e, AttributeViolation::WrongType { field: "expected_answer", .. })
        ));
    }

    #[test]
    fn active_problem_needs_level() {
        let raw = bag(json!({ "problem": "what is 1?", "expected_answer": 1 }));
        let errors = validate_attributes(Some(&raw)).unwrap_err();
        assert_eq!(errors, vec![AttributeViolation::ProblemWithoutLevel]);

        let raw = bag(json!({ "expected_answer": 1 }));
        let errors = validate_attributes(Some(&raw)).unwrap_err();
        assert_eq!(errors, vec![AttributeViolation::ProblemWithoutLevel]);
    }

    #[test]
    fn wire_form_omits_absent_fields() {
        let attrs = SessionAttributes {
            score: 0,
            level: Some(Level::One),
            problem: None,
        };

        let json = serde_json::to_value(WireAttributes::from(&attrs)).unwrap();
        assert_eq!(json, json!({ "score": 0, "level": "1" }));
    }

    #[test]
    fn wire_form_is_accepted_back() {
        let attrs = SessionAttributes {
            score: 30,
            level: Some(Level::Three),
            problem: Some(Problem {
                text: "what is 2 divided by 2, plus 1, times 1, minus 0?".to_string(),
                expected_answer: 2,
            }),
        };

        let json = serde_json::to_value(WireAttributes::from(&attrs)).unwrap();
        let back = validate_attributes(Some(&bag(json))).unwrap();
        assert_eq!(back, attrs);
    }
}
