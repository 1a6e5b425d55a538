//! End-to-end conversations through the skill's JSON interface.

use mental_math::envelope::ResponseEnvelope;
use mental_math::{BestScoreStore, InMemoryStore, JsonFileStore, Skill, SkillConfig, SkillError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Map, Value};

fn skill<S: BestScoreStore>(store: S) -> Skill<S, StdRng> {
    Skill::with_rng(SkillConfig::default(), store, StdRng::seed_from_u64(77))
}

fn intent(name: &str, slots: Value, attributes: &Value, dialog_state: Option<&str>) -> String {
    let mut request = json!({
        "type": "IntentRequest",
        "requestId": "amzn1.echo-api.request.test",
        "timestamp": "2024-05-01T12:00:00Z",
        "locale": "en-US",
        "intent": { "name": name, "confirmationStatus": "NONE", "slots": slots }
    });
    if let Some(state) = dialog_state {
        request["dialogState"] = json!(state);
    }
    json!({
        "version": "1.0",
        "session": {
            "new": false,
            "sessionId": "amzn1.echo-api.session.test",
            "application": { "applicationId": "amzn1.ask.skill.math" },
            "attributes": attributes,
            "user": { "userId": "amzn1.ask.account.player" }
        },
        "request": request
    })
    .to_string()
}

fn slot(name: &str, value: &str) -> Value {
    let mut slots = Map::new();
    slots.insert(name.to_string(), json!({ "name": name, "value": value }));
    Value::Object(slots)
}

fn attributes_of(response: &ResponseEnvelope) -> Value {
    serde_json::to_value(&response.session_attributes).unwrap()
}

fn respond<S: BestScoreStore>(skill: &mut Skill<S, StdRng>, raw: &str) -> ResponseEnvelope {
    skill
        .handle_json(raw)
        .expect("request should succeed")
        .expect("a response body")
}

#[test]
fn new_game_at_level_one() {
    let mut skill = skill(InMemoryStore::new());
    let response = respond(&mut skill, &intent("play", slot("level", "1"), &json!({}), None));

    let attrs = attributes_of(&response);
    assert_eq!(attrs["score"], json!(0));
    assert_eq!(attrs["level"], json!("1"));
    assert!(attrs["expected_answer"].is_i64());
    assert_eq!(response.speech(), attrs["problem"].as_str());
    assert!(!response.response.should_end_session);
}

#[test]
fn correct_answer_scores_ten_at_level_one() {
    let mut skill = skill(InMemoryStore::new());
    let before = json!({ "score": 0, "level": "1", "expected_answer": 42 });
    let response = respond(
        &mut skill,
        &intent("provide_answer", slot("answer", "42"), &before, None),
    );

    let attrs = attributes_of(&response);
    assert_eq!(attrs["score"], json!(10));
    assert_eq!(attrs["level"], json!("1"));
    assert!(attrs["problem"].is_string());
    assert!(attrs["expected_answer"].is_i64());
    assert!(response.speech().unwrap().ends_with(attrs["problem"].as_str().unwrap()));
}

#[test]
fn answer_with_full_problem_text_is_scored_the_same() {
    let mut skill = skill(InMemoryStore::new());
    let before = json!({
        "score": 0,
        "level": "1",
        "problem": "what is 24 divided by 4, plus 1, times 6, minus 0?",
        "expected_answer": 42
    });
    let response = respond(
        &mut skill,
        &intent("provide_answer", slot("answer", "42"), &before, None),
    );

    assert_eq!(attributes_of(&response)["score"], json!(10));
}

#[test]
fn wrong_answer_reports_answer_and_score() {
    let store = InMemoryStore::new();
    let mut skill = skill(&store);
    let before = json!({ "score": 10, "level": "1", "expected_answer": 42 });
    let response = respond(
        &mut skill,
        &intent("provide_answer", slot("answer", "5"), &before, None),
    );

    assert_eq!(attributes_of(&response), json!({ "score": 0, "level": "1" }));
    let speech = response.speech().unwrap();
    assert!(speech.contains("42"));
    assert!(speech.contains("10"));
    assert_eq!(
        store.get_best_score("amzn1.ask.account.player").unwrap(),
        Some(10)
    );
}

#[test]
fn missing_level_delegates_while_dialog_starts() {
    let mut skill = skill(InMemoryStore::new());
    let slots = json!({ "level": { "name": "level" } });
    let response = respond(&mut skill, &intent("play", slots, &json!({}), Some("STARTED")));

    let body = serde_json::to_value(&response.response).unwrap();
    assert_eq!(body["directives"], json!([{ "type": "Dialog.Delegate" }]));
    assert_eq!(body["shouldEndSession"], json!(false));
    assert!(response.speech().is_none());
}

#[test]
fn help_leaves_attributes_untouched() {
    let mut skill = skill(InMemoryStore::new());
    let before = json!({
        "score": 100,
        "level": "2",
        "problem": "what is 10 divided by 5, plus 1, times 2, minus 1?",
        "expected_answer": 5
    });
    let response = respond(&mut skill, &intent("AMAZON.HelpIntent", json!({}), &before, None));

    assert_eq!(attributes_of(&response), before);
    assert!(response.speech().unwrap().starts_with("Welcome to Mental Math"));
}

#[test]
fn stop_ends_the_session() {
    let mut skill = skill(InMemoryStore::new());
    let response = respond(&mut skill, &intent("AMAZON.StopIntent", json!({}), &json!({}), None));

    assert!(response.response.should_end_session);
    assert!(response.response.reprompt.is_none());
}

#[test]
fn unrecognized_intent_produces_no_response() {
    let mut skill = skill(InMemoryStore::new());
    let result = skill.handle_json(&intent("AMAZON.YesIntent", json!({}), &json!({}), None));

    assert!(matches!(result, Err(SkillError::InvalidIntent { .. })));
}

#[test]
fn best_score_survives_across_sessions_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best.json");
    let before = json!({
        "score": 1000,
        "level": "3",
        "problem": "what is 9 divided by 3, plus 2, times 2, minus 1?",
        "expected_answer": 9
    });

    {
        let mut first = skill(JsonFileStore::new(&path));
        respond(
            &mut first,
            &intent("provide_answer", slot("answer", "8"), &before, None),
        );
    }

    let mut second = skill(JsonFileStore::new(&path));
    let response = respond(&mut second, &intent("score", json!({}), &json!({}), None));
    assert_eq!(response.speech(), Some("Your best score is 1000 points"));
}

#[test]
fn full_game_through_json() {
    let mut skill = skill(InMemoryStore::new());
    let mut attrs = attributes_of(&respond(
        &mut skill,
        &intent("play", slot("level", "2"), &json!({}), None),
    ));

    for round in 1..=3u64 {
        let answer = attrs["expected_answer"].as_i64().unwrap().to_string();
        let response = respond(
            &mut skill,
            &intent("provide_answer", slot("answer", &answer), &attrs, None),
        );
        attrs = attributes_of(&response);
        assert_eq!(attrs["score"], json!(round * 100));
    }

    let response = respond(
        &mut skill,
        &intent("provide_answer", slot("answer", "not a number"), &attrs, None),
    );
    assert!(response.speech().unwrap().contains("You scored: 300 points"));
    assert_eq!(attributes_of(&response), json!({ "score": 0, "level": "2" }));
}
