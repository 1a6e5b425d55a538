//! Outbound response envelope.

use super::attributes::WireAttributes;
use crate::core::{Reply, TurnResponse, TurnResult};
use serde::{Deserialize, Serialize};

pub const RESPONSE_VERSION: &str = "1.0";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub session_attributes: WireAttributes,
    pub response: ResponseBody,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    pub should_end_session: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    PlainText { text: String },
}

impl OutputSpeech {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::PlainText { text } => text,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Card {
    Simple { title: String, content: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Directive {
    #[serde(rename = "Dialog.Delegate")]
    DialogDelegate,
}

impl ResponseBody {
    pub fn speechlet(reply: &Reply) -> Self {
        Self {
            output_speech: Some(OutputSpeech::plain(&reply.speech)),
            card: Some(Card::Simple {
                title: reply.title.clone(),
                content: reply.speech.clone(),
            }),
            reprompt: reply.reprompt.as_ref().map(|text| Reprompt {
                output_speech: OutputSpeech::plain(text),
            }),
            directives: vec![],
            should_end_session: reply.end_session,
        }
    }

    pub fn delegate() -> Self {
        Self {
            directives: vec![Directive::DialogDelegate],
            should_end_session: false,
            ..Self::default()
        }
    }
}

impl From<&TurnResult> for ResponseEnvelope {
    fn from(result: &TurnResult) -> Self {
        let response = match &result.response {
            TurnResponse::Speak(reply) => ResponseBody::speechlet(reply),
            TurnResponse::Delegate => ResponseBody::delegate(),
        };
        Self {
            version: RESPONSE_VERSION.to_string(),
            session_attributes: WireAttributes::from(&result.attributes),
            response,
        }
    }
}

impl ResponseEnvelope {
    pub fn speech(&self) -> Option<&str> {
        self.response.output_speech.as_ref().map(OutputSpeech::text)
    }
}
