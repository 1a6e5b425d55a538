//! Voice platform request/response envelopes.
//!
//! These types mirror the platform's JSON schema. Nothing outside this
//! module sees untyped maps: attributes are validated into
//! [`crate::core::SessionAttributes`] on the way in and written back as
//! [`WireAttributes`] on the way out.

mod attributes;
mod request;
mod response;

pub use attributes::{validate_attributes, AttributeViolation, WireAttributes};
pub use request::{Application, Intent, Request, RequestEnvelope, Session, Slot, User};
pub use response::{
    Card, Directive, OutputSpeech, Reprompt, ResponseBody, ResponseEnvelope, RESPONSE_VERSION,
};
