//! Typed event parsing from JSON.

use crate::EventJson;
use semseal_journal::{event_type, SealEvent, EVIDENCE_SEALED};
use thiserror::Error;

/// Error that can occur when parsing an event.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A known event type failed to deserialize.
    #[error("deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Typed representation of an event.
#[derive(Debug, Clone)]
pub enum TypedEvent {
    /// Evidence was sealed.
    Sealed(SealEvent),
    /// Any other event type written by collaborators.
    Unknown(EventJson),
}

/// Parses a JSON event into a typed event.
///
/// Events with an unrecognized `event_type` are returned as
/// [`TypedEvent::Unknown`]; a recognized type with the wrong shape is an
/// error.
pub fn parse_event(json: &EventJson) -> Result<TypedEvent, ParseError> {
    match event_type(json) {
        Some(EVIDENCE_SEALED) => Ok(TypedEvent::Sealed(serde_json::from_value(json.clone())?)),
        _ => Ok(TypedEvent::Unknown(json.clone())),
    }
}
