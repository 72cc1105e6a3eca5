use serde_json::Value;

use crate::errors::DialogError;
use crate::intents::{dispatch, dispatch_with_context, DialogContext};
use crate::lex::{DialogResponse, IntentRequest};

/// Entry point invoked by the hosting runtime.
pub fn handle(event: IntentRequest) -> Result<DialogResponse, DialogError> {
    dispatch(event)
}

/// Parses a raw event at the boundary so malformed payloads are rejected
/// before any slot is read.
pub fn handle_json(event: Value) -> Result<DialogResponse, DialogError> {
    handle_json_with_context(event, &DialogContext::default())
}

pub fn handle_json_with_context(
    event: Value,
    ctx: &DialogContext,
) -> Result<DialogResponse, DialogError> {
    let request = parse_event(event)?;
    dispatch_with_context(request, ctx)
}

pub fn parse_event(event: Value) -> Result<IntentRequest, DialogError> {
    Ok(serde_json::from_value(event)?)
}
