use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::record;
use crate::session::classify::{self, StatusLine};
use crate::session::{ConnectionState, SessionEngine, SessionTransition, mapping};
use crate::taxonomy::{ErrorKind, Pop3Error};
use crate::types::ErrorRecord;

fn to_js(value: &serde_json::Value) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

fn parse_error_kind(s: &str) -> Option<ErrorKind> {
    s.parse::<ErrorKind>().ok()
}

fn parse_connection_state(s: &str) -> Option<ConnectionState> {
    s.parse::<ConnectionState>().ok()
}

fn parse_transition(transition_type: &str, kind: Option<String>) -> Option<SessionTransition> {
    match transition_type {
        "Reconnect" => Some(SessionTransition::Reconnect),
        "Failure" => kind
            .as_deref()
            .and_then(parse_error_kind)
            .map(mapping::error_kind_to_transition),
        _ => None,
    }
}

fn error_json(error: &Pop3Error) -> serde_json::Value {
    let record = ErrorRecord::from(error);
    serde_json::json!({
        "kind": record.kind.as_ref(),
        "message": record.message,
        "statusText": record.status_text,
        "causeChain": record.cause_chain,
        "recovery": mapping::recovery_for(record.kind).as_ref(),
    })
}

/// Classify one raw POP3 response line sent in reply to `command`.
#[wasm_bindgen]
pub fn classify_line(command: &str, line: &[u8]) -> JsValue {
    let result = match classify::classify_status_line(command, line) {
        Ok(StatusLine::Ok(text)) => serde_json::json!({"status": "ok", "text": text}),
        Ok(StatusLine::Continue(text)) => serde_json::json!({"status": "continue", "text": text}),
        Err(error) => serde_json::json!({"status": "error", "error": error_json(&error)}),
    };
    to_js(&result)
}

/// Next connection state after a transition, or the current state string when
/// the input cannot be parsed.
#[wasm_bindgen]
pub fn next_connection_state(current: &str, transition_type: &str, kind: Option<String>) -> String {
    let Some(state) = parse_connection_state(current) else {
        return current.to_string();
    };
    match parse_transition(transition_type, kind) {
        Some(transition) => SessionEngine::apply(state, transition).to_string(),
        None => state.to_string(),
    }
}

/// Whether a command may be issued in `current`.
#[wasm_bindgen]
pub fn can_issue_command(current: &str) -> bool {
    parse_connection_state(current).is_some_and(|state| {
        SessionEngine::decide_command(state) == crate::session::CommandDecision::Issue
    })
}

/// Recovery action string for an error kind, or null.
#[wasm_bindgen]
pub fn recovery_for_kind(kind: &str) -> Option<String> {
    parse_error_kind(kind).map(|k| mapping::recovery_for(k).to_string())
}

/// Decode an error record and return its normalized form.
#[wasm_bindgen]
pub fn decode_error_record(json: &str) -> JsValue {
    match record::decode_json(json) {
        Ok(error) => to_js(&error_json(&error)),
        Err(e) => error_result(&e.to_string()),
    }
}

fn error_result(msg: &str) -> JsValue {
    let obj = serde_json::json!({"error": msg});
    to_js(&obj)
}
