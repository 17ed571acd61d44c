pub mod classify;
pub mod mapping;

use crate::taxonomy::{ErrorKind, Pop3Error};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum ConnectionState {
    Connected,
    Disconnected,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum RecoveryAction {
    RetryCommand,
    Reconnect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTransition {
    Failure { kind: ErrorKind },
    Reconnect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandDecision {
    Issue,
    RejectDisconnected,
}

/// Connection-validity rules implied by the error taxonomy.
///
/// The session manager owns the actual state; these functions only say what
/// the next state must be.
pub struct SessionEngine;

impl SessionEngine {
    pub fn apply(current: ConnectionState, transition: SessionTransition) -> ConnectionState {
        match (current, transition) {
            (_, SessionTransition::Reconnect) => ConnectionState::Connected,
            (ConnectionState::Disconnected, SessionTransition::Failure { .. }) => {
                ConnectionState::Disconnected
            }
            (ConnectionState::Connected, SessionTransition::Failure { kind }) => {
                if kind.requires_reconnect() {
                    ConnectionState::Disconnected
                } else {
                    ConnectionState::Connected
                }
            }
        }
    }

    /// Applies a raised error to `current` and logs the outcome.
    pub fn observe(current: ConnectionState, error: &Pop3Error) -> ConnectionState {
        let kind = error.kind();
        let next = Self::apply(current, mapping::error_kind_to_transition(kind));
        let summary = outcome_summary(kind, next);
        match error {
            Pop3Error::Command(e) => tracing::debug!(
                kind = kind.as_ref(),
                error = e.message(),
                status_text = e.status_text(),
                previous = current.as_ref(),
                state = next.as_ref(),
                "{summary}"
            ),
            Pop3Error::SessionFatal(e) => tracing::warn!(
                kind = kind.as_ref(),
                error = e.message(),
                previous = current.as_ref(),
                state = next.as_ref(),
                "{summary}"
            ),
        }
        next
    }

    pub fn decide_command(current: ConnectionState) -> CommandDecision {
        match current {
            ConnectionState::Connected => CommandDecision::Issue,
            ConnectionState::Disconnected => CommandDecision::RejectDisconnected,
        }
    }
}

/// Log line for an observed failure, chosen from the state it leaves behind.
fn outcome_summary(kind: ErrorKind, next: ConnectionState) -> &'static str {
    match (kind, next) {
        (ErrorKind::Command, ConnectionState::Connected) => {
            "pop3 command rejected, connection retained"
        }
        (ErrorKind::Command, ConnectionState::Disconnected) => {
            "pop3 command rejected on a disconnected session, reconnect required"
        }
        (ErrorKind::SessionFatal, _) => {
            "pop3 session-fatal error, connection must be re-established"
        }
    }
}
