use crate::session::{ConnectionState, RecoveryAction, SessionTransition};
use crate::taxonomy::ErrorKind;

/// Canonical mapping from [`ErrorKind`] to the [`SessionTransition`] it triggers.
pub fn error_kind_to_transition(kind: ErrorKind) -> SessionTransition {
    SessionTransition::Failure { kind }
}

/// What the caller's retry policy should do after an error of `kind`.
pub fn recovery_for(kind: ErrorKind) -> RecoveryAction {
    match kind {
        ErrorKind::Command => RecoveryAction::RetryCommand,
        ErrorKind::SessionFatal => RecoveryAction::Reconnect,
    }
}

/// Human-readable display string for a transition.
pub fn transition_to_display(transition: &SessionTransition) -> String {
    match transition {
        SessionTransition::Failure { kind } => match kind {
            ErrorKind::Command => "Failure(Command)".to_string(),
            ErrorKind::SessionFatal => "Failure(SessionFatal)".to_string(),
        },
        SessionTransition::Reconnect => "Reconnect".to_string(),
    }
}

/// Returns the state a transition forces regardless of the current state, or `None`
/// when the outcome depends on it.
pub fn transition_target(transition: &SessionTransition) -> Option<ConnectionState> {
    match transition {
        SessionTransition::Reconnect => Some(ConnectionState::Connected),
        SessionTransition::Failure {
            kind: ErrorKind::SessionFatal,
        } => Some(ConnectionState::Disconnected),
        SessionTransition::Failure {
            kind: ErrorKind::Command,
        } => None,
    }
}
