use crate::error::Error;
use crate::taxonomy::{Cause, ErrorKind, ProtocolFailure};

/// The server's response broke the POP3 grammar or an expected invariant.
///
/// The transport can no longer be trusted. After observing this error the
/// caller must drop the connection and perform a full reconnect and
/// re-authentication before issuing any further command. Carries no status
/// text: there was no well-formed rejection to take it from.
#[derive(thiserror::Error, Debug, Default)]
#[error(transparent)]
pub struct SessionFatalError {
    failure: ProtocolFailure,
}

impl SessionFatalError {
    pub const KIND: ErrorKind = ErrorKind::SessionFatal;

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            failure: ProtocolFailure::new(message),
        }
    }

    pub fn with_cause(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self {
            failure: ProtocolFailure::with_cause(message, cause),
        }
    }

    pub fn try_with_cause(message: impl Into<String>, cause: Option<Cause>) -> Result<Self, Error> {
        Ok(Self {
            failure: ProtocolFailure::try_with_cause(message, cause)?,
        })
    }

    pub fn message(&self) -> &str {
        self.failure.message()
    }

    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.failure.cause()
    }

    pub fn failure(&self) -> &ProtocolFailure {
        &self.failure
    }
}
