use std::fmt;

use crate::error::Error;
use crate::taxonomy::{Cause, ErrorKind, ProtocolFailure};

/// A POP3 command the server rejected with a well-formed negative response.
///
/// Unlike a [`SessionFatalError`](super::SessionFatalError), a `CommandError`
/// does not require the connection to be re-established: the same or another
/// command may be issued on it.
///
/// [`CommandError::status_text`] is always defined. It is empty when the server
/// supplied no diagnostic text.
#[derive(Debug)]
pub struct CommandError {
    failure: ProtocolFailure,
    status_text: String,
}

impl CommandError {
    pub const KIND: ErrorKind = ErrorKind::Command;
    pub const DEFAULT_MESSAGE: &'static str = "POP3 command failed";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            failure: ProtocolFailure::new(message),
            status_text: String::new(),
        }
    }

    pub fn with_cause(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self {
            failure: ProtocolFailure::with_cause(message, cause),
            status_text: String::new(),
        }
    }

    pub fn with_status_text(message: impl Into<String>, status_text: impl Into<String>) -> Self {
        Self {
            failure: ProtocolFailure::new(message),
            status_text: status_text.into(),
        }
    }

    pub fn with_status_text_and_cause(
        message: impl Into<String>,
        status_text: impl Into<String>,
        cause: impl Into<Cause>,
    ) -> Self {
        Self {
            failure: ProtocolFailure::with_cause(message, cause),
            status_text: status_text.into(),
        }
    }

    /// Status text may be missing when it comes from an untyped source (a decoded
    /// field map, a JS caller). Missing is a caller bug and is rejected; use
    /// [`CommandError::new`] when the server sent no text.
    pub fn try_with_status_text(
        message: impl Into<String>,
        status_text: Option<String>,
    ) -> Result<Self, Error> {
        let status_text = status_text.ok_or(Error::InvalidArgument {
            name: "status_text",
        })?;
        Ok(Self::with_status_text(message, status_text))
    }

    pub fn try_with_status_text_and_cause(
        message: impl Into<String>,
        status_text: Option<String>,
        cause: impl Into<Cause>,
    ) -> Result<Self, Error> {
        let status_text = status_text.ok_or(Error::InvalidArgument {
            name: "status_text",
        })?;
        Ok(Self::with_status_text_and_cause(message, status_text, cause))
    }

    pub fn message(&self) -> &str {
        self.failure.message()
    }

    /// The server's diagnostic text, verbatim.
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.failure.cause()
    }

    pub fn failure(&self) -> &ProtocolFailure {
        &self.failure
    }
}

impl Default for CommandError {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MESSAGE)
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.failure, f)
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.failure)
    }
}
