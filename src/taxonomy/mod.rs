pub mod command;
pub mod fatal;

pub use command::CommandError;
pub use fatal::SessionFatalError;

use crate::error::Error;

/// Lower-level error preserved as the cause of a protocol failure.
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Stable tag separating the two failure kinds across logs and process boundaries.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The peer rejected one command; the connection is still usable.
    Command,
    /// The peer broke the response grammar; the connection must be discarded.
    SessionFatal,
}

impl ErrorKind {
    pub fn requires_reconnect(self) -> bool {
        matches!(self, Self::SessionFatal)
    }
}

/// Message and optional cause shared by every POP3 protocol failure.
///
/// Immutable after construction. The cause is owned exclusively and only
/// exposed by shared reference.
#[derive(thiserror::Error, Debug)]
#[error("{message}")]
pub struct ProtocolFailure {
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl ProtocolFailure {
    pub const DEFAULT_MESSAGE: &'static str = "POP3 protocol operation failed";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: non_empty_message(message),
            cause: None,
        }
    }

    pub fn with_cause(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self {
            message: non_empty_message(message),
            cause: Some(cause.into()),
        }
    }

    /// Builds a failure from a cause that may be missing at an untyped boundary.
    ///
    /// A missing cause is rejected with [`Error::InvalidArgument`] instead of
    /// falling back to [`ProtocolFailure::new`].
    pub fn try_with_cause(message: impl Into<String>, cause: Option<Cause>) -> Result<Self, Error> {
        let cause = cause.ok_or(Error::InvalidArgument { name: "cause" })?;
        Ok(Self {
            message: non_empty_message(message),
            cause: Some(cause),
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Messages of the cause chain, outermost first. The failure's own message is not included.
    pub fn cause_chain(&self) -> Vec<String> {
        let mut chain = Vec::new();
        let mut next: Option<&(dyn std::error::Error + 'static)> = self
            .cause
            .as_deref()
            .map(|c| c as &(dyn std::error::Error + 'static));
        while let Some(err) = next {
            chain.push(err.to_string());
            next = err.source();
        }
        chain
    }
}

/// An empty message falls back to [`ProtocolFailure::DEFAULT_MESSAGE`].
fn non_empty_message(message: impl Into<String>) -> String {
    let message = message.into();
    if message.is_empty() {
        ProtocolFailure::DEFAULT_MESSAGE.to_string()
    } else {
        message
    }
}

impl Default for ProtocolFailure {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MESSAGE)
    }
}

/// Any failure raised by the POP3 protocol engine.
///
/// Exactly two cases. Callers match on it (or on [`Pop3Error::kind`]) only to
/// choose between retrying the command and reconnecting; the text shown to
/// users is always [`Pop3Error::message`] plus the status text when present.
#[derive(thiserror::Error, Debug)]
pub enum Pop3Error {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    SessionFatal(#[from] SessionFatalError),
}

impl Pop3Error {
    pub fn command(message: impl Into<String>, status_text: impl Into<String>) -> Self {
        Self::Command(CommandError::with_status_text(message, status_text))
    }

    pub fn session_fatal(message: impl Into<String>) -> Self {
        Self::SessionFatal(SessionFatalError::new(message))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Command(_) => ErrorKind::Command,
            Self::SessionFatal(_) => ErrorKind::SessionFatal,
        }
    }

    pub fn failure(&self) -> &ProtocolFailure {
        match self {
            Self::Command(e) => e.failure(),
            Self::SessionFatal(e) => e.failure(),
        }
    }

    pub fn message(&self) -> &str {
        self.failure().message()
    }

    /// Peer diagnostic text. `None` only for session-fatal errors, which carry none.
    pub fn status_text(&self) -> Option<&str> {
        match self {
            Self::Command(e) => Some(e.status_text()),
            Self::SessionFatal(_) => None,
        }
    }

    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.failure().cause()
    }

    pub fn requires_reconnect(&self) -> bool {
        self.kind().requires_reconnect()
    }
}
