use crate::error::Error;
use crate::taxonomy::{CommandError, ErrorKind, Pop3Error, SessionFatalError};
use crate::types::ErrorRecord;

/// Text-only stand-in for a cause that was flattened into an [`ErrorRecord`].
///
/// Only messages survive the boundary. The chain order is kept, so walking
/// `source()` on a decoded error yields the original messages outermost first.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RemoteCause {
    message: String,
    #[source]
    source: Option<Box<RemoteCause>>,
}

impl RemoteCause {
    pub fn from_chain(chain: &[String]) -> Option<Self> {
        chain.iter().rev().fold(None, |inner, message| {
            Some(Self {
                message: message.clone(),
                source: inner.map(Box::new),
            })
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&Pop3Error> for ErrorRecord {
    fn from(error: &Pop3Error) -> Self {
        Self {
            kind: error.kind(),
            message: error.message().to_string(),
            status_text: error.status_text().map(str::to_string),
            cause_chain: error.failure().cause_chain(),
        }
    }
}

impl TryFrom<ErrorRecord> for Pop3Error {
    type Error = Error;

    fn try_from(record: ErrorRecord) -> Result<Self, Self::Error> {
        if record.message.is_empty() {
            return Err(Error::Decode {
                reason: "error record has an empty message".into(),
            });
        }
        let cause = RemoteCause::from_chain(&record.cause_chain);

        match record.kind {
            ErrorKind::Command => {
                let status_text = record.status_text.unwrap_or_default();
                let error = match cause {
                    Some(cause) => {
                        CommandError::with_status_text_and_cause(record.message, status_text, cause)
                    }
                    None => CommandError::with_status_text(record.message, status_text),
                };
                Ok(error.into())
            }
            ErrorKind::SessionFatal => {
                if record.status_text.is_some() {
                    return Err(Error::Decode {
                        reason: "session_fatal record must not carry status_text".into(),
                    });
                }
                let error = match cause {
                    Some(cause) => SessionFatalError::with_cause(record.message, cause),
                    None => SessionFatalError::new(record.message),
                };
                Ok(error.into())
            }
        }
    }
}

pub fn encode_json(error: &Pop3Error) -> Result<String, Error> {
    Ok(serde_json::to_string(&ErrorRecord::from(error))?)
}

pub fn decode_json(json: &str) -> Result<Pop3Error, Error> {
    let record: ErrorRecord = serde_json::from_str(json)?;
    Pop3Error::try_from(record)
}
