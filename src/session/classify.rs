use crate::taxonomy::{CommandError, Pop3Error, SessionFatalError};

/// A positive POP3 status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    /// `+OK` with the trimmed remainder of the line.
    Ok(String),
    /// `+ ` SASL continuation with the challenge text.
    Continue(String),
}

/// Why a status line could not be parsed. Used as the cause of the resulting
/// [`SessionFatalError`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarViolation {
    #[error("status line is not terminated by a line break")]
    Unterminated,

    #[error("status line contains an embedded line break")]
    EmbeddedLineBreak,

    #[error("unknown status indicator in {line:?}")]
    UnknownStatus { line: String },
}

pub const OK_TOKEN: &str = "+OK";
pub const ERR_TOKEN: &str = "-ERR";

pub fn rejection_message(command: &str) -> String {
    format!("POP3 server did not respond with a +OK response to the {command} command.")
}

/// Classifies one raw response line sent in reply to `command`.
///
/// `-ERR` yields a [`CommandError`] carrying the server's text; anything that
/// is not a recognisable status line yields a [`SessionFatalError`].
pub fn classify_status_line(command: &str, line: &[u8]) -> Result<StatusLine, Pop3Error> {
    let body = match strip_terminator(line) {
        Ok(body) => body,
        Err(violation) => {
            tracing::trace!(command, %violation, "pop3 status line rejected");
            return Err(SessionFatalError::with_cause(unexpected_message(command), violation).into());
        }
    };
    let text = String::from_utf8_lossy(body);

    if let Some(rest) = status_remainder(&text, OK_TOKEN) {
        tracing::trace!(command, "pop3 status line ok");
        return Ok(StatusLine::Ok(rest.trim().to_string()));
    }

    if let Some(rest) = status_remainder(&text, ERR_TOKEN) {
        tracing::trace!(command, status_text = rest.trim(), "pop3 status line err");
        return Err(CommandError::with_status_text(rejection_message(command), rest.trim()).into());
    }

    if let Some(rest) = text.strip_prefix('+')
        && (rest.is_empty() || rest.starts_with(' '))
    {
        tracing::trace!(command, "pop3 status line continuation");
        let challenge = rest.strip_prefix(' ').unwrap_or(rest);
        return Ok(StatusLine::Continue(challenge.to_string()));
    }

    let violation = GrammarViolation::UnknownStatus {
        line: text.into_owned(),
    };
    tracing::trace!(command, %violation, "pop3 status line rejected");
    Err(SessionFatalError::with_cause(unexpected_message(command), violation).into())
}

fn unexpected_message(command: &str) -> String {
    format!("Unexpected response from POP3 server to the {command} command.")
}

fn strip_terminator(line: &[u8]) -> Result<&[u8], GrammarViolation> {
    let body = line
        .strip_suffix(b"\n")
        .ok_or(GrammarViolation::Unterminated)?;
    let body = body.strip_suffix(b"\r").unwrap_or(body);
    if body.iter().any(|b| matches!(b, b'\r' | b'\n')) {
        return Err(GrammarViolation::EmbeddedLineBreak);
    }
    Ok(body)
}

/// Text after `token` when `token` is the whole status indicator.
fn status_remainder<'a>(text: &'a str, token: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(token)?;
    match rest.chars().next() {
        None | Some(' ' | '\t') => Some(rest),
        Some(_) => None,
    }
}
