#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod error;
pub mod record;
pub mod session;
pub mod taxonomy;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::Error;
pub use record::{RemoteCause, decode_json, encode_json};
pub use session::classify::{GrammarViolation, StatusLine, classify_status_line};
pub use session::mapping::{error_kind_to_transition, recovery_for, transition_target};
pub use session::{
    CommandDecision, ConnectionState, RecoveryAction, SessionEngine, SessionTransition,
};
pub use taxonomy::{Cause, CommandError, ErrorKind, Pop3Error, ProtocolFailure, SessionFatalError};
pub use types::ErrorRecord;
