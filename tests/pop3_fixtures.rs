#![expect(
    clippy::unwrap_used,
    clippy::panic,
    reason = "test code uses unwrap/panic for concise assertions"
)]

use pop3_fault::{
    CommandDecision, CommandError, ConnectionState, ErrorKind, ErrorRecord, Pop3Error,
    RecoveryAction, SessionEngine, SessionFatalError, SessionTransition, StatusLine,
    classify_status_line, decode_json, encode_json, recovery_for,
};

#[derive(serde::Deserialize)]
struct StatusLineCase {
    command: String,
    line: String,
    expected: Expected,
}

#[derive(serde::Deserialize)]
struct Expected {
    status: String,
    text: Option<String>,
    kind: Option<ErrorKind>,
    status_text: Option<String>,
}

fn load_fixture<T: serde::de::DeserializeOwned>(filename: &str) -> T {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = format!("{manifest_dir}/tests/fixtures/{filename}");
    let data =
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"));
    serde_json::from_str(&data).unwrap_or_else(|e| panic!("failed to parse {path}: {e}"))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ──────────────────── Status lines ────────────────────

#[test]
fn status_lines_classify_from_fixture() {
    init_tracing();
    let cases: Vec<StatusLineCase> = load_fixture("status_lines.json");
    assert!(!cases.is_empty());

    for case in &cases {
        let result = classify_status_line(&case.command, case.line.as_bytes());
        match (case.expected.status.as_str(), result) {
            ("ok", Ok(StatusLine::Ok(text))) => {
                assert_eq!(Some(text), case.expected.text, "line {:?}", case.line);
            }
            ("continue", Ok(StatusLine::Continue(text))) => {
                assert_eq!(Some(text), case.expected.text, "line {:?}", case.line);
            }
            ("error", Err(err)) => {
                assert_eq!(Some(err.kind()), case.expected.kind, "line {:?}", case.line);
                assert_eq!(
                    err.status_text().map(str::to_string),
                    case.expected.status_text,
                    "line {:?}",
                    case.line
                );
            }
            (expected, other) => panic!("line {:?}: expected {expected}, got {other:?}", case.line),
        }
    }
}

// ──────────────────── Session scenarios ────────────────────

#[test]
fn rejected_login_keeps_connection() {
    init_tracing();
    let mut state = ConnectionState::Connected;

    let err = classify_status_line("LOGIN", b"-ERR invalid password\r\n").unwrap_err();
    let Pop3Error::Command(command) = &err else {
        panic!("expected command error, got {err:?}");
    };
    assert_eq!(command.status_text(), "invalid password");

    state = SessionEngine::observe(state, &err);
    assert_eq!(state, ConnectionState::Connected);
    assert_eq!(recovery_for(err.kind()), RecoveryAction::RetryCommand);
    assert_eq!(SessionEngine::decide_command(state), CommandDecision::Issue);
}

#[test]
fn grammar_violation_drops_connection_until_reconnect() {
    init_tracing();
    let mut state = ConnectionState::Connected;

    let err = classify_status_line("LIST", b"HTTP/1.1 400 Bad Request").unwrap_err();
    assert!(matches!(err, Pop3Error::SessionFatal(_)));
    assert_eq!(err.status_text(), None);

    state = SessionEngine::observe(state, &err);
    assert_eq!(state, ConnectionState::Disconnected);
    assert_eq!(recovery_for(err.kind()), RecoveryAction::Reconnect);
    assert_eq!(
        SessionEngine::decide_command(state),
        CommandDecision::RejectDisconnected
    );

    let retry_err = Pop3Error::command("stale", "ignored");
    assert_eq!(
        SessionEngine::observe(state, &retry_err),
        ConnectionState::Disconnected
    );

    state = SessionEngine::apply(state, SessionTransition::Reconnect);
    assert_eq!(state, ConnectionState::Connected);
}

// ──────────────────── Error records ────────────────────

#[test]
fn error_records_roundtrip_from_fixture() {
    let records: Vec<ErrorRecord> = load_fixture("error_records.json");

    for record in records {
        let error = Pop3Error::try_from(record.clone())
            .unwrap_or_else(|e| panic!("decode failed for {:?}: {e}", record.message));

        assert_eq!(error.kind(), record.kind);
        assert_eq!(error.message(), record.message);
        match record.kind {
            ErrorKind::Command => assert_eq!(
                error.status_text(),
                Some(record.status_text.as_deref().unwrap_or(""))
            ),
            ErrorKind::SessionFatal => assert_eq!(error.status_text(), None),
        }
        assert_eq!(error.failure().cause_chain(), record.cause_chain);

        let again = decode_json(&encode_json(&error).unwrap()).unwrap();
        assert_eq!(again.kind(), error.kind());
        assert_eq!(again.message(), error.message());
        assert_eq!(again.status_text(), error.status_text());
    }
}

#[test]
fn command_rejected_record_roundtrip() {
    let original: Pop3Error =
        CommandError::with_status_text("Command rejected", "Invalid mailbox").into();
    let decoded = decode_json(&encode_json(&original).unwrap()).unwrap();

    assert_eq!(decoded.kind(), ErrorKind::Command);
    assert_eq!(decoded.message(), "Command rejected");
    assert_eq!(decoded.status_text(), Some("Invalid mailbox"));
}

#[test]
fn absent_status_text_is_a_construction_error() {
    let err = CommandError::try_with_status_text("Command rejected", None).unwrap_err();
    assert!(matches!(
        err,
        pop3_fault::Error::InvalidArgument {
            name: "status_text"
        }
    ));
}

#[test]
fn errors_cross_threads() {
    let command: Pop3Error = CommandError::with_status_text("Command rejected", "busy").into();
    let fatal: Pop3Error = SessionFatalError::new("Command rejected").into();

    let handle = std::thread::spawn(move || {
        (
            command.kind(),
            command.status_text().map(str::to_string),
            fatal.kind(),
        )
    });
    let (command_kind, status_text, fatal_kind) = handle.join().unwrap();

    assert_eq!(command_kind, ErrorKind::Command);
    assert_eq!(status_text.as_deref(), Some("busy"));
    assert_eq!(fatal_kind, ErrorKind::SessionFatal);
}
