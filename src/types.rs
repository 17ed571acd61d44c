use crate::taxonomy::ErrorKind;

/// Field map for a POP3 error that has to cross a process or persistence boundary.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ErrorRecord {
    /// Which half of the taxonomy the error belongs to.
    pub kind: ErrorKind,
    /// Human-readable summary. Never empty.
    pub message: String,
    /// Server diagnostic text. Only command errors carry it; an absent value on a
    /// command record decodes as the empty string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
    /// Messages of the cause chain, outermost first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cause_chain: Vec<String>,
}
