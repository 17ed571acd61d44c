#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid argument: {name} must not be absent")]
    InvalidArgument { name: &'static str },

    #[error("decode error: {reason}")]
    Decode { reason: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
