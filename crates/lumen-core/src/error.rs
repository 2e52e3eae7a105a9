#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),
    #[error("value is not serializable by the remote")]
    Unserializable,
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
