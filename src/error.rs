use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed codelab export: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export too large: {size} bytes (max: {max})")]
    InputTooLarge { size: u64, max: u64 },

    #[error("Step \"{step}\" has a negative duration: {minutes} minutes")]
    NegativeDuration { step: String, minutes: i64 },

    #[error("Not implemented: {0}")]
    Unsupported(&'static str),

    #[error("No parser registered for format: {0}")]
    UnknownFormat(String),
}
