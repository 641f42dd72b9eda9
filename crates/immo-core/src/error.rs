use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImmoError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unknown state code '{code}' (expected one of the 16 German state codes)")]
    UnknownState { code: String },

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ImmoError {
    fn from(e: serde_json::Error) -> Self {
        ImmoError::SerializationError(e.to_string())
    }
}
