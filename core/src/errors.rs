use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Event error: {0}")]
    Event(#[from] EventError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

/// Faults raised while reading an event. None of them are recovered; they end
/// the invocation and are reported by the host.
#[derive(Error, Debug, PartialEq)]
pub enum EventError {
    #[error("Event must be a JSON object, found {found}")]
    EventNotAnObject { found: String },

    #[error("Field `numbers` must be a sequence, found {found}")]
    NotASequence { found: String },

    #[error("Element {index} of `numbers` is not numeric: {found}")]
    NonNumericElement { index: usize, found: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed: {reason}")]
    ValidationFailed { reason: String },

    #[error("Failed to load configuration from {origin}: {error}")]
    LoadFailed {
        origin: String,
        #[source]
        error: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("JSON serialization failed: {reason}")]
    Json { reason: String },

    #[error("Response body is not valid UTF-8: {reason}")]
    Utf8 { reason: String },
}

pub type Result<T> = std::result::Result<T, HandlerError>;

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::Serialization(SerializationError::Json {
            reason: err.to_string(),
        })
    }
}

impl HandlerError {
    /// True when the event itself is at fault rather than the deployment.
    pub fn is_bad_event(&self) -> bool {
        matches!(self, HandlerError::Event(_))
    }
}
