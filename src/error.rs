// ⚠️ Error types for the fee-agreement workflow

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishingError {
    #[error("Fee amount must be a non-negative number, got {0}")]
    InvalidFeeAmount(f64),

    #[error("Record already registered: {0}")]
    DuplicateRecord(String),

    #[error("{kind} not found: {id}")]
    RecordNotFound { kind: &'static str, id: String },

    #[error("Registry lock poisoned: {0}")]
    RegistryPoisoned(&'static str),

    #[error("Command #{index} failed: {source}")]
    CommandFailed {
        index: usize,
        #[source]
        source: Box<PublishingError>,
    },
}

impl PublishingError {
    pub fn not_found(kind: &'static str, id: &str) -> Self {
        PublishingError::RecordNotFound {
            kind,
            id: id.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PublishingError>;
