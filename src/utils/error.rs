use thiserror::Error;

/// Message shown for any failed film request, whatever the cause.
pub const FILM_FETCH_FAILED: &str = "There was an error fetching the film.";

/// Coarse failure classification. Only surfaces in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Parse,
}

impl FailureKind {
    pub fn of(err: &reqwest::Error) -> Self {
        if err.is_decode() {
            FailureKind::Parse
        } else {
            FailureKind::Network
        }
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("There was an error fetching the film.")]
    Film { kind: FailureKind },

    #[error("{message}")]
    Species { kind: FailureKind, message: String },
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Film { kind } | FetchError::Species { kind, .. } => *kind,
        }
    }
}

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ListingError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ListingError::ConfigValidationError { .. }
                | ListingError::InvalidConfigValueError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ListingError::Fetch(_) => crate::app::controller::LOAD_FAILED_MESSAGE.to_string(),
            ListingError::IoError(e) => format!("Could not read or write a file: {}", e),
            ListingError::SerializationError(e) => format!("Could not encode output: {}", e),
            ListingError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            ListingError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for '{}' ({})", value, field, reason),
        }
    }
}

pub type Result<T> = std::result::Result<T, ListingError>;
