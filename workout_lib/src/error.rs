use thiserror::Error;

/// Rejected form input. The message is shown to the user as is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("All fields are required.\nTip: Input value must be numeric and greater than 0")]
    NotNumeric,

    #[error("All fields are required.\nTip: Input value must be numeric and greater than 0")]
    AllZero,

    #[error("Duration {field} must be a whole number, got {value:?}")]
    InvalidDuration { field: &'static str, value: String },

    #[error("Unknown workout type {0:?}")]
    UnknownType(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Click on the map to choose where the workout happened")]
    NoPendingLocation,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
