use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid {field} '{value}': {reason}")]
    Validation {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Could not save records: {0}")]
    Persistence(String),

    #[error("Wrong username or password")]
    AuthenticationFailed,

    #[error("Not logged in")]
    Unauthenticated,

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
