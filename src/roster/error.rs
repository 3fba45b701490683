use crate::validation::FieldErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Weather lookup failed: {0}")]
    Weather(String),

    #[error("Invalid form: {0}")]
    Validation(FieldErrors),

    #[error(transparent)]
    Flow(#[from] crate::flow::FlowError),

    #[error("Api Error: {0}")]
    Api(String),
}

impl From<reqwest::Error> for RosterError {
    fn from(err: reqwest::Error) -> Self {
        RosterError::Weather(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
