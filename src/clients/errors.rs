use rspotify::{ClientError, model::IdError};
use thiserror::Error;

/// Every way an export can fail. All of them end the run.
#[derive(Error, Debug)]
pub enum Error {
    /// Required settings absent from flags, environment and `.env`
    #[error("Missing {} in environment or .env file", .0.join(", "))]
    ConfigurationMissing(Vec<&'static str>),

    /// Setting present but unusable
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Playlist link does not have the expected shape
    #[error("Invalid playlist link: {0}")]
    InvalidInput(String),

    /// Spotify rejected authentication or a request
    #[error("Spotify error: {0}")]
    SpotifyError(#[from] ClientError),

    /// Playlist id not accepted by the Spotify client
    #[error("Spotify rejected playlist id: {0}")]
    SpotifyIdError(#[from] IdError),

    /// CSV serialization or write failure
    #[error("Failed to write CSV: {0}")]
    CsvError(#[from] csv::Error),

    /// Output file could not be created or written
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<dotenvy::Error> for Error {
    fn from(err: dotenvy::Error) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
