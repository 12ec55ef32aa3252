use thiserror::Error;

/// Failures raised while acquiring or releasing a connection.
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("Invalid connection url: {0}")]
    InvalidUrl(String),

    #[error("Invalid connection config: {0}")]
    InvalidConfig(String),

    #[error("Unsupported connection url: {0}")]
    UnsupportedUrl(String),

    #[error("Failed to open connection to {url}: {source}")]
    Open {
        url: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to close connection: {0}")]
    Close(#[source] rusqlite::Error),
}

impl ConnectionError {
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::InvalidConfig(_))
    }

    #[must_use]
    pub const fn is_url(&self) -> bool {
        matches!(self, Self::InvalidUrl(_) | Self::UnsupportedUrl(_))
    }
}

pub type Result<T> = std::result::Result<T, ConnectionError>;
