use crate::error::{ConnectionError, Result};
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf, time::Duration};

/// Default connection url. An in-memory database needs no running server.
pub const URL: &str = "sqlite::memory:";

/// Environment variable that overrides [`URL`].
pub const URL_ENV: &str = "DB_URL";

const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

// The driver stores the busy timeout as i32 milliseconds.
const MAX_BUSY_TIMEOUT_MS: u128 = i32::MAX as u128;

const SCHEME: &str = "sqlite:";
const MEMORY: &str = ":memory:";

/// Connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Connection url, `sqlite::memory:`, `sqlite://<path>` or a bare path
    pub url: String,
    /// Open without write access; the database must already exist
    pub read_only: bool,
    /// How long a statement waits on a locked database
    pub busy_timeout: Duration,
}

impl ConnectionConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            read_only: false,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// Settings from the environment, falling back to [`URL`].
    pub fn from_env() -> Self {
        match env::var(URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Reject settings the driver cannot represent.
    pub fn validate(&self) -> Result<()> {
        if self.busy_timeout.as_millis() > MAX_BUSY_TIMEOUT_MS {
            return Err(ConnectionError::InvalidConfig(format!(
                "busy_timeout {:?} exceeds {MAX_BUSY_TIMEOUT_MS}ms",
                self.busy_timeout
            )));
        }
        Ok(())
    }

    pub fn target(&self) -> Result<Target> {
        Target::parse(&self.url)
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::new(URL)
    }
}

/// Where a connection url points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Memory,
    File(PathBuf),
}

impl Target {
    pub fn parse(url: &str) -> Result<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ConnectionError::InvalidUrl("empty url".to_string()));
        }

        let rest = match url.strip_prefix(SCHEME) {
            Some(rest) => rest.strip_prefix("//").unwrap_or(rest),
            None if has_foreign_scheme(url) => {
                return Err(ConnectionError::UnsupportedUrl(url.to_string()))
            }
            None => url,
        };

        if rest == MEMORY {
            return Ok(Self::Memory);
        }
        // Query parameters are not supported; they would end up in the file name.
        if rest.is_empty() || rest.contains('?') {
            return Err(ConnectionError::InvalidUrl(url.to_string()));
        }
        Ok(Self::File(PathBuf::from(rest)))
    }
}

// A single letter before the colon is a drive letter, not a scheme.
fn has_foreign_scheme(url: &str) -> bool {
    if url == MEMORY {
        return false;
    }
    let Some((scheme, _)) = url.split_once(':') else {
        return false;
    };
    scheme.len() > 1
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
