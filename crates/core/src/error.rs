use thiserror::Error;

use crate::config::ConfigError;

/// Error types for wrapper generation
#[derive(Debug, Error)]
pub enum Error {
    /// Generic error with a message
    #[error("{0}")]
    Generic(String),

    /// Error when the interface description is not readable as JSON
    #[error("Failed to parse interface description: {0}")]
    Parse(String),

    /// An interface entry is missing a required field or has the wrong shape
    #[error("Malformed descriptor at entry {index}: {reason}")]
    MalformedDescriptor { index: usize, reason: String },

    /// A pipeline stage ran before the stage that feeds it
    #[error("Pipeline precondition violated: {0}")]
    Precondition(String),

    /// Overloaded function names are rejected by the active policy
    #[error("Function '{name}' is declared {count} times and overloads are rejected")]
    AmbiguousOverload { name: String, count: usize },

    /// A disambiguated overload name clashes with another method
    #[error("Method name collision: {0}")]
    NameCollision(String),

    /// Invalid generator configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error while reading or writing files
    #[error("I/O error: {0}")]
    Io(String),

    /// Any other error with its source
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Create a new generic error
    pub fn generic<S: Into<String>>(msg: S) -> Self {
        Error::Generic(msg.into())
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }

    /// Create a new malformed descriptor error for the entry at `index`
    pub fn malformed<S: Into<String>>(index: usize, reason: S) -> Self {
        Error::MalformedDescriptor {
            index,
            reason: reason.into(),
        }
    }

    /// Create a new precondition error
    pub fn precondition<S: Into<String>>(msg: S) -> Self {
        Error::Precondition(msg.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(msg: S) -> Self {
        Error::Io(msg.into())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Generic(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Generic(s.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(format!("JSON parsing error: {}", err))
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Parse(format!("TOML parsing error: {}", err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Result type for wrapper generation
pub type Result<T> = std::result::Result<T, Error>;
