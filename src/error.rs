// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Load(LoadError),
    Config(String),
    Io(String),
}

/// Discriminated causes for a failed collection load.
///
/// A load failure is fatal to the session: the collection stays empty and
/// the error is surfaced to the user. Individual image failures are handled
/// locally by the loader and never become a `LoadError`.
#[derive(Debug, Clone)]
pub enum LoadError {
    /// Connection or request transport failure (DNS, TLS, refused, timeout).
    Transport(String),

    /// The metadata endpoint answered with a non-success HTTP status.
    Status(u16),

    /// The response body did not match the expected payload shape.
    Payload(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Transport(msg) => write!(f, "Transport error: {msg}"),
            LoadError::Status(code) => write!(f, "Unexpected HTTP status: {code}"),
            LoadError::Payload(msg) => write!(f, "Malformed payload: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Load(e) => write!(f, "Load Error: {e}"),
            Error::Config(e) => write!(f, "Config Error: {e}"),
            Error::Io(e) => write!(f, "I/O Error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        Error::Load(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => LoadError::Status(status.as_u16()),
            None => LoadError::Transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Payload(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
