//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Http(reqwest::Error),
    Zip(zip::result::ZipError),
    Url(url::ParseError),
    Serde(serde_json::Error),
    /// Invalid parameters, raised before any I/O happens.
    Config(String),
    /// Segmentation model could not be found locally.
    SegmenterMissing(String),
    Render(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Http(e) => write!(f, "http error: {e}"),
            Error::Zip(e) => write!(f, "archive error: {e}"),
            Error::Url(e) => write!(f, "invalid url: {e}"),
            Error::Serde(e) => write!(f, "serialization error: {e}"),
            Error::Config(msg) => write!(f, "configuration error: {msg}"),
            Error::SegmenterMissing(name) => write!(f, "segmentation model not found: {name}"),
            Error::Render(msg) => write!(f, "could not render chart: {msg}"),
            Error::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Http(e)
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Error {
        Error::Zip(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::Url(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
