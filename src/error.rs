// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Markup(String),
    Download(DownloadError),
    UnknownFilter(String),
}

/// Failures raised while fetching a file for the visitor.
/// Used to pick a user-facing, localized notice.
#[derive(Debug, Clone)]
pub enum DownloadError {
    /// The server answered with a non-success status code.
    HttpStatus(u16),

    /// The request could not be sent or the body stream broke off.
    Transport(String),

    /// The local source referenced by the page does not exist.
    SourceMissing(String),

    /// No writable downloads directory could be resolved.
    NoTargetDirectory,
}

impl DownloadError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DownloadError::HttpStatus(_) => "notification-download-error-http",
            DownloadError::Transport(_) => "notification-download-error-transport",
            DownloadError::SourceMissing(_) => "notification-download-error-missing",
            DownloadError::NoTargetDirectory => "notification-download-error-target",
        }
    }
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::HttpStatus(code) => write!(f, "HTTP status {}", code),
            DownloadError::Transport(msg) => write!(f, "Transfer failed: {}", msg),
            DownloadError::SourceMissing(path) => write!(f, "Source not found: {}", path),
            DownloadError::NoTargetDirectory => write!(f, "No downloads directory available"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Markup(e) => write!(f, "Markup Error: {}", e),
            Error::Download(e) => write!(f, "Download Error: {}", e),
            Error::UnknownFilter(value) => write!(f, "Unknown filter category: {}", value),
        }
    }
}

impl std::error::Error for Error {}

impl From<DownloadError> for Error {
    fn from(err: DownloadError) -> Self {
        Error::Download(err)
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

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Markup(err.to_string())
    }
}

impl From<crate::domain::media::UnknownFilter> for Error {
    fn from(err: crate::domain::media::UnknownFilter) -> Self {
        Error::UnknownFilter(err.0)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
