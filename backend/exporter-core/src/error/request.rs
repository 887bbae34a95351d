//! Failure taxonomy for a single request.
//!
//! Transport failures are classified in a fixed priority order: protocol
//! errors, then connection errors, then timeouts, then everything else. A
//! connect timeout is therefore a connection error.

use crate::messages::{
    CONNECTION_ERROR_MESSAGE, HTTP_ERROR_MESSAGE, TIMEOUT_ERROR_MESSAGE, UNKNOWN_ERROR_MESSAGE,
};

use common::ErrorLocation;

use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, Clone, ThisError)]
pub enum RequestError {
    /// Bad method, host or url; nothing was sent.
    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("Connection Error: {message} {location}")]
    Connection {
        message: String,
        location: ErrorLocation,
    },

    #[error("Timeout Error: {message} {location}")]
    Timeout {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown Error: {message} {location}")]
    Unknown {
        message: String,
        location: ErrorLocation,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestErrorKind {
    Validation,
    Http,
    Connection,
    Timeout,
    Unknown,
}

impl fmt::Display for RequestErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestErrorKind::Validation => "ValidationError",
            RequestErrorKind::Http => "HttpError",
            RequestErrorKind::Connection => "ConnectionError",
            RequestErrorKind::Timeout => "TimeoutError",
            RequestErrorKind::Unknown => "UnknownError",
        };
        f.write_str(name)
    }
}

impl RequestError {
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        RequestError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown(message: impl Into<String>) -> Self {
        RequestError::Unknown {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> RequestErrorKind {
        match self {
            RequestError::Validation { .. } => RequestErrorKind::Validation,
            RequestError::Http { .. } => RequestErrorKind::Http,
            RequestError::Connection { .. } => RequestErrorKind::Connection,
            RequestError::Timeout { .. } => RequestErrorKind::Timeout,
            RequestError::Unknown { .. } => RequestErrorKind::Unknown,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            RequestError::Validation { message, .. }
            | RequestError::Http { message, .. }
            | RequestError::Connection { message, .. }
            | RequestError::Timeout { message, .. }
            | RequestError::Unknown { message, .. } => message,
        }
    }

    pub fn location(&self) -> ErrorLocation {
        match self {
            RequestError::Validation { location, .. }
            | RequestError::Http { location, .. }
            | RequestError::Connection { location, .. }
            | RequestError::Timeout { location, .. }
            | RequestError::Unknown { location, .. } => *location,
        }
    }

    /// The single line shown in the log panel for this failure.
    ///
    /// Validation messages are already complete sentences and are used as is.
    pub fn log_line(&self) -> String {
        match self {
            RequestError::Validation { message, .. } => message.clone(),
            RequestError::Http { message, .. } => format!("{HTTP_ERROR_MESSAGE}{message}"),
            RequestError::Connection { message, .. } => {
                format!("{CONNECTION_ERROR_MESSAGE}{message}")
            }
            RequestError::Timeout { message, .. } => format!("{TIMEOUT_ERROR_MESSAGE}{message}"),
            RequestError::Unknown { message, .. } => format!("{UNKNOWN_ERROR_MESSAGE}{message}"),
        }
    }
}

impl From<reqwest::Error> for RequestError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        let message = describe_chain(&error);
        let location = ErrorLocation::from(Location::caller());

        if is_protocol_error(&error) {
            RequestError::Http { message, location }
        } else if error.is_connect() {
            RequestError::Connection { message, location }
        } else if error.is_timeout() {
            RequestError::Timeout { message, location }
        } else {
            RequestError::Unknown { message, location }
        }
    }
}

/// Errors raised by the HTTP exchange itself, before any response exists.
fn is_protocol_error(error: &reqwest::Error) -> bool {
    error.is_status()
        || error.is_redirect()
        || (error.is_request() && !error.is_connect() && !error.is_timeout())
}

/// `outer: inner: innermost`, skipping repeated messages.
pub(crate) fn describe_chain(error: &(dyn StdError + 'static)) -> String {
    let mut parts: Vec<String> = vec![error.to_string()];
    let mut source = error.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if parts.last() != Some(&text) {
            parts.push(text);
        }
        source = inner.source();
    }
    parts.join(": ")
}
