/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error types for the LibAwesome client
//!
//! Two layers are kept apart:
//! - [`ClientError`] is what a login or delete call hands back to the caller.
//!   Its `Display` output is meant to be shown to the user as-is.
//! - [`AppError`] is the crate-level error (configuration, IO, serde). A
//!   [`AppError::Configuration`] means the build or deployment is broken and
//!   the process should not continue.

use crate::constants::{INVALID_CREDENTIALS_MESSAGE, UNKNOWN_ERROR_MESSAGE};
use reqwest::StatusCode;
use std::fmt;

/// Recoverable failure of a single client operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Network level failure (DNS, refused connection, timeout)
    Transport(String),
    /// The server answered but no usable token came back
    InvalidCredentials,
    /// The server rejected the session token (401 / 403)
    Unauthorized(String),
    /// The targeted resource does not exist (404)
    NotFound(String),
    /// Any other non-success status
    Server {
        /// HTTP status code
        status: u16,
        /// Server provided message
        message: String,
    },
    /// A response the client did not know how to interpret
    UnrecognizedResponse(String),
    /// Fallback when no other outcome was produced
    Unknown,
}

impl ClientError {
    /// Builds the error matching a non-success HTTP status
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClientError::Unauthorized(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            _ => ClientError::Server {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Returns true when retrying the same user action may succeed
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(e) => write!(f, "{e}"),
            ClientError::InvalidCredentials => write!(f, "{INVALID_CREDENTIALS_MESSAGE}"),
            ClientError::Unauthorized(msg) => write!(f, "{msg}"),
            ClientError::NotFound(msg) => write!(f, "{msg}"),
            ClientError::Server { status, message } => write!(f, "{message} ({status})"),
            ClientError::UnrecognizedResponse(msg) => write!(f, "unrecognized response: {msg}"),
            ClientError::Unknown => write!(f, "{UNKNOWN_ERROR_MESSAGE}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Transport(error_chain(&e))
    }
}

/// Renders an error followed by each of its causes, separated by `": "`
///
/// reqwest keeps the actual failure (refused connection, DNS, TLS) in the
/// source chain, out of its own `Display`. Causes already contained in the
/// message are skipped.
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Crate level error
#[derive(Debug)]
pub enum AppError {
    /// The configured API host cannot be turned into endpoint URLs
    Configuration(String),
    /// reqwest failure outside of a client operation (e.g. building the client)
    Network(reqwest::Error),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// IO failure
    Io(std::io::Error),
    /// Failure of a client operation
    Client(ClientError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Configuration(msg) => write!(f, "configuration error: {msg}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Client(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Client(e) => Some(e),
            AppError::Configuration(_) => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<ClientError> for AppError {
    fn from(e: ClientError) -> Self {
        AppError::Client(e)
    }
}
