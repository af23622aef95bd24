//! Error types for the Twitch client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the Twitch client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Argument Errors
    // ============================================================================
    #[error("{message}")]
    InvalidArgument { message: String },

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Decoding Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Check if this error originated at the transport boundary.
    ///
    /// Transport failures leave a cursor in its last-known-good state, so the
    /// failed call may be re-issued as-is; argument and auth errors require
    /// fixing the call instead.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::HttpStatus { .. })
    }
}

/// Result type alias for the Twitch client
pub type Result<T> = std::result::Result<T, Error>;
