//! Error types for nafa.
//!
//! This module defines the error taxonomy shared by the annotation store, the
//! journey view and the HTTP layer, plus the ambient configuration and I/O
//! failures of the binary.

use thiserror::Error;

/// The main error type for nafa operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Lookup Errors ===
    /// No journey is known under the requested identifier.
    #[error("journey not found: {id}")]
    JourneyNotFound {
        /// The identifier that was requested.
        id: String,
    },

    /// No API route matches the request method and path.
    #[error("no route for {method} {path}")]
    RouteNotFound {
        /// The HTTP method of the request.
        method: String,
        /// The request path.
        path: String,
    },

    // === Request Errors ===
    /// The annotation request body could not be parsed.
    #[error("invalid request body: {0}")]
    InvalidRequestBody(#[source] serde_json::Error),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Socket or file system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for nafa operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a journey-not-found error.
    #[must_use]
    pub fn journey_not_found(id: impl Into<String>) -> Self {
        Self::JourneyNotFound { id: id.into() }
    }

    /// Create a route-not-found error.
    #[must_use]
    pub fn route_not_found(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self::RouteNotFound {
            method: method.into(),
            path: path.into(),
        }
    }

    /// Check if this error was caused by the client's request payload.
    #[must_use]
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::InvalidRequestBody(_))
    }

    /// HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::JourneyNotFound { .. } | Self::RouteNotFound { .. } => 404,
            Self::InvalidRequestBody(_) => 400,
            Self::ConfigLoad(_) | Self::ConfigValidation { .. } | Self::Io(_) => 500,
        }
    }

    /// The message exposed to HTTP clients.
    ///
    /// Unlike the `Display` text this never carries request details.
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::JourneyNotFound { .. } => "Journey not found",
            Self::RouteNotFound { .. } => "Not found",
            Self::InvalidRequestBody(_) => "Invalid request body",
            Self::ConfigLoad(_) | Self::ConfigValidation { .. } | Self::Io(_) => {
                "Internal server error"
            }
        }
    }
}
