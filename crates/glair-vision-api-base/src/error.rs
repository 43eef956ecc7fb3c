//! Error types for API operations.

use std::fmt;

/// An error returned by the API client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file could not be opened or read.
    #[error("failed to read input file: {0}")]
    File(#[from] std::io::Error),

    /// Could not reach the server (DNS failure, timeout, TLS error, connection refused, etc.)
    #[error("not connected: {0}")]
    NotConnected(String),

    /// Server returned an HTTP error response.
    #[error("API error {status}: {content}")]
    Response {
        /// HTTP status code of the response.
        status: reqwest::StatusCode,
        /// Raw response body content.
        content: String,
    },

    /// The response body could not be decoded into the expected model.
    #[error("invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// Catch-all for other errors (middleware, request building, etc.)
    #[error("other error: {0}")]
    Other(String),
}

impl Error {
    /// Coarse classification of the error, stable across versions.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::File(_) => ErrorCode::File,
            Error::NotConnected(_) => ErrorCode::Network,
            Error::Response { .. } => ErrorCode::Api,
            Error::InvalidResponse(_) => ErrorCode::InvalidResponse,
            Error::Other(_) => ErrorCode::Unknown,
        }
    }

    /// Status and raw body of the API response, if the server answered with an error.
    pub fn response(&self) -> Option<(reqwest::StatusCode, &str)> {
        match self {
            Error::Response { status, content } => Some((*status, content.as_str())),
            _ => None,
        }
    }
}

/// Error classification that callers can match on without inspecting the error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Reading the input file failed.
    File,
    /// The request never got a response from the server.
    Network,
    /// The server responded with a non-success status.
    Api,
    /// The server responded, but the body did not match the expected model.
    InvalidResponse,
    /// Anything else.
    Unknown,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::File => "FILE_ERROR",
            ErrorCode::Network => "NETWORK_ERROR",
            ErrorCode::Api => "API_ERROR",
            ErrorCode::InvalidResponse => "INVALID_RESPONSE",
            ErrorCode::Unknown => "UNKNOWN_ERROR",
        };
        write!(f, "{}", s)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return Error::Response {
                status,
                // The body is gone once reqwest turns a response into an error.
                content: String::new(),
            };
        }

        // Connection errors, timeouts and failures while sending all mean the server was never
        // reached.
        if e.is_connect() || e.is_timeout() || e.is_request() {
            return Error::NotConnected(e.to_string());
        }

        if e.is_decode() {
            return Error::Other(format!("failed to decode response body: {e}"));
        }

        Error::Other(e.to_string())
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => e.into(),
            reqwest_middleware::Error::Middleware(e) => match e.downcast::<Error>() {
                Ok(e) => e,
                Err(e) => Error::Other(e.to_string()),
            },
        }
    }
}
