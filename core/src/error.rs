//! Error types for the licensing API client.
//!
//! # Design
//! The upstream service contract collapses every failure into "no usable
//! result," which is what the plain `LicenseClient` operations still return.
//! The `try_*` operations surface this enum instead so diagnostics can tell
//! "service unreachable" from "non-200 status" from "200 with an unexpected
//! body." `MissingField` gets a dedicated variant because a well-formed 200
//! response without the success key is the most common soft failure of this
//! API and callers want to log it distinctly.

use std::fmt;

/// Errors returned by `LicenseClient` try/build/parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The request could not be sent or the connection failed
    /// (DNS, refused connection, timeout).
    Transport(String),

    /// The server returned a non-200 status.
    Http { status: u16, body: String },

    /// The server returned 200 with an empty body.
    EmptyBody,

    /// The response body could not be deserialized into the expected shape.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response parsed but the expected success field was absent.
    MissingField(&'static str),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::EmptyBody => write!(f, "empty response body"),
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::MissingField(field) => {
                write!(f, "response missing field `{field}`")
            }
        }
    }
}

impl std::error::Error for ApiError {}
