//! Error types for the task fetch flow.
//!
//! # Design
//! Every variant ends up in the same place — the loader's diagnostic log
//! entry followed by silent degradation to an empty list — but the
//! variants keep the log useful and let tests pin down which stage failed:
//! transport, HTTP status, or body decoding.

use std::fmt;

/// Errors produced while fetching the remote task list.
#[derive(Debug)]
pub enum FetchError {
    /// The round-trip itself failed (connection refused, timeout, DNS).
    Transport(String),

    /// The server answered with a non-200 status.
    HttpStatus { status: u16, body: String },

    /// The response body could not be deserialized into task records.
    Deserialization(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "transport failed: {msg}"),
            FetchError::HttpStatus { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            FetchError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for FetchError {}
