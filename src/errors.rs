//! Typed error taxonomy for a registration attempt.
//!
//! Two enums cover the two failure layers:
//! - `TransportError` — the request could not complete or the body was not
//!   parseable JSON
//! - `RegistrationError` — the full classification the coordinator folds
//!   into the progress state: configuration, transport, or business
//!
//! None of these escape the coordinator boundary; they exist so failures are
//! matchable in code and tests before being flattened into user-facing text.

use thiserror::Error;

use crate::coordinator::{CONNECTION_ERROR_MESSAGE, MISSING_DESTINATION_MESSAGE};

/// Transport-layer failures from the registration endpoint.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to registration endpoint failed: {message}")]
    RequestFailed { message: String },

    #[error("registration endpoint returned a non-JSON body: {message}")]
    MalformedResponse { message: String },
}

/// Classified failure of one registration attempt.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("no destination selected")]
    MissingDestination,

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("registration rejected by the backend: {message}")]
    Business { message: String },
}

impl RegistrationError {
    /// Text shown to the user for this failure.
    ///
    /// Business errors surface the server-provided text verbatim; transport
    /// errors collapse to one generic connection message (the detail only
    /// goes to the log).
    pub fn user_message(&self) -> String {
        match self {
            RegistrationError::MissingDestination => MISSING_DESTINATION_MESSAGE.to_string(),
            RegistrationError::Transport(_) => CONNECTION_ERROR_MESSAGE.to_string(),
            RegistrationError::Business { message } => message.clone(),
        }
    }
}
