//! Typed failure taxonomy for the Stride client.
//!
//! One kind of remote failure is modelled: data unavailable, raised when a
//! fetch or write against the service rejects. Commands catch it at the
//! view boundary and degrade (empty-list state, unchanged local list, or an
//! inline message); nothing here is fatal to the process.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service rejected or never answered a request.
    #[error("{resource} unavailable: {source}")]
    Unavailable {
        resource: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// The service answered, but the body did not decode as expected.
    #[error("Malformed {resource} response: {source}")]
    InvalidResponse {
        resource: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// A by-id lookup came back 404.
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },
}
