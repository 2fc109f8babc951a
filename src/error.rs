//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum PulseError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Malformed response: {0}")]
    Malformed(#[from] MalformedResponse),

    #[error("Controller command queue full")]
    CommandQueueFull,

    #[error("Controller stopped")]
    ControllerStopped,
}

/// Transport-layer errors — the request never produced a usable JSON body.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },
}

/// The response body arrived but its top-level shape is not the GraphQL
/// envelope we expect.
///
/// Distinct from an empty result set: a collection with zero matching
/// activity yields a valid zero-row table, never this error.
#[derive(Error, Debug)]
pub enum MalformedResponse {
    #[error("Response has no `data` key")]
    MissingData,

    #[error("GraphQL errors: {}", .0.join("; "))]
    Graphql(Vec<String>),

    #[error("Unexpected shape: {0}")]
    Shape(#[from] serde_json::Error),
}
