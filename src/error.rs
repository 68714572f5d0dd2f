//! Error handling for the burger store core
//!
//! This module provides idiomatic Rust error types using thiserror. The
//! `Display` string of an `ApiError` is exactly what reaches state as the
//! rejected-phase reason of a failed operation.

use thiserror::Error;

/// Errors produced at the remote API boundary.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("response decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid api configuration: {0}")]
    Config(String),

    #[error("no access token in session storage")]
    MissingToken,

    #[error("no refresh token in session storage")]
    MissingRefreshToken,
}

/// Errors produced by the store itself, as opposed to remote operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A failed operation surfaced through a settlement handle.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The apply loop is gone; no further actions can be applied.
    #[error("store has shut down")]
    Closed,

    /// The builder has no bun or no fillings and cannot be submitted.
    #[error("builder is not submittable: a bun and at least one filling are required")]
    NotSubmittable,
}
