//! Crate error taxonomy.
//!
//! A few classes cover every fallible path:
//!
//! - [`Error::Validation`]: rejected before any state mutation (unknown
//!   widget kind, malformed configuration, bad reorder list). Surfaced to
//!   the caller synchronously.
//! - [`Error::NotFound`]: an operation named a scene, widget, project, or
//!   hunt that no longer exists.
//! - [`Error::Transport`] and [`Error::Server`]: a persistence write or
//!   poll fetch failed, on the wire or with a 5xx. Never fatal: optimistic
//!   local state is preserved and the next successful poll reconciles.
//!
//! A widget kind that merely lacks data (no linked hunt, empty session) is
//! not an error at all; the renderer degrades to a placeholder.

/// Unified error type for the overlay engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request was malformed and nothing was mutated.
    #[error("validation: {0}")]
    Validation(String),

    /// The target scene, widget, project, or hunt does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A network operation failed; local state is unaffected.
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a server-side failure status.
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
}

impl Error {
    /// Wrap a serde failure as a validation error. Used where a payload
    /// decoded structurally but a config body did not match its kind.
    #[must_use]
    pub fn bad_payload(err: &serde_json::Error) -> Self {
        Self::Validation(format!("malformed payload: {err}"))
    }
}
