//! Error types for the search builders.
//!
//! Every violation is a call-order mistake by the caller: a set-once field was
//! written twice, or a singleton sub-clause was created twice. Nothing here is
//! recoverable in the sense of a retry.

use thiserror::Error;

/// The error type for all builder operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// A leaf field was already assigned on the owning node.
    #[error("{field} value has already been set")]
    AlreadySet {
        /// Human-readable label of the field (e.g. `term`, `search take`).
        field: &'static str,
    },

    /// A singleton sub-clause was already created on the owning node.
    #[error("{construct} already exists")]
    AlreadyExists {
        /// Human-readable label of the construct (e.g. `bool query`).
        construct: &'static str,
    },

    /// A suggestion with the same name was already created on the search body.
    #[error("suggest with name '{name}' already exists")]
    SuggestExists {
        /// The caller-supplied suggestion name.
        name: String,
    },
}

/// Result type alias for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;
