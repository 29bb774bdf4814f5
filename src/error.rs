//! Error types for transcript-policy

use thiserror::Error;

/// Errors that can occur while resolving a transcript policy.
///
/// Resolution is total over well-formed descriptors: unknown providers and
/// dialects are not failures, they resolve to the conservative default policy.
/// The one boundary condition signaled as an error is a missing provider id,
/// since its absence cannot be distinguished from a legitimate "no rule
/// applies" case otherwise.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// The descriptor carried an empty provider id
    #[error("model descriptor has an empty provider id")]
    MissingProvider,
}

/// Result type for transcript-policy operations
pub type Result<T> = std::result::Result<T, PolicyError>;
