//! transcript-policy
//!
//! Transcript-compatibility policy resolution for multi-provider LLM agents.
//!
//! Providers diverge in how they accept tool-call identifiers and how strictly
//! they require alternating conversational turns. This crate centralizes that
//! divergence into one deterministic decision function: give it a
//! [`ModelDescriptor`] (provider id, model id, optional wire-API dialect) and it
//! returns a [`TranscriptPolicy`] telling the transcript builder which
//! sanitization and validation rules to apply. The resolver itself performs no
//! sanitization, no I/O, and holds no state.
//!
//! ```rust
//! use transcript_policy::{resolve_transcript_policy, ModelDescriptor, ToolCallIdMode};
//!
//! let descriptor = ModelDescriptor::new("anthropic", "claude-opus-4-5")
//!     .with_model_api("anthropic-messages");
//! let policy = resolve_transcript_policy(&descriptor).unwrap();
//! assert!(policy.sanitize_tool_call_ids);
//! assert_eq!(policy.tool_call_id_mode, Some(ToolCallIdMode::Strict));
//! ```
#![deny(unsafe_code)]

pub mod error;
pub mod resolver;
pub mod types;

pub use error::{PolicyError, Result};
pub use resolver::resolve_transcript_policy;
pub use types::{ModelApi, ModelDescriptor, ProviderId, ToolCallIdMode, TranscriptPolicy};

/// Common types for callers that want a single import.
pub mod prelude {
    pub use crate::error::{PolicyError, Result};
    pub use crate::resolver::resolve_transcript_policy;
    pub use crate::types::{
        ModelApi, ModelDescriptor, ProviderId, ToolCallIdMode, TranscriptPolicy,
    };
}
