//! Data types for transcript-policy resolution.
//!
//! ## Module Organization
//!
//! - **`descriptor`** - The caller-owned input record ([`ModelDescriptor`])
//! - **`ids`** - Provider and wire-API identifier enums ([`ProviderId`], [`ModelApi`])
//! - **`policy`** - The resolved output record ([`TranscriptPolicy`], [`ToolCallIdMode`])
//!
//! All types are re-exported at this module root.

mod descriptor;
mod ids;
mod policy;

pub use descriptor::ModelDescriptor;
pub use ids::{ModelApi, ProviderId};
pub use policy::{ToolCallIdMode, TranscriptPolicy};
