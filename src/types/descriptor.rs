//! Model descriptor input type.

use serde::{Deserialize, Serialize};

/// Describes the target model a transcript is being built for.
///
/// The serialized shape uses camelCase field names (`modelId`, `modelApi`) to
/// match the wire contract shared with non-Rust consumers.
///
/// # Examples
///
/// ```rust
/// use transcript_policy::ModelDescriptor;
///
/// let descriptor = ModelDescriptor::new("moonshot", "kimi-k2.5")
///     .with_model_api("openai-completions");
/// assert_eq!(descriptor.model_api.as_deref(), Some("openai-completions"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Vendor/integration id owning the model's serving stack (e.g. `"anthropic"`).
    /// Always present and non-empty.
    pub provider: String,
    /// Specific model id (e.g. `"claude-opus-4-5"`). Accepted for future
    /// per-model overrides; no current rule keys on it.
    pub model_id: String,
    /// Wire-protocol dialect used to talk to the model (e.g.
    /// `"openai-completions"`). May differ from `provider` when a third-party
    /// model is served through a shared dialect. When absent, provider
    /// defaults apply without dialect-specific overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_api: Option<String>,
}

impl ModelDescriptor {
    /// Create a descriptor with no wire-API dialect set.
    pub fn new(provider: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model_id: model_id.into(),
            model_api: None,
        }
    }

    /// Set the wire-API dialect id.
    pub fn with_model_api(mut self, model_api: impl Into<String>) -> Self {
        self.model_api = Some(model_api.into());
        self
    }
}
