//! Provider and wire-API identifier enums.
//!
//! Known names map to concrete variants; anything else maps to the open
//! `Other(name)` variant so unrecognized identifiers stay values rather than
//! errors and fall through to default policy rules.

use serde::{Deserialize, Serialize};

/// Provider identity enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderId {
    OpenAi,
    Anthropic,
    Google,
    Mistral,
    Other(String),
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenAi => write!(f, "openai"),
            Self::Anthropic => write!(f, "anthropic"),
            Self::Google => write!(f, "google"),
            Self::Mistral => write!(f, "mistral"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

impl ProviderId {
    /// Construct a ProviderId from a provider name string.
    /// Known names map to concrete variants; others map to Other(name).
    pub fn from_name(name: &str) -> Self {
        match name {
            "openai" => Self::OpenAi,
            "anthropic" => Self::Anthropic,
            "google" => Self::Google,
            "mistral" => Self::Mistral,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Wire-API dialect enumeration.
///
/// A dialect may be shared across providers: `OpenAiCompletions` is the
/// OpenAI-compatible completions shape many third-party vendors serve their
/// models through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelApi {
    /// OpenAI's own (Responses-era) API
    OpenAi,
    /// The shared OpenAI-compatible chat-completions dialect
    OpenAiCompletions,
    /// Anthropic's native Messages API
    AnthropicMessages,
    /// Google's native Generative AI API
    GoogleGenerativeAi,
    Other(String),
}

impl std::fmt::Display for ModelApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenAi => write!(f, "openai"),
            Self::OpenAiCompletions => write!(f, "openai-completions"),
            Self::AnthropicMessages => write!(f, "anthropic-messages"),
            Self::GoogleGenerativeAi => write!(f, "google-generative-ai"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

impl ModelApi {
    /// Construct a ModelApi from a dialect name string.
    /// Known names map to concrete variants; others map to Other(name).
    pub fn from_name(name: &str) -> Self {
        match name {
            "openai" => Self::OpenAi,
            "openai-completions" => Self::OpenAiCompletions,
            "anthropic-messages" => Self::AnthropicMessages,
            "google-generative-ai" => Self::GoogleGenerativeAi,
            other => Self::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_id_round_trips_through_display() {
        for name in ["openai", "anthropic", "google", "mistral", "moonshot"] {
            assert_eq!(ProviderId::from_name(name).to_string(), name);
        }
    }

    #[test]
    fn model_api_round_trips_through_display() {
        for name in [
            "openai",
            "openai-completions",
            "anthropic-messages",
            "google-generative-ai",
            "some-future-dialect",
        ] {
            assert_eq!(ModelApi::from_name(name).to_string(), name);
        }
    }

    #[test]
    fn unknown_names_map_to_other() {
        assert_eq!(
            ProviderId::from_name("zai"),
            ProviderId::Other("zai".to_string())
        );
        assert_eq!(
            ModelApi::from_name("grpc"),
            ModelApi::Other("grpc".to_string())
        );
    }
}
