//! Resolved transcript policy types.

use serde::{Deserialize, Serialize};

/// Tool-call identifier rewrite scheme.
///
/// Open enumeration: vendors with new identifier quirks get additive variants
/// here without touching existing cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCallIdMode {
    /// Generic strict scheme (Anthropic's native identifier format).
    Strict,
    /// Stricter numeric-suffixed scheme (Mistral's identifier quirk).
    Strict9,
}

/// Transcript-compatibility rules for one provider/model/wire-API triple.
///
/// A fresh, independent value per resolution; the transcript builder reads the
/// flags and applies the corresponding sanitization/validation itself. The two
/// turn-validation flags address mutually exclusive wire dialects and are never
/// both true.
///
/// The serialized shape uses camelCase field names to match the wire contract
/// shared with non-Rust consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptPolicy {
    /// Whether tool-call identifiers must be rewritten into a
    /// vendor-acceptable format before transmission.
    pub sanitize_tool_call_ids: bool,
    /// Which rewrite scheme to apply when `sanitize_tool_call_ids` is true.
    /// `None` when sanitization is disabled. Also `None` for Google, which
    /// sanitizes without a defined scheme; if Google grows one it becomes a
    /// new [`ToolCallIdMode`] variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id_mode: Option<ToolCallIdMode>,
    /// Whether the transcript must be checked against Anthropic's strict
    /// user/assistant alternation rule. Applied to non-OpenAI providers
    /// riding the shared completions dialect, whose permissive framing
    /// otherwise allows sequences the downstream vendor may reject.
    pub validate_anthropic_turns: bool,
    /// Whether the transcript must instead be checked against Gemini's own
    /// alternation/structure rule (native Google dialect only).
    pub validate_gemini_turns: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_has_all_flags_off() {
        let policy = TranscriptPolicy::default();
        assert!(!policy.sanitize_tool_call_ids);
        assert!(policy.tool_call_id_mode.is_none());
        assert!(!policy.validate_anthropic_turns);
        assert!(!policy.validate_gemini_turns);
    }

    #[test]
    fn tool_call_id_mode_uses_lowercase_wire_tags() {
        assert_eq!(
            serde_json::to_string(&ToolCallIdMode::Strict).unwrap(),
            "\"strict\""
        );
        assert_eq!(
            serde_json::to_string(&ToolCallIdMode::Strict9).unwrap(),
            "\"strict9\""
        );
    }

    #[test]
    fn unset_mode_is_omitted_from_serialized_policy() {
        let policy = TranscriptPolicy {
            sanitize_tool_call_ids: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&policy).unwrap();
        assert!(json.get("toolCallIdMode").is_none());
        assert_eq!(json["sanitizeToolCallIds"], true);
    }
}
