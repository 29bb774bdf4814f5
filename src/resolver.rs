//! Transcript policy resolver.
//!
//! One deterministic decision function over two independent axes:
//!
//! - Axis A (identifier format) keys on the provider id and decides whether
//!   tool-call ids must be rewritten, and with which scheme.
//! - Axis B (turn structure) keys on the wire-API dialect, cross-checked
//!   against the provider, and decides which vendor's turn-alternation rule
//!   the transcript must satisfy.
//!
//! The axes never interact; their results are merged into one policy record.
//! Adding a vendor or dialect is a localized edit to one axis, not a
//! cross-product change.

use crate::error::{PolicyError, Result};
use crate::types::{ModelApi, ModelDescriptor, ProviderId, ToolCallIdMode, TranscriptPolicy};

/// Resolve the transcript-compatibility policy for a model descriptor.
///
/// Pure and total over well-formed descriptors: unknown providers and dialects
/// resolve to the conservative default (no sanitization, no extra validation),
/// never to an error. The one boundary failure is an empty `provider`, which a
/// caller cannot otherwise tell apart from "no rule applies".
///
/// # Examples
///
/// ```rust
/// use transcript_policy::{resolve_transcript_policy, ModelDescriptor};
///
/// let descriptor = ModelDescriptor::new("zai", "glm-4.7")
///     .with_model_api("openai-completions");
/// let policy = resolve_transcript_policy(&descriptor).unwrap();
/// assert!(policy.validate_anthropic_turns);
/// assert!(!policy.validate_gemini_turns);
/// ```
pub fn resolve_transcript_policy(descriptor: &ModelDescriptor) -> Result<TranscriptPolicy> {
    if descriptor.provider.is_empty() {
        return Err(PolicyError::MissingProvider);
    }

    let provider = ProviderId::from_name(&descriptor.provider);
    let model_api = descriptor.model_api.as_deref().map(ModelApi::from_name);

    let (sanitize_tool_call_ids, tool_call_id_mode) = id_format_rules(&provider);
    let (validate_anthropic_turns, validate_gemini_turns) =
        turn_structure_rules(&provider, model_api.as_ref());

    let policy = TranscriptPolicy {
        sanitize_tool_call_ids,
        tool_call_id_mode,
        validate_anthropic_turns,
        validate_gemini_turns,
    };
    tracing::debug!(
        "resolved transcript policy for provider={} model={}: {:?}",
        provider,
        descriptor.model_id,
        policy
    );
    Ok(policy)
}

/// Axis A: identifier-format rules, keyed by provider.
fn id_format_rules(provider: &ProviderId) -> (bool, Option<ToolCallIdMode>) {
    match provider {
        ProviderId::Anthropic => (true, Some(ToolCallIdMode::Strict)),
        // Google sanitizes but has no defined scheme; see ToolCallIdMode docs.
        ProviderId::Google => (true, None),
        ProviderId::Mistral => (true, Some(ToolCallIdMode::Strict9)),
        ProviderId::OpenAi | ProviderId::Other(_) => (false, None),
    }
}

/// Axis B: turn-structure rules, keyed by wire-API dialect and cross-checked
/// against the provider. Returns `(validate_anthropic_turns, validate_gemini_turns)`.
fn turn_structure_rules(provider: &ProviderId, model_api: Option<&ModelApi>) -> (bool, bool) {
    match model_api {
        Some(ModelApi::GoogleGenerativeAi) => (false, true),
        // Non-OpenAI vendors on the shared completions dialect inherit the
        // stricter Anthropic-style alternation discipline; the dialect's
        // permissive framing otherwise allows sequences those vendors reject.
        Some(ModelApi::OpenAiCompletions) if *provider != ProviderId::OpenAi => (true, false),
        _ => (false, false),
    }
}
