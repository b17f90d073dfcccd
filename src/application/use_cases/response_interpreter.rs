use serde_json::Value;
use tracing::debug;

use crate::domain::{CompletionEnvelope, DomainError, EnvelopeKind, Interpretation};

/// Turns the provider's raw reply into an [`Interpretation`].
///
/// The reply is expected to be a `{"type": ..., "content": ...}` object but
/// is not trusted to be one.
pub struct ResponseInterpreter;

impl ResponseInterpreter {
    /// Remove a surrounding markdown fence (```` ```json ```` or ```` ``` ````)
    /// that some models add despite being told not to.
    pub fn strip_code_fence(raw: &str) -> &str {
        let trimmed = raw.trim();
        let inner = if let Some(s) = trimmed.strip_prefix("```json") {
            s
        } else if let Some(s) = trimmed.strip_prefix("```JSON") {
            s
        } else if let Some(s) = trimmed.strip_prefix("```") {
            s
        } else {
            trimmed
        };
        inner.strip_suffix("```").unwrap_or(inner).trim()
    }

    /// Parse the envelope. Non-string `type` or `content` fields count as missing.
    pub fn parse_envelope(raw: &str) -> Result<CompletionEnvelope, DomainError> {
        let body = Self::strip_code_fence(raw);

        let value: Value = serde_json::from_str(body)
            .map_err(|e| DomainError::interpretation(format!("reply is not valid JSON: {e}")))?;

        let object = value
            .as_object()
            .ok_or_else(|| DomainError::interpretation("reply is not a JSON object"))?;

        let kind = EnvelopeKind::from_tag(object.get("type").and_then(Value::as_str));
        let content = object
            .get("content")
            .and_then(Value::as_str)
            .unwrap_or_default();

        Ok(CompletionEnvelope::new(kind, content))
    }

    pub fn interpret(raw: &str) -> Result<Interpretation, DomainError> {
        let envelope = Self::parse_envelope(raw)?;
        debug!(
            "Interpreted envelope: type={} content_len={}",
            envelope.kind().as_str(),
            envelope.content().len()
        );

        if envelope.content().trim().is_empty() {
            return Err(DomainError::EmptyContent);
        }

        Ok(match envelope.kind() {
            EnvelopeKind::Sql => Interpretation::Data(envelope.into_content()),
            EnvelopeKind::Chat => Interpretation::Conversational(envelope.into_content()),
        })
    }
}
