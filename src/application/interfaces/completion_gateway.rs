use async_trait::async_trait;

use crate::domain::{Conversation, DomainError};

/// Sends a conversation to a text-completion provider and returns the raw
/// text of its first choice.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details so the mediator can be exercised against a deterministic stub.
/// Every failure (transport, timeout, non-2xx status, zero choices) must be
/// reported as [`DomainError::GenerationFailed`]; implementors never retry.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, conversation: &Conversation) -> Result<String, DomainError>;

    /// Get the model identifier sent with each request
    fn model_name(&self) -> &str;
}
