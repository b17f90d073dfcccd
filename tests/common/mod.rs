#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use inventory_ai::{CompletionGateway, Conversation, DomainError};

/// Deterministic gateway: returns a fixed reply (or a generation failure)
/// and records the conversations it was given.
pub struct StubGateway {
    reply: Result<String, String>,
    calls: AtomicUsize,
    last_user: std::sync::Mutex<Option<String>>,
}

impl StubGateway {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            calls: AtomicUsize::new(0),
            last_user: std::sync::Mutex::new(None),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            reply: Err(reason.into()),
            calls: AtomicUsize::new(0),
            last_user: std::sync::Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_user(&self) -> Option<String> {
        self.last_user.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionGateway for StubGateway {
    async fn complete(&self, conversation: &Conversation) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_user.lock().unwrap() = Some(conversation.user().to_string());
        self.reply.clone().map_err(DomainError::generation)
    }

    fn model_name(&self) -> &str {
        "stub"
    }
}
