use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::application::CompletionGateway;
use crate::domain::{DomainError, Interpretation};

use super::{ensure_read_only, wrap_literal, PromptComposer, ResponseInterpreter};

pub const PROVIDER_UNAVAILABLE_MESSAGE: &str = "Error: AI provider unavailable.";
pub const UNINTERPRETABLE_MESSAGE: &str = "Error: Could not interpret AI response.";
pub const EMPTY_CONTENT_MESSAGE: &str = "Error: AI returned an empty response.";
pub const UNSAFE_STATEMENT_MESSAGE: &str = "Error: Only read-only SELECT queries are allowed.";
pub const SYSTEM_FAILURE_MESSAGE: &str = "Error: System failure.";

/// Translates a natural-language question into exactly one executable SQL
/// statement.
///
/// Data questions come back as the provider's `SELECT`; conversation and every
/// failure come back as a `SELECT '<text>' AS message;` literal, so callers
/// only ever need one code path.
pub struct QueryMediator {
    composer: PromptComposer,
    gateway: Arc<dyn CompletionGateway>,
}

impl QueryMediator {
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self {
            composer: PromptComposer::default(),
            gateway,
        }
    }

    /// Never fails: errors are converted into a literal carrying a stable
    /// message per failure category (see [`failure_message`]).
    pub async fn translate(&self, question: &str) -> String {
        let start_time = Instant::now();

        let sql = match self.try_translate(question).await {
            Ok(sql) => sql,
            Err(e) => {
                warn!("Translation failed: {}", e);
                wrap_literal(failure_message(&e))
            }
        };

        info!(
            "Translated question in {:.2}s using {}",
            start_time.elapsed().as_secs_f64(),
            self.gateway.model_name()
        );
        debug!("Mediated SQL: {}", sql);

        sql
    }

    async fn try_translate(&self, question: &str) -> Result<String, DomainError> {
        let conversation = self.composer.compose(question);
        let raw = self.gateway.complete(&conversation).await?;
        debug!("Raw completion: {}", raw);

        match ResponseInterpreter::interpret(&raw)? {
            Interpretation::Data(sql) => {
                ensure_read_only(&sql)?;
                Ok(sql)
            }
            Interpretation::Conversational(text) => Ok(wrap_literal(&text)),
        }
    }
}

/// The user-facing message for a failed translation.
pub fn failure_message(error: &DomainError) -> &'static str {
    match error {
        DomainError::GenerationFailed(_) => PROVIDER_UNAVAILABLE_MESSAGE,
        DomainError::InterpretationFailed(_) => UNINTERPRETABLE_MESSAGE,
        DomainError::EmptyContent => EMPTY_CONTENT_MESSAGE,
        DomainError::UnsafeStatement(_) => UNSAFE_STATEMENT_MESSAGE,
        _ => SYSTEM_FAILURE_MESSAGE,
    }
}
