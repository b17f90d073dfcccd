use std::sync::Arc;

use tracing::info;

use crate::application::{QueryExecutor, QueryRow};
use crate::domain::DomainError;

use super::QueryMediator;

/// Answers a natural-language question by translating it and running the
/// resulting statement against the store.
pub struct AskQuestionUseCase {
    mediator: Arc<QueryMediator>,
    executor: Arc<dyn QueryExecutor>,
}

impl AskQuestionUseCase {
    pub fn new(mediator: Arc<QueryMediator>, executor: Arc<dyn QueryExecutor>) -> Self {
        Self { mediator, executor }
    }

    pub async fn execute(&self, question: &str) -> Result<Vec<QueryRow>, DomainError> {
        info!("Answering question: {}", question);

        let sql = self.mediator.translate(question).await;
        let rows = self.executor.execute(&sql).await?;

        info!("Question produced {} rows", rows.len());
        Ok(rows)
    }
}
